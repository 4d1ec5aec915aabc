use unicode_normalization::UnicodeNormalization;

/// Fold katakana onto hiragana; everything else is returned as is
fn to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Hepburn spelling of a single hiragana
fn kana_romaji(c: char) -> Option<&'static str> {
    let romaji = match c {
        'あ' | 'ぁ' => "a",
        'い' | 'ぃ' => "i",
        'う' | 'ぅ' => "u",
        'え' | 'ぇ' => "e",
        'お' | 'ぉ' => "o",
        'か' => "ka",
        'き' => "ki",
        'く' => "ku",
        'け' => "ke",
        'こ' => "ko",
        'が' => "ga",
        'ぎ' => "gi",
        'ぐ' => "gu",
        'げ' => "ge",
        'ご' => "go",
        'さ' => "sa",
        'し' => "shi",
        'す' => "su",
        'せ' => "se",
        'そ' => "so",
        'ざ' => "za",
        'じ' | 'ぢ' => "ji",
        'ず' | 'づ' => "zu",
        'ぜ' => "ze",
        'ぞ' => "zo",
        'た' => "ta",
        'ち' => "chi",
        'つ' => "tsu",
        'て' => "te",
        'と' => "to",
        'だ' => "da",
        'で' => "de",
        'ど' => "do",
        'な' => "na",
        'に' => "ni",
        'ぬ' => "nu",
        'ね' => "ne",
        'の' => "no",
        'は' => "ha",
        'ひ' => "hi",
        'ふ' => "fu",
        'へ' => "he",
        'ほ' => "ho",
        'ば' => "ba",
        'び' => "bi",
        'ぶ' => "bu",
        'べ' => "be",
        'ぼ' => "bo",
        'ぱ' => "pa",
        'ぴ' => "pi",
        'ぷ' => "pu",
        'ぺ' => "pe",
        'ぽ' => "po",
        'ま' => "ma",
        'み' => "mi",
        'む' => "mu",
        'め' => "me",
        'も' => "mo",
        'や' | 'ゃ' => "ya",
        'ゆ' | 'ゅ' => "yu",
        'よ' | 'ょ' => "yo",
        'ら' => "ra",
        'り' => "ri",
        'る' => "ru",
        'れ' => "re",
        'ろ' => "ro",
        'わ' | 'ゎ' => "wa",
        'ゐ' => "wi",
        'ゑ' => "we",
        'を' => "wo",
        'ゔ' => "vu",
        _ => return None,
    };
    Some(romaji)
}

/// Romaji of the syllable starting at `i` and the number of kana it spans.
///
/// Small ya/yu/yo after an i-row kana form one syllable (`きゃ` → `kya`,
/// `しゃ` → `sha`); a small vowel replaces the vowel of the kana before it
/// (`ふぁ` → `fa`).
fn syllable_at(chars: &[char], i: usize) -> Option<(String, usize)> {
    let base = kana_romaji(*chars.get(i)?)?;

    match chars.get(i + 1).copied() {
        Some(small @ ('ゃ' | 'ゅ' | 'ょ')) if base.len() > 1 && base.ends_with('i') => {
            let stem = &base[..base.len() - 1];
            let vowel = &kana_romaji(small)?[1..];
            let glide = if stem.ends_with("sh") || stem.ends_with("ch") || stem.ends_with('j') {
                ""
            } else {
                "y"
            };
            Some((format!("{stem}{glide}{vowel}"), 2))
        }
        Some(small @ ('ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ')) if base.len() > 1 => {
            let stem = &base[..base.len() - 1];
            Some((format!("{stem}{}", kana_romaji(small)?), 2))
        }
        _ => Some((base.to_string(), 1)),
    }
}

/// Hepburn romanization of hiragana and katakana.
///
/// Half-width katakana are folded by NFKC first. `っ` doubles the next
/// consonant, `ー` repeats the previous vowel, and `ん` before a vowel or `y`
/// is written `n'`. Characters that are not kana pass through unchanged.
pub fn to_romaji(text: &str) -> String {
    let chars: Vec<char> = text.nfkc().map(to_hiragana).collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            'っ' => {
                if let Some((next, _)) = syllable_at(&chars, i + 1) {
                    if next.starts_with("ch") {
                        out.push('t');
                    } else if let Some(first) = next.chars().next().filter(|c| !is_vowel(*c)) {
                        out.push(first);
                    }
                }
                i += 1;
            }
            'ー' => {
                match out.chars().last().filter(|c| is_vowel(*c)) {
                    Some(vowel) => out.push(vowel),
                    None => out.push('ー'),
                }
                i += 1;
            }
            'ん' => {
                out.push('n');
                let ambiguous = syllable_at(&chars, i + 1)
                    .is_some_and(|(next, _)| next.starts_with(['a', 'i', 'u', 'e', 'o', 'y']));
                if ambiguous {
                    out.push('\'');
                }
                i += 1;
            }
            c => match syllable_at(&chars, i) {
                Some((romaji, len)) => {
                    out.push_str(&romaji);
                    i += len;
                }
                None => {
                    out.push(c);
                    i += 1;
                }
            },
        }
    }

    out
}
