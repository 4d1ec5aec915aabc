use unicode_normalization::UnicodeNormalization;

use crate::zhuyin::to_zhuyin;

/// Vowels in the order they claim the tone mark
const VOWEL_PRIORITY: [char; 6] = ['a', 'o', 'e', 'i', 'u', 'ü'];

/// Tone 1-5 forms of each vowel, tone 5 being the bare vowel
const TONE_TABLE: [(char, [char; 5]); 12] = [
    ('a', ['ā', 'á', 'ǎ', 'à', 'a']),
    ('o', ['ō', 'ó', 'ǒ', 'ò', 'o']),
    ('e', ['ē', 'é', 'ě', 'è', 'e']),
    ('i', ['ī', 'í', 'ǐ', 'ì', 'i']),
    ('u', ['ū', 'ú', 'ǔ', 'ù', 'u']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü']),
    ('A', ['Ā', 'Á', 'Ǎ', 'À', 'A']),
    ('O', ['Ō', 'Ó', 'Ǒ', 'Ò', 'O']),
    ('E', ['Ē', 'É', 'Ě', 'È', 'E']),
    ('I', ['Ī', 'Í', 'Ǐ', 'Ì', 'I']),
    ('U', ['Ū', 'Ú', 'Ǔ', 'Ù', 'U']),
    ('Ü', ['Ǖ', 'Ǘ', 'Ǚ', 'Ǜ', 'Ü']),
];

const NEUTRAL_TONE: u8 = 5;

/// Both display forms of a transcription
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transliteration {
    pub accented: String,
    pub alphabet: String,
}

/// Split a trailing tone digit 1-5 off a syllable
pub(crate) fn split_tone(syllable: &str) -> (&str, Option<u8>) {
    match syllable.chars().last() {
        Some(c @ '1'..='5') => (&syllable[..syllable.len() - 1], Some(c as u8 - b'0')),
        _ => (syllable, None),
    }
}

/// `u:` is how CEDICT spells ü
fn normalize_umlaut(core: &str) -> String {
    core.replace("u:", "ü").replace("U:", "Ü").nfc().collect()
}

fn fold(c: char) -> char {
    match c {
        'Ü' => 'ü',
        _ => c.to_ascii_lowercase(),
    }
}

/// Byte index of the vowel that carries the tone mark
fn tone_target(core: &str) -> Option<usize> {
    let chars: Vec<(usize, char)> = core.char_indices().map(|(i, c)| (i, fold(c))).collect();
    let has_iu = chars.windows(2).any(|w| w[0].1 == 'i' && w[1].1 == 'u');

    VOWEL_PRIORITY
        .iter()
        // in `iu` the mark goes on the u
        .filter(|&&v| !(v == 'i' && has_iu))
        .find_map(|&v| chars.iter().rev().find(|(_, c)| *c == v).map(|(i, _)| *i))
}

fn with_tone(vowel: char, tone: u8) -> char {
    TONE_TABLE
        .iter()
        .find(|(bare, _)| *bare == vowel)
        .map_or(vowel, |(_, forms)| forms[usize::from(tone.clamp(1, 5) - 1)])
}

/// `ma3` → `mǎ`, `lu:4` → `lǜ`, `ma` → `ma`
pub fn to_accented(syllable: &str) -> String {
    let (core, tone) = split_tone(syllable);
    let core = normalize_umlaut(core);
    let tone = tone.unwrap_or(NEUTRAL_TONE);

    match tone_target(&core) {
        Some(target) => core
            .char_indices()
            .map(|(i, c)| if i == target { with_tone(c, tone) } else { c })
            .collect(),
        None => core,
    }
}

/// Convert a whitespace-separated transcription syllable by syllable.
///
/// Empty syllables stay empty so both outputs line up with the source.
pub fn convert_multi_syllable(transcription: &str) -> Transliteration {
    let syllables: Vec<&str> = transcription.split(char::is_whitespace).collect();

    Transliteration {
        accented: syllables.iter().map(|s| to_accented(s)).collect::<Vec<_>>().join(" "),
        alphabet: syllables.iter().map(|s| to_zhuyin(s)).collect::<Vec<_>>().join(" "),
    }
}
