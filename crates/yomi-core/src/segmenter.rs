use crate::dictionary::Dictionary;

/// Longest word the hover lookup will try, in characters
pub const DEFAULT_MAX_WORD_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub word: String,
    /// Character offset one past the matched word
    pub end_offset: usize,
}

/// CJK Unified Ideographs block, the script test used before a hover lookup
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Greedy longest match of a dictionary key starting exactly at `offset`.
///
/// Offsets count characters, not bytes. The match only ever extends to the
/// right: a pointer resting in the middle of a word finds the longest key
/// starting at that character, never the word that encloses it.
pub fn forward_match<D: Dictionary + ?Sized>(
    dictionary: &D,
    text: &str,
    offset: usize,
    max_word_length: usize,
) -> Option<MatchResult> {
    // Byte boundaries of the window: bounds[k] is where a k-character candidate ends.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .skip(offset)
        .take(max_word_length + 1)
        .collect();

    let start = *bounds.first()?;

    for len in (1..bounds.len()).rev() {
        let candidate = &text[start..bounds[len]];
        if dictionary.contains(candidate) {
            return Some(MatchResult {
                word: candidate.to_string(),
                end_offset: offset + len,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryTable, FieldLayout, LineGrammar};

    fn table(lines: &str) -> DictionaryTable {
        let grammar = LineGrammar::new(
            r"^(?P<headword>\S+)\s+(?P<second>\S+)\s+\[(?P<third>[^\]]*)\]\s+/(?P<defs>.*)/\s*$",
            FieldLayout::HeadwordVariants,
        )
        .unwrap();
        DictionaryTable::build("test", lines, &grammar)
    }

    fn sample() -> DictionaryTable {
        table(
            "\
中 中 [zhong1] /middle/
中國 中国 [Zhong1 guo2] /China/
中國人 中国人 [Zhong1 guo2 ren2] /Chinese person/
人 人 [ren2] /person/
",
        )
    }

    #[test]
    fn test_prefers_longest_key() {
        let dict = sample();
        let m = forward_match(&dict, "我是中國人。", 2, DEFAULT_MAX_WORD_LENGTH).unwrap();
        assert_eq!(m.word, "中國人");
        assert_eq!(m.end_offset, 5);
    }

    #[test]
    fn test_respects_max_word_length() {
        let dict = sample();
        let m = forward_match(&dict, "中國人", 0, 2).unwrap();
        assert_eq!(m.word, "中國");
        assert_eq!(m.end_offset, 2);
    }

    #[test]
    fn test_matches_simplified_variant() {
        let dict = sample();
        let m = forward_match(&dict, "中国人", 0, DEFAULT_MAX_WORD_LENGTH).unwrap();
        assert_eq!(m.word, "中国人");
    }

    #[test]
    fn test_never_looks_backward() {
        let dict = sample();
        // Offset 1 sits on 國, which only exists as part of 中國
        assert!(forward_match(&dict, "中國", 1, DEFAULT_MAX_WORD_LENGTH).is_none());
    }

    #[test]
    fn test_clips_at_text_end() {
        let dict = sample();
        let m = forward_match(&dict, "人", 0, DEFAULT_MAX_WORD_LENGTH).unwrap();
        assert_eq!(m.end_offset, 1);
        assert!(forward_match(&dict, "人", 1, DEFAULT_MAX_WORD_LENGTH).is_none());
        assert!(forward_match(&dict, "人", 7, DEFAULT_MAX_WORD_LENGTH).is_none());
    }

    #[test]
    fn test_zero_max_length_matches_nothing() {
        let dict = sample();
        assert!(forward_match(&dict, "中", 0, 0).is_none());
    }

    #[test]
    fn test_is_cjk_ideograph() {
        assert!(is_cjk_ideograph('中'));
        assert!(is_cjk_ideograph('語'));
        assert!(!is_cjk_ideograph('か'));
        assert!(!is_cjk_ideograph('a'));
        assert!(!is_cjk_ideograph('。'));
    }
}
