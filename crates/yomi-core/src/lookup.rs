use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::language::LanguageProcessor;
use crate::segmenter::forward_match;

/// Word found under a pointer together with its dictionary entries
#[derive(Debug, Clone)]
pub struct LookupResult<'a> {
    pub word: String,
    /// Character offset of the first character of `word`
    pub start: usize,
    /// Character offset one past the last character of `word`
    pub end: usize,
    pub entries: Vec<&'a DictionaryEntry>,
}

/// Resolve the word starting at character `offset` of `text`.
///
/// `is_script` decides whether the character under the pointer belongs to the
/// dictionary's script; anything else is not looked up.
pub fn lookup_at<'a, D, F>(
    dictionary: &'a D,
    text: &str,
    offset: usize,
    max_word_length: usize,
    is_script: F,
) -> Option<LookupResult<'a>>
where
    D: Dictionary + ?Sized,
    F: Fn(char) -> bool,
{
    let c = text.chars().nth(offset)?;
    if !is_script(c) {
        return None;
    }

    let matched = forward_match(dictionary, text, offset, max_word_length)?;
    let entries = dictionary.lookup(&matched.word);
    tracing::debug!("'{}' at {}: {} entries", matched.word, offset, entries.len());

    Some(LookupResult {
        word: matched.word,
        start: offset,
        end: matched.end_offset,
        entries,
    })
}

/// Tooltip text: one block per entry, reading line then definitions
pub fn render_tooltip(result: &LookupResult<'_>, processor: &dyn LanguageProcessor) -> String {
    result
        .entries
        .iter()
        .map(|entry| {
            let display = processor.render_reading(entry);
            let heading = if display.transliteration.is_empty() {
                display.reading
            } else {
                format!("{} ({})", display.reading, display.transliteration)
            };
            format!("{}\n{}", heading, entry.definitions.join("; "))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryTable, FieldLayout, LineGrammar};
    use crate::language::ReadingDisplay;
    use crate::segmenter::is_cjk_ideograph;

    struct Plain(LineGrammar);

    impl LanguageProcessor for Plain {
        fn language_code(&self) -> &str {
            "xx"
        }

        fn line_grammar(&self) -> &LineGrammar {
            &self.0
        }

        fn transliterate(&self, reading: &str) -> ReadingDisplay {
            ReadingDisplay {
                reading: reading.to_uppercase(),
                transliteration: String::new(),
            }
        }
    }

    fn fixture() -> (Plain, DictionaryTable) {
        let grammar = LineGrammar::new(
            r"^(?P<headword>\S+)\s+(?P<second>\S+)\s+\[(?P<third>[^\]]*)\]\s+/(?P<defs>.*)/\s*$",
            FieldLayout::HeadwordVariants,
        )
        .unwrap();
        let table = DictionaryTable::build(
            "test",
            "行 行 [xing2] /to walk/to go/\n行 行 [hang2] /row/\n",
            &grammar,
        );
        (Plain(grammar), table)
    }

    #[test]
    fn test_lookup_at_returns_all_homographs() {
        let (_, table) = fixture();
        let result = lookup_at(&table, "一行", 1, 5, is_cjk_ideograph).unwrap();
        assert_eq!(result.word, "行");
        assert_eq!((result.start, result.end), (1, 2));
        assert_eq!(result.entries.len(), 2);
    }

    #[test]
    fn test_lookup_at_checks_script_and_bounds() {
        let (_, table) = fixture();
        assert!(lookup_at(&table, "a行", 0, 5, is_cjk_ideograph).is_none());
        assert!(lookup_at(&table, "行", 1, 5, is_cjk_ideograph).is_none());
        assert!(lookup_at(&table, "一", 0, 5, is_cjk_ideograph).is_none());
    }

    #[test]
    fn test_render_tooltip() {
        let (processor, table) = fixture();
        let result = lookup_at(&table, "行", 0, 5, is_cjk_ideograph).unwrap();
        assert_eq!(
            render_tooltip(&result, &processor),
            "XING2\nto walk; to go\n\nHANG2\nrow"
        );
    }
}
