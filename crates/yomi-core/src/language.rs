use crate::dictionary::{DictionaryEntry, LineGrammar};
use crate::segmenter::is_cjk_ideograph;

/// Per-language dictionary format and reading display
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", ...)
    fn language_code(&self) -> &str;

    /// Line grammar of this language's dictionary file
    fn line_grammar(&self) -> &LineGrammar;

    /// Whether a pointer resting on `c` may start a lookup
    fn is_lookup_char(&self, c: char) -> bool {
        is_cjk_ideograph(c)
    }

    /// Convert a raw reading into its display forms
    fn transliterate(&self, reading: &str) -> ReadingDisplay;

    /// Display forms for a dictionary entry's reading
    fn render_reading(&self, entry: &DictionaryEntry) -> ReadingDisplay {
        self.transliterate(&entry.reading)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingDisplay {
    /// Main reading line, e.g. `zhōng guó` or `デン, ネン`
    pub reading: String,
    /// Alternate script, e.g. `ㄓㄨㄥ ㄍㄨㄛˊ` or `den`
    pub transliteration: String,
}
