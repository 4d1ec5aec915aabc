use once_cell::sync::Lazy;
use yomi_core::language::{LanguageProcessor, ReadingDisplay};
use yomi_core::{DictionaryEntry, FieldLayout, LineGrammar};

use crate::kana::to_romaji;

/// `語 \ゴ\ [かた] /language/word/`: kanji, on'yomi block, kun'yomi block, definitions
pub const JEDICT_PATTERN: &str = r"^(?P<headword>\p{Han}+)\s+\\(?P<second>[\p{Katakana}ー\s]+)\\\s+\[(?P<third>[\p{Hiragana}ー.\-\s]+)\]\s+/(?P<defs>.+)/";

static JEDICT: Lazy<LineGrammar> = Lazy::new(|| {
    LineGrammar::new(JEDICT_PATTERN, FieldLayout::ReadingBlocks).expect("Invalid JEDICT pattern")
});

/// Japanese language processor: JEDICT kanji dictionary, readings with romaji
pub struct JapaneseProcessor {
    grammar: LineGrammar,
}

impl JapaneseProcessor {
    pub fn new() -> Self {
        Self {
            grammar: JEDICT.clone(),
        }
    }

    /// Use a custom line pattern whose middle groups are two reading blocks
    pub fn with_grammar(grammar: LineGrammar) -> Self {
        Self { grammar }
    }
}

impl Default for JapaneseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for JapaneseProcessor {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn line_grammar(&self) -> &LineGrammar {
        &self.grammar
    }

    fn transliterate(&self, reading: &str) -> ReadingDisplay {
        ReadingDisplay {
            reading: reading.to_string(),
            transliteration: to_romaji(reading),
        }
    }

    /// Both reading blocks, on'yomi first: `ゴ / かた (go / kata)`
    fn render_reading(&self, entry: &DictionaryEntry) -> ReadingDisplay {
        let blocks: Vec<&str> = std::iter::once(entry.reading.as_str())
            .chain(entry.secondary_reading.as_deref())
            .filter(|block| !block.is_empty())
            .collect();

        ReadingDisplay {
            reading: blocks.join(" / "),
            transliteration: blocks.iter().map(|b| to_romaji(b)).collect::<Vec<_>>().join(" / "),
        }
    }
}
