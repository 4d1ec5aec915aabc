use once_cell::sync::Lazy;
use yomi_core::language::{LanguageProcessor, ReadingDisplay};
use yomi_core::{FieldLayout, LineGrammar};

use crate::pinyin::convert_multi_syllable;

/// `中國 中国 [Zhong1 guo2] /China/`
pub const CEDICT_PATTERN: &str =
    r"^(?P<headword>\S+)\s+(?P<second>\S+)\s+\[(?P<third>[^\]]*)\]\s+/(?P<defs>.*)/\s*$";

static CEDICT: Lazy<LineGrammar> = Lazy::new(|| {
    LineGrammar::new(CEDICT_PATTERN, FieldLayout::HeadwordVariants).expect("Invalid CEDICT pattern")
});

/// Chinese reader: CEDICT dictionary, pinyin with tone marks and zhuyin
pub struct ChineseProcessor {
    grammar: LineGrammar,
}

impl ChineseProcessor {
    pub fn new() -> Self {
        Self {
            grammar: CEDICT.clone(),
        }
    }

    /// Use a custom line pattern laid out like CEDICT
    pub fn with_grammar(grammar: LineGrammar) -> Self {
        Self { grammar }
    }
}

impl Default for ChineseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for ChineseProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn line_grammar(&self) -> &LineGrammar {
        &self.grammar
    }

    fn transliterate(&self, reading: &str) -> ReadingDisplay {
        let converted = convert_multi_syllable(reading);
        ReadingDisplay {
            reading: converted.accented,
            transliteration: converted.alphabet,
        }
    }
}

#[cfg(test)]
mod tests {
    use yomi_core::{DictionaryTable, lookup_at, render_tooltip};

    use super::*;

    const SAMPLE: &str = "\
# CC-CEDICT
中國 中国 [Zhong1 guo2] /China/Middle Kingdom/
中 中 [zhong1] /middle/
人 人 [ren2] /person/
";

    #[test]
    fn test_cedict_grammar() {
        let processor = ChineseProcessor::new();
        let table = DictionaryTable::build("cedict", SAMPLE, processor.line_grammar());
        assert_eq!(table.entry_count(), 3);
    }

    #[test]
    fn test_hover_tooltip() {
        let processor = ChineseProcessor::new();
        let table = DictionaryTable::build("cedict", SAMPLE, processor.line_grammar());

        let result = lookup_at(&table, "我是中国人", 2, 5, |c| processor.is_lookup_char(c)).unwrap();
        assert_eq!(result.word, "中国");
        assert_eq!(
            render_tooltip(&result, &processor),
            "Zhōng guó (ㄓㄨㄥ ㄍㄨㄛˊ)\nChina; Middle Kingdom"
        );
    }
}
