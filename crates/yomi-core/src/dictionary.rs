use std::collections::HashMap;

use regex::Regex;

use crate::error::LoadError;

/// Capture groups every line grammar has to define
const REQUIRED_GROUPS: [&str; 4] = ["headword", "second", "third", "defs"];

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// All entries indexed under `word`, in file order
    fn lookup(&self, word: &str) -> Vec<&DictionaryEntry>;

    /// Whether `word` is a key of the dictionary
    fn contains(&self, word: &str) -> bool {
        !self.lookup(word).is_empty()
    }

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// One parsed dictionary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub headword: String,
    /// Equal to `headword` when the format has no variant form
    pub alt_headword: String,
    /// Space-separated syllables, e.g. `zhong1 guo2` or `デン ネン`
    pub reading: String,
    /// Second reading block of formats that carry two (kun'yomi in JEDICT)
    pub secondary_reading: Option<String>,
    pub definitions: Vec<String>,
}

/// How the two middle capture groups of a line are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// `second` is an alternate headword, `third` is the reading (CEDICT)
    HeadwordVariants,
    /// `second` and `third` are two reading blocks, there is no alternate headword (JEDICT)
    ReadingBlocks,
}

/// Compiled line grammar with the named groups `headword`, `second`, `third` and `defs`
#[derive(Debug, Clone)]
pub struct LineGrammar {
    pattern: Regex,
    layout: FieldLayout,
}

impl LineGrammar {
    pub fn new(pattern: &str, layout: FieldLayout) -> Result<Self, LoadError> {
        let pattern = Regex::new(pattern)?;

        let names: Vec<&str> = pattern.capture_names().flatten().collect();
        if let Some(missing) = REQUIRED_GROUPS.iter().find(|group| !names.contains(group)) {
            return Err(LoadError::MissingGroup(missing.to_string()));
        }

        Ok(Self { pattern, layout })
    }

    /// Parse one raw line. Comments, blank lines and lines the pattern
    /// rejects all yield `None`.
    pub fn parse_line(&self, line: &str) -> Option<DictionaryEntry> {
        if line.starts_with('#') || line.trim().is_empty() {
            return None;
        }

        let caps = self.pattern.captures(line.trim_end())?;
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str()).trim();

        let headword = group("headword");
        if headword.is_empty() {
            return None;
        }

        let definitions = split_definitions(group("defs"));
        if definitions.is_empty() {
            return None;
        }

        let second = collapse_whitespace(group("second"));
        let third = collapse_whitespace(group("third"));

        let (alt_headword, reading, secondary_reading) = match self.layout {
            FieldLayout::HeadwordVariants => {
                let alt = if second.is_empty() {
                    headword.to_string()
                } else {
                    second
                };
                (alt, third, None)
            }
            FieldLayout::ReadingBlocks => {
                let secondary = (!third.is_empty()).then_some(third);
                (headword.to_string(), second, secondary)
            }
        };

        Some(DictionaryEntry {
            headword: headword.to_string(),
            alt_headword,
            reading,
            secondary_reading,
            definitions,
        })
    }
}

/// Split a `/`-delimited blob, dropping the empty fragments the outer delimiters leave behind
fn split_definitions(blob: &str) -> Vec<String> {
    let mut parts: Vec<&str> = blob.split('/').collect();

    while parts.first().is_some_and(|p| p.is_empty()) {
        parts.remove(0);
    }
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    parts.into_iter().map(str::to_string).collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub entry_count: usize,
    pub key_count: usize,
    /// Longest key, in characters
    pub longest_headword: usize,
}

/// Headword-indexed dictionary, built once and read-only afterwards
#[derive(Debug, Default)]
pub struct DictionaryTable {
    name: String,
    entries: Vec<DictionaryEntry>,
    index: HashMap<String, Vec<usize>>,
    longest_headword: usize,
}

impl DictionaryTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build a table from decoded dictionary text
    pub fn build(name: impl Into<String>, text: &str, grammar: &LineGrammar) -> Self {
        let mut table = Self::new(name);
        let mut skipped = 0usize;

        for line in text.lines() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            match grammar.parse_line(line) {
                Some(entry) => table.insert(entry),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!("{}: skipped {} malformed lines", table.name, skipped);
        }

        table
    }

    /// Decode raw bytes as UTF-8 and build a table from them
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: &[u8],
        grammar: &LineGrammar,
    ) -> Result<Self, LoadError> {
        let name = name.into();
        let text = std::str::from_utf8(bytes).map_err(|e| LoadError::unreadable(&name, e))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        Ok(Self::build(name, text, grammar))
    }

    fn insert(&mut self, entry: DictionaryEntry) {
        let idx = self.entries.len();

        self.index_key(&entry.headword, idx);
        if entry.alt_headword != entry.headword {
            self.index_key(&entry.alt_headword, idx);
        }

        self.entries.push(entry);
    }

    fn index_key(&mut self, key: &str, idx: usize) {
        self.longest_headword = self.longest_headword.max(key.chars().count());
        self.index.entry(key.to_string()).or_default().push(idx);
    }

    /// Append the entries of another table after this table's entries
    pub fn merge(mut self, other: DictionaryTable) -> Self {
        for entry in other.entries {
            self.insert(entry);
        }
        self
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for DictionaryTable {
    fn lookup(&self, word: &str) -> Vec<&DictionaryEntry> {
        self.index
            .get(word)
            .map(|indices| indices.iter().filter_map(|&i| self.entries.get(i)).collect())
            .unwrap_or_default()
    }

    fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            entry_count: self.entries.len(),
            key_count: self.index.len(),
            longest_headword: self.longest_headword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CEDICT: &str = r"^(?P<headword>\S+)\s+(?P<second>\S+)\s+\[(?P<third>[^\]]*)\]\s+/(?P<defs>.*)/\s*$";
    const JEDICT: &str = r"^(?P<headword>\p{Han}+)\s+\\(?P<second>[\p{Katakana}ー\s]+)\\\s+\[(?P<third>[\p{Hiragana}ー.\-\s]+)\]\s+/(?P<defs>.+)/";

    fn cedict() -> LineGrammar {
        LineGrammar::new(CEDICT, FieldLayout::HeadwordVariants).unwrap()
    }

    fn jedict() -> LineGrammar {
        LineGrammar::new(JEDICT, FieldLayout::ReadingBlocks).unwrap()
    }

    #[test]
    fn test_parse_jedict_line() {
        let entry = jedict().parse_line(r"語 \ゴ\ [かた] /language/word/").unwrap();
        assert_eq!(entry.headword, "語");
        assert_eq!(entry.alt_headword, "語");
        assert_eq!(entry.reading, "ゴ");
        assert_eq!(entry.secondary_reading.as_deref(), Some("かた"));
        assert_eq!(entry.definitions, vec!["language", "word"]);
    }

    #[test]
    fn test_parse_jedict_multiple_readings() {
        let entry = jedict()
            .parse_line(r"鮎 \デン  ネン\ [あゆ なまず] /freshwater trout, smelt/")
            .unwrap();
        assert_eq!(entry.reading, "デン ネン");
        assert_eq!(entry.secondary_reading.as_deref(), Some("あゆ なまず"));
        assert_eq!(entry.definitions, vec!["freshwater trout, smelt"]);
    }

    #[test]
    fn test_parse_cedict_line() {
        let entry = cedict()
            .parse_line("中國 中国 [Zhong1 guo2] /China/Middle Kingdom/")
            .unwrap();
        assert_eq!(entry.headword, "中國");
        assert_eq!(entry.alt_headword, "中国");
        assert_eq!(entry.reading, "Zhong1 guo2");
        assert_eq!(entry.secondary_reading, None);
        assert_eq!(entry.definitions, vec!["China", "Middle Kingdom"]);
    }

    #[test]
    fn test_parse_line_rejects_comments_and_garbage() {
        let grammar = cedict();
        assert!(grammar.parse_line("# CC-CEDICT header").is_none());
        assert!(grammar.parse_line("   ").is_none());
        assert!(grammar.parse_line("中國 中国 Zhong1 guo2 China").is_none());
        assert!(grammar.parse_line("中國 中国 [Zhong1 guo2] //").is_none());
    }

    #[test]
    fn test_parse_line_tolerates_crlf() {
        let entry = cedict().parse_line("好 好 [hao3] /good/\r").unwrap();
        assert_eq!(entry.definitions, vec!["good"]);
    }

    #[test]
    fn test_grammar_requires_all_groups() {
        let err = LineGrammar::new(r"^(?P<headword>\S+) (?P<defs>.*)$", FieldLayout::HeadwordVariants)
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingGroup(ref g) if g == "second"));

        let err = LineGrammar::new(r"(unclosed", FieldLayout::HeadwordVariants).unwrap_err();
        assert!(matches!(err, LoadError::InvalidGrammar(_)));
    }

    #[test]
    fn test_build_indexes_both_headwords_in_file_order() {
        let text = "\
# comment
中國 中国 [Zhong1 guo2] /China/
not a valid line
行 行 [xing2] /to walk/
行 行 [hang2] /row/
";
        let table = DictionaryTable::build("test", text, &cedict());

        assert_eq!(table.entry_count(), 3);
        assert_eq!(table.lookup("中國").len(), 1);
        assert_eq!(table.lookup("中国").len(), 1);

        let readings: Vec<&str> = table.lookup("行").iter().map(|e| e.reading.as_str()).collect();
        assert_eq!(readings, vec!["xing2", "hang2"]);

        assert!(table.lookup("不在").is_empty());
        assert!(!table.contains("不在"));

        let meta = table.metadata();
        assert_eq!(meta.key_count, 3);
        assert_eq!(meta.longest_headword, 2);
    }

    #[test]
    fn test_build_empty_dictionary_is_valid() {
        let table = DictionaryTable::build("empty", "# only comments\n\n", &cedict());
        assert!(table.is_empty());
        assert!(table.lookup("中").is_empty());
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let err = DictionaryTable::from_bytes("broken.u8", &[0xff, 0xfe, 0x00], &cedict()).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnreadable { ref name, .. } if name == "broken.u8"));
    }

    #[test]
    fn test_from_bytes_skips_bom() {
        let bytes = "\u{feff}好 好 [hao3] /good/\n".as_bytes();
        let table = DictionaryTable::from_bytes("bom", bytes, &cedict()).unwrap();
        assert!(table.contains("好"));
    }

    #[test]
    fn test_merge_appends_after_existing_entries() {
        let grammar = cedict();
        let base = DictionaryTable::build("base", "行 行 [xing2] /to walk/\n", &grammar);
        let extra = DictionaryTable::build("extra", "行 行 [hang2] /row/\n好 好 [hao3] /good/\n", &grammar);

        let merged = base.merge(extra);
        assert_eq!(merged.entry_count(), 3);
        assert_eq!(merged.lookup("行")[1].reading, "hang2");
        assert!(merged.contains("好"));
    }
}
