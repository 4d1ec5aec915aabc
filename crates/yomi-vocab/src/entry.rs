use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yomi_core::DictionaryEntry;

/// One saved word in the vocabulary list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabEntry {
    pub headword: String,
    pub alt_headword: String,
    pub reading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_reading: Option<String>,
    pub definitions: Vec<String>,
    pub added_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub example_sentences: Vec<String>,
}

impl VocabEntry {
    /// Build a record from the dictionary entries found for a word.
    ///
    /// The first entry supplies the headword and readings; definitions of all
    /// entries are merged in first-seen order without duplicates. Returns
    /// `None` when there are no entries.
    pub fn from_entries(entries: &[&DictionaryEntry], added_at: DateTime<Utc>) -> Option<Self> {
        let representative = entries.first()?;

        let mut seen = std::collections::HashSet::new();
        let definitions = entries
            .iter()
            .flat_map(|e| e.definitions.iter())
            .filter(|d| seen.insert(d.as_str()))
            .cloned()
            .collect();

        Some(Self {
            headword: representative.headword.clone(),
            alt_headword: representative.alt_headword.clone(),
            reading: representative.reading.clone(),
            secondary_reading: representative.secondary_reading.clone(),
            definitions,
            added_at,
            example_sentences: Vec::new(),
        })
    }

    /// Whether this record was saved for `word` under either headword form
    pub fn matches(&self, word: &str) -> bool {
        self.headword == word || self.alt_headword == word
    }
}
