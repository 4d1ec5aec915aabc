use std::collections::{BTreeMap, HashMap, HashSet};

use yomi_core::LoadError;

/// Proficiency tiers: tier id → words, lowest id first
#[derive(Debug, Clone, Default)]
pub struct TierTable {
    tiers: BTreeMap<u32, TierWords>,
}

/// Words of one tier in first-seen order, with a set for membership
#[derive(Debug, Clone, Default)]
struct TierWords {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl TierWords {
    fn push(&mut self, word: String) {
        if self.seen.insert(word.clone()) {
            self.ordered.push(word);
        }
    }
}

impl TierTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word to a tier. Duplicates within a tier are ignored.
    pub fn insert(&mut self, tier: u32, word: impl Into<String>) {
        self.tiers.entry(tier).or_default().push(word.into());
    }

    /// Build from `(word, tier)` pairs, e.g. a level list file
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (word, tier) in pairs {
            table.insert(tier, word);
        }
        table
    }

    /// Parse `{"1": ["爱", "八"], "2": [...]}`.
    ///
    /// Keys that are not positive integers are skipped with a warning; a
    /// document that is not such an object at all is unreadable.
    pub fn from_json(name: &str, json: &str) -> Result<Self, LoadError> {
        let raw: HashMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| LoadError::unreadable(name, e))?;

        let mut table = Self::new();
        for (key, words) in raw {
            match key.trim().parse::<u32>() {
                Ok(tier) if tier > 0 => {
                    for word in words {
                        table.insert(tier, word);
                    }
                }
                _ => tracing::warn!("{}: skipping tier with invalid id '{}'", name, key),
            }
        }

        Ok(table)
    }

    /// Decode UTF-8 bytes and parse them with [`TierTable::from_json`]
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        let json = std::str::from_utf8(bytes).map_err(|e| LoadError::unreadable(name, e))?;
        Self::from_json(name, json)
    }

    /// Tiers in ascending order with their words
    pub fn tiers(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.tiers.iter().map(|(tier, words)| (*tier, words.ordered.as_slice()))
    }

    pub fn words(&self, tier: u32) -> Option<&[String]> {
        self.tiers.get(&tier).map(|w| w.ordered.as_slice())
    }

    /// Lowest tier containing `word`
    pub fn tier_of(&self, word: &str) -> Option<u32> {
        self.tiers
            .iter()
            .find(|(_, words)| words.seen.contains(word))
            .map(|(tier, _)| *tier)
    }

    pub fn word_count(&self) -> usize {
        self.tiers.values().map(|w| w.ordered.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }
}
