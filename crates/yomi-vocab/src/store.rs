use std::path::{Path, PathBuf};

use chrono::Utc;
use yomi_core::DictionaryEntry;

use crate::entry::VocabEntry;
use crate::error::VocabError;
use crate::storage::Storage;

/// Result of saving a word. At most one flag is set; neither means the word
/// was already saved and nothing changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub created: bool,
    pub sentence_added: bool,
}

/// Vocabulary list persisted as one JSON array.
///
/// Every operation reads the whole list and writes it back; callers must not
/// run two saves of the same word concurrently.
pub struct VocabStore<S: Storage> {
    storage: S,
    path: PathBuf,
}

impl<S: Storage> VocabStore<S> {
    pub fn new(storage: S, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty list if none exists yet; returns whether one was created
    pub fn ensure_exists(&self) -> Result<bool, VocabError> {
        if self.storage.exists(&self.path) {
            return Ok(false);
        }
        self.save(&[])?;
        tracing::info!("Created vocab list at {}", self.path.display());
        Ok(true)
    }

    /// Saved entries. Missing, empty or corrupt storage reads as an empty list.
    pub fn load(&self) -> Vec<VocabEntry> {
        let bytes = match self.storage.read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("Vocab list {} not readable: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Vec::new();
        }

        match serde_json::from_slice(&bytes) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(
                    "Vocab list {} is corrupt, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Save `word`, or attach a new example sentence to its existing record.
    ///
    /// A sentence that is blank or just the word itself is ignored. With no
    /// existing record and no dictionary entries nothing is saved.
    pub fn upsert(
        &self,
        word: &str,
        entries: &[&DictionaryEntry],
        sentence: Option<&str>,
    ) -> Result<UpsertOutcome, VocabError> {
        let mut list = self.load();
        let sentence = sentence
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != word);

        if let Some(existing) = list.iter_mut().find(|e| e.matches(word)) {
            let Some(sentence) = sentence else {
                tracing::info!("{} is already in the vocab list", word);
                return Ok(UpsertOutcome::default());
            };
            if existing.example_sentences.iter().any(|s| s == sentence) {
                tracing::info!("{} is already in the vocab list", word);
                return Ok(UpsertOutcome::default());
            }

            existing.example_sentences.push(sentence.to_string());
            self.save(&list)?;
            tracing::info!("Added new sentence to {}", word);
            return Ok(UpsertOutcome {
                created: false,
                sentence_added: true,
            });
        }

        let Some(mut entry) = VocabEntry::from_entries(entries, Utc::now()) else {
            tracing::warn!("No dictionary entries for {}, not saving", word);
            return Ok(UpsertOutcome::default());
        };
        entry.example_sentences.extend(sentence.map(str::to_string));

        list.push(entry);
        self.save(&list)?;
        tracing::info!("Added {} to vocab list", word);

        Ok(UpsertOutcome {
            created: true,
            sentence_added: false,
        })
    }

    /// Saved entries whose headword occurs somewhere in `text`
    pub fn entries_in_text(&self, text: &str) -> Vec<VocabEntry> {
        self.load()
            .into_iter()
            .filter(|e| {
                [&e.headword, &e.alt_headword]
                    .iter()
                    .any(|h| !h.is_empty() && text.contains(h.as_str()))
            })
            .collect()
    }

    fn save(&self, list: &[VocabEntry]) -> Result<(), VocabError> {
        let json = serde_json::to_vec_pretty(list)?;
        self.storage
            .write(&self.path, &json)
            .map_err(|source| VocabError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
