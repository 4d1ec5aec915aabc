use std::env;

use serde::{Deserialize, Serialize};

fn default_file_name() -> String {
    "vocab.json".to_string()
}

fn default_flashcard_tags() -> Vec<String> {
    vec!["flashcards".to_string(), "ChineseVocab".to_string()]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct VocabConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Store the sentence around a word when saving it
    pub save_sentences: bool,
    #[serde(default = "default_flashcard_tags")]
    pub flashcard_tags: Vec<String>,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            save_sentences: false,
            flashcard_tags: default_flashcard_tags(),
        }
    }
}

impl VocabConfig {
    pub fn new() -> Self {
        let save_sentences = env::var("YOMI_SAVE_SENTENCES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self {
            save_sentences,
            ..Self::default()
        }
    }
}
