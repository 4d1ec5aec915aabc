use std::env;

use serde::{Deserialize, Serialize};

use crate::Language;

const CEDICT_URL: &str = "https://raw.githubusercontent.com/natipt/obsidian-zhongwen-reader/main/cedict_ts.u8";

fn default_max_word_length() -> usize {
    5
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// File name inside the data directory; language default when unset
    pub file_name: Option<String>,
    /// Where to fetch the dictionary on first run; language default when unset
    pub download_url: Option<String>,
    /// Extra dictionaries merged after the main one
    pub additional_paths: Vec<String>,
    /// Custom line pattern with `headword`, `second`, `third` and `defs` groups
    pub line_pattern: Option<String>,
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            file_name: None,
            download_url: None,
            additional_paths: vec![],
            line_pattern: None,
            max_word_length: default_max_word_length(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let max_word_length = env::var("YOMI_MAX_WORD_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or_else(default_max_word_length);

        Self {
            file_name: env::var("YOMI_DICT_FILE").ok(),
            download_url: env::var("YOMI_DICT_URL").ok(),
            additional_paths: vec![],
            line_pattern: env::var("YOMI_LINE_PATTERN").ok(),
            max_word_length,
        }
    }

    pub fn file_name(&self, language: Language) -> &str {
        match (&self.file_name, language) {
            (Some(name), _) => name,
            (None, Language::Zh) => "cedict_ts.u8",
            (None, Language::Ja) => "jedict_ts.u8",
        }
    }

    /// No upstream JEDICT mirror exists, so Japanese has no default URL
    pub fn download_url(&self, language: Language) -> Option<&str> {
        match (&self.download_url, language) {
            (Some(url), _) => Some(url.as_str()),
            (None, Language::Zh) => Some(CEDICT_URL),
            (None, Language::Ja) => None,
        }
    }
}
