use std::env;

use serde::{Deserialize, Serialize};

use crate::Language;

const HSK_URL: &str = "https://raw.githubusercontent.com/natipt/obsidian-zhongwen-reader/main/hsk-vocab.json";

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HighlightConfig {
    /// Tier list inside the data directory: JSON object, or a `.tsv` JLPT list
    pub tier_file: Option<String>,
    pub download_url: Option<String>,
    /// Class prefix of the emitted spans (`hsk-highlight hsk-level-1`)
    pub class_prefix: Option<String>,
}

impl HighlightConfig {
    pub fn new() -> Self {
        Self {
            tier_file: env::var("YOMI_TIER_FILE").ok(),
            download_url: env::var("YOMI_TIER_URL").ok(),
            class_prefix: env::var("YOMI_CLASS_PREFIX").ok(),
        }
    }

    pub fn tier_file(&self, language: Language) -> &str {
        match (&self.tier_file, language) {
            (Some(name), _) => name,
            (None, Language::Zh) => "hsk-vocab.json",
            (None, Language::Ja) => "jlpt-vocab.tsv",
        }
    }

    pub fn download_url(&self, language: Language) -> Option<&str> {
        match (&self.download_url, language) {
            (Some(url), _) => Some(url.as_str()),
            (None, Language::Zh) => Some(HSK_URL),
            (None, Language::Ja) => None,
        }
    }

    pub fn class_prefix(&self, language: Language) -> &str {
        match (&self.class_prefix, language) {
            (Some(prefix), _) => prefix,
            (None, Language::Zh) => "hsk",
            (None, Language::Ja) => "jlpt",
        }
    }
}
