use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::highlight::HighlightConfig;
use self::network::NetworkConfig;
use self::vocab::VocabConfig;

pub mod dictionary;
pub mod highlight;
pub mod network;
pub mod vocab;

/// Reading language; picks the dictionary format and default file names
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    Ja,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "chinese" => Ok(Language::Zh),
            "ja" | "japanese" => Ok(Language::Ja),
            other => Err(format!("unsupported language '{other}' (expected zh or ja)")),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./yomi-data")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    /// Directory holding the dictionary, tier list and vocab list
    pub data_dir: PathBuf,

    pub dictionary: DictionaryConfig,
    pub highlight: HighlightConfig,
    pub vocab: VocabConfig,
    pub network: NetworkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            data_dir: default_data_dir(),
            dictionary: DictionaryConfig::default(),
            highlight: HighlightConfig::default(),
            vocab: VocabConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let language = env::var("YOMI_LANGUAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let data_dir = env::var("YOMI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Config {
            language,
            data_dir,
            dictionary: DictionaryConfig::new(),
            highlight: HighlightConfig::new(),
            vocab: VocabConfig::new(),
            network: NetworkConfig::new(),
        }
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.data_dir.join(self.dictionary.file_name(self.language))
    }

    pub fn tier_path(&self) -> PathBuf {
        self.data_dir.join(self.highlight.tier_file(self.language))
    }

    pub fn vocab_path(&self) -> PathBuf {
        self.data_dir.join(&self.vocab.file_name)
    }

    /// Extra dictionaries; relative paths are resolved against `data_dir`
    pub fn additional_dictionary_paths(&self) -> Vec<PathBuf> {
        self.dictionary
            .additional_paths
            .iter()
            .map(|p| self.data_dir.join(p))
            .collect()
    }
}
