use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use yomi_config::{Config, Language};

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Resolve the configuration for this run.
///
/// `.env` is loaded first so it feeds the environment defaults. A profile
/// file replaces those defaults; `language` and `data_dir` override both.
pub fn load_config(
    profile: Option<&Path>,
    language: Option<Language>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<Config> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env loaded: {}", e);
    }

    let mut config = match profile {
        Some(path) => load_profile(path)?,
        None => Config::new(),
    };

    if let Some(language) = language {
        config.language = language;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }

    Ok(config)
}

/// Read a profile: either `{"name": ..., "value": {...}}` or a bare config object
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;

    if let Ok(profile) = serde_json::from_str::<Profile>(&data) {
        tracing::info!("Loaded profile '{}'", profile.name);
        return Ok(profile.value);
    }

    serde_json::from_str(&data).with_context(|| format!("Invalid profile {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.json");

        let mut config = Config::default();
        config.language = Language::Ja;
        config.vocab.save_sentences = true;
        let profile = Profile {
            name: "main".into(),
            value: config,
        };
        fs::write(&path, serde_json::to_string_pretty(&profile).unwrap()).unwrap();

        let loaded = load_profile(&path).unwrap();
        assert_eq!(loaded.language, Language::Ja);
        assert!(loaded.vocab.save_sentences);
    }

    #[test]
    fn test_bare_config_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.json");
        fs::write(&path, r#"{"data_dir": "/srv/yomi", "dictionary": {"max_word_length": 8}}"#).unwrap();

        let config = load_config(Some(&path), Some(Language::Ja), None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/yomi"));
        assert_eq!(config.dictionary.max_word_length, 8);
        assert_eq!(config.language, Language::Ja);
    }

    #[test]
    fn test_invalid_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        assert!(load_profile(&path).is_err());
        assert!(load_profile(&dir.path().join("missing.json")).is_err());
    }
}
