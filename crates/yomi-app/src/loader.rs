use std::fs;
use std::path::{Path, PathBuf};

use yomi_core::{Dictionary, DictionaryTable, LineGrammar, LoadError};
use yomi_highlight::TierTable;
use yomi_lang_japanese::JlptLevels;

fn read_table(path: &Path, grammar: &LineGrammar) -> Result<DictionaryTable, LoadError> {
    let name = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| LoadError::unreadable(&name, e))?;
    DictionaryTable::from_bytes(name, &bytes, grammar)
}

/// Load the main dictionary and merge the additional ones after it.
///
/// The main dictionary must be readable; an unreadable additional dictionary
/// is skipped with a warning.
pub fn load_dictionary(
    path: &Path,
    additional: &[PathBuf],
    grammar: &LineGrammar,
) -> Result<DictionaryTable, LoadError> {
    tracing::info!("Loading dictionary from file: {}", path.display());
    let mut table = read_table(path, grammar)?;

    for extra in additional {
        match read_table(extra, grammar) {
            Ok(more) => {
                tracing::info!("Merging additional dictionary from: {}", extra.display());
                table = table.merge(more);
            }
            Err(e) => tracing::warn!("Failed to load dictionary from {}: {}", extra.display(), e),
        }
    }

    let meta = table.metadata();
    tracing::info!(
        "Loaded {} dictionary entries under {} headwords",
        meta.entry_count,
        meta.key_count
    );
    if table.is_empty() {
        tracing::warn!("{} contains no valid entries", path.display());
    }

    Ok(table)
}

/// Load the tier list: a `.tsv` JLPT list or a JSON tier object.
///
/// A missing JLPT list falls back to the built-in levels. Other missing or
/// unreadable lists give an empty table.
pub fn load_tiers(path: &Path) -> TierTable {
    let is_tsv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));

    if !path.exists() {
        if is_tsv {
            tracing::warn!("Tier list {} not found, using built-in JLPT levels", path.display());
            return TierTable::from_pairs(JlptLevels::with_defaults().tier_pairs());
        }
        tracing::warn!("Tier list {} not found, highlighting is disabled", path.display());
        return TierTable::new();
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read tier list {}: {}", path.display(), e);
            return TierTable::new();
        }
    };

    let name = path.display().to_string();
    let table = if is_tsv {
        std::str::from_utf8(&bytes)
            .map(|text| TierTable::from_pairs(JlptLevels::from_tsv(text).tier_pairs()))
            .map_err(|e| LoadError::unreadable(&name, e))
    } else {
        TierTable::from_bytes(&name, &bytes)
    };

    match table {
        Ok(table) => {
            tracing::info!("Loaded {} tier words from {}", table.word_count(), name);
            table
        }
        Err(e) => {
            tracing::warn!("Failed to load tier list: {}", e);
            TierTable::new()
        }
    }
}
