use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("Failed to write vocab list {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize vocab list: {0}")]
    Serialize(#[from] serde_json::Error),
}
