#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Source unreadable: {name}: {reason}")]
    SourceUnreadable { name: String, reason: String },

    #[error("Invalid line grammar: {0}")]
    InvalidGrammar(#[from] regex::Error),

    #[error("Line grammar is missing capture group `{0}`")]
    MissingGroup(String),
}

impl LoadError {
    pub fn unreadable(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnreadable {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
