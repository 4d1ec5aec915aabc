pub mod dictionary;
pub mod error;
pub mod language;
pub mod lookup;
pub mod segmenter;

pub use dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata, DictionaryTable, FieldLayout, LineGrammar};
pub use error::LoadError;
pub use language::{LanguageProcessor, ReadingDisplay};
pub use lookup::{LookupResult, lookup_at, render_tooltip};
pub use segmenter::{DEFAULT_MAX_WORD_LENGTH, MatchResult, forward_match, is_cjk_ideograph};
