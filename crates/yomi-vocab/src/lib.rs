pub mod entry;
pub mod error;
pub mod export;
pub mod sentence;
pub mod storage;
pub mod store;

pub use entry::VocabEntry;
pub use error::VocabError;
pub use export::{export_csv, export_flashcards};
pub use sentence::{extract_sentence, find_line};
pub use storage::{FsStorage, MemoryStorage, Storage};
pub use store::{UpsertOutcome, VocabStore};
