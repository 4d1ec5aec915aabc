pub mod jlpt;
pub mod kana;
pub mod processor;

pub use jlpt::{JlptLevel, JlptLevels};
pub use kana::to_romaji;
pub use processor::JapaneseProcessor;
