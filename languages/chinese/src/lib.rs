pub mod pinyin;
pub mod processor;
pub mod zhuyin;

pub use pinyin::{Transliteration, convert_multi_syllable, to_accented};
pub use processor::ChineseProcessor;
pub use zhuyin::{ReplacementTable, to_zhuyin};
