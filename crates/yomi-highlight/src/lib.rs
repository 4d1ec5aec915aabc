pub mod buffer;
pub mod highlighter;
pub mod markup;
pub mod tiers;

pub use buffer::{TextBuffer, clear_buffer, highlight_buffer};
pub use highlighter::apply_tiers;
pub use markup::{Markup, MarkupError};
pub use tiers::TierTable;
