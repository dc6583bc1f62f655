//! Emoji dataset and the searchable list behind the finder window.

pub mod entry;
pub mod finder;

pub use entry::{load_entries, parse_entries, EmojiEntry, EmojiError};
pub use finder::{EmojiFinder, ROW_SEPARATOR};
