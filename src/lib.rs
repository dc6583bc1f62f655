//! Pigment Moji - Library
//!
//! Two small desktop utilities sharing one crate:
//!
//! - **Pigment Picker**: a tray icon whose menu opens a colour dialog and
//!   copies the chosen colour as `#rrggbb` or `rgb(R, G, B)`.
//! - **FuzzyMoji Finder**: a window that fuzzy-filters an emoji list as you
//!   type and copies the selected emoji.
//!
//! Decision logic lives outside [`ui`] so it runs without a desktop session.

pub mod clipboard;
pub mod color;
pub mod config;
pub mod emoji;
pub mod fuzzy;
pub mod logging;
pub mod notice;
pub mod picker;
pub mod resources;
pub mod ui;

pub use clipboard::{ClipboardError, ClipboardPort, LazyClipboard, MemoryClipboard};
pub use color::{ColorDialog, ColorFormat, DialogOutcome, Rgb};
pub use config::{FinderConfig, PickerConfig};
pub use emoji::{load_entries, EmojiEntry, EmojiError, EmojiFinder};
pub use fuzzy::{PartialRatio, Scorer};
pub use notice::Notice;
pub use picker::{MenuAction, PickerCommand, PigmentPicker};
pub use ui::{FinderWindow, PickerWindow};
