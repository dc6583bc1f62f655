//! Colour selection values and the colour dialog contract.
//!
//! A colour is produced by a dialog, formatted, and handed to the clipboard.
//! Nothing here is persisted.

pub mod dialog;
pub mod model;

pub use dialog::{ColorDialog, DialogOutcome};
pub use model::{ColorFormat, Rgb};
