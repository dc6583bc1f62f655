//! UI module for the tray icon and the eframe windows.
//!
//! This module provides the toolkit-facing pieces: the system tray icon,
//! the colour dialog shell, the emoji finder window, and shared styling.

pub mod color_dialog;
pub mod error_window;
pub mod finder_window;
pub mod fonts;
pub mod notice;
pub mod picker_window;
pub mod theme;
pub mod tray;

pub use error_window::show_error;
pub use finder_window::FinderWindow;
pub use picker_window::PickerWindow;
pub use tray::{TrayError, TrayEvent, TrayManager};
