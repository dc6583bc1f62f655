//! Application settings.
//!
//! Neither utility takes flags; settings are fixed defaults. Resource paths
//! are relative and resolved against the working directory first, then the
//! directory holding the executable.

use crate::emoji::finder::DEFAULT_THRESHOLD;
use std::path::{Path, PathBuf};

/// Tray colour picker settings.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Tray icon image (PNG)
    pub icon_path: PathBuf,

    /// Tray tooltip
    pub tooltip: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            icon_path: PathBuf::from("images").join("colour.png"),
            tooltip: crate::picker::APP_NAME.to_string(),
        }
    }
}

/// Emoji finder settings.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// JSON dataset of `{emoji, description}` records
    pub dataset_path: PathBuf,

    /// Font used to draw emoji
    pub font_path: PathBuf,

    /// Minimum fuzzy score (0-100) for a field to match a query
    pub similarity_threshold: u8,

    pub window_title: String,

    /// Window position (x, y)
    pub window_position: (f32, f32),

    /// Window size (width, height)
    pub window_size: (f32, f32),
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("emoji.json"),
            font_path: PathBuf::from("NotoEmoji-Regular.ttf"),
            similarity_threshold: DEFAULT_THRESHOLD,
            window_title: "FuzzyMoji Finder".to_string(),
            window_position: (100.0, 100.0),
            window_size: (300.0, 400.0),
        }
    }
}

/// Locate a resource file.
///
/// Absolute paths are returned as-is. Relative paths are tried against the
/// working directory, then next to the executable. If neither exists the
/// working-directory path is returned so the caller reports it.
pub fn resolve_resource(path: &Path) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_in(path, exe_dir.as_deref())
}

fn resolve_in(path: &Path, exe_dir: Option<&Path>) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }

    if let Some(dir) = exe_dir {
        let candidate = dir.join(path);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Resolved resource next to executable");
            return candidate;
        }
    }

    path.to_path_buf()
}
