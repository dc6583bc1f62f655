//! Emoji dataset records and loading.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One emoji and its description, as stored in the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    /// The emoji itself (one or more code points)
    pub emoji: String,

    /// Human-readable description, e.g. "grinning face"
    pub description: String,
}

impl EmojiEntry {
    pub fn new(emoji: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            description: description.into(),
        }
    }
}

/// Dataset loading error types.
#[derive(Debug, Error)]
pub enum EmojiError {
    #[error("Failed to read emoji dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed emoji dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read the dataset file: a UTF-8 JSON array of `{"emoji", "description"}` records.
pub fn load_entries(path: &Path) -> Result<Vec<EmojiEntry>, EmojiError> {
    let bytes = std::fs::read(path).map_err(|source| EmojiError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&bytes).map_err(|source| EmojiError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(count = entries.len(), path = %path.display(), "Loaded emoji dataset");
    Ok(entries)
}

/// Parse dataset contents.
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<EmojiEntry>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dataset(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pigment-moji-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_multibyte_entries() {
        let path = temp_dataset(
            "valid",
            r#"[{"emoji":"😀","description":"grinning face"},{"emoji":"🐶","description":"dog face"}]"#,
        );

        let entries = load_entries(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            entries,
            vec![
                EmojiEntry::new("😀", "grinning face"),
                EmojiEntry::new("🐶", "dog face"),
            ]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("pigment-moji-does-not-exist.json");
        let err = load_entries(&path).unwrap_err();
        assert!(matches!(err, EmojiError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = temp_dataset("malformed", r#"[{"emoji":"😀"}]"#);
        let err = load_entries(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, EmojiError::Parse { .. }));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let entries =
            parse_entries(r#"[{"emoji":"🐶","description":"dog face","category":"animals"}]"#.as_bytes())
                .unwrap();
        assert_eq!(entries[0].description, "dog face");
    }
}
