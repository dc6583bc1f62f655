//! Informational modal contents.

/// Title and body of a modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Confirmation shown after an emoji lands on the clipboard.
    pub fn emoji_copied(emoji: &str) -> Self {
        Self::new("Copied", format!("Emoji {} copied to clipboard!", emoji))
    }
}
