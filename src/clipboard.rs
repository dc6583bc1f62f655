//! Clipboard access.
//!
//! Both utilities only ever write plain text to the clipboard. The port is a
//! trait so the decision logic can run against an in-memory clipboard in tests.

use thiserror::Error;

/// Clipboard error types.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write clipboard: {0}")]
    Write(String),

    #[error("Failed to read clipboard: {0}")]
    Read(String),
}

/// Read/write access to a text clipboard.
pub trait ClipboardPort {
    /// Current clipboard text, if any.
    fn read(&mut self) -> Result<Option<String>, ClipboardError>;

    /// Replace the clipboard contents with `text`.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: ClipboardPort + ?Sized> ClipboardPort for &mut T {
    fn read(&mut self) -> Result<Option<String>, ClipboardError> {
        (**self).read()
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write(text)
    }
}

/// The operating system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard.
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardPort for SystemClipboard {
    fn read(&mut self) -> Result<Option<String>, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardError::Read(e.to_string())),
        }
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// System clipboard opened on first use.
///
/// A clipboard that cannot be opened is retried on the next access.
#[derive(Default)]
pub struct LazyClipboard {
    inner: Option<SystemClipboard>,
}

impl LazyClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&mut self) -> Result<&mut SystemClipboard, ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(SystemClipboard::new()?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("not opened".to_string()))
    }
}

impl ClipboardPort for LazyClipboard {
    fn read(&mut self) -> Result<Option<String>, ClipboardError> {
        self.get()?.read()
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.get()?.write(text)
    }
}

/// In-process clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard that already holds `text`.
    pub fn with_contents(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
            writes: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of writes performed since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ClipboardPort for MemoryClipboard {
    fn read(&mut self) -> Result<Option<String>, ClipboardError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}
