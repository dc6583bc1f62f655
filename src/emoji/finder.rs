//! Searchable emoji list.
//!
//! Holds the loaded dataset, the current query, the visible rows and the
//! selected row. Every query change rebuilds the visible rows from scratch.

use super::entry::EmojiEntry;
use crate::clipboard::ClipboardPort;
use crate::fuzzy::{PartialRatio, Scorer};

/// Separator between the emoji and its description in a rendered row.
pub const ROW_SEPARATOR: &str = " - ";

/// Default minimum score for a field to count as a match.
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Render one list row.
pub fn render_row(entry: &EmojiEntry) -> String {
    format!("{}{}{}", entry.emoji, ROW_SEPARATOR, entry.description)
}

/// Emoji part of a rendered row.
pub fn emoji_of_row(row: &str) -> &str {
    row.split(ROW_SEPARATOR).next().unwrap_or(row)
}

/// Searchable list state for the finder window.
pub struct EmojiFinder {
    entries: Vec<EmojiEntry>,
    query: String,
    rows: Vec<String>,
    selected: Option<usize>,
    scorer: Box<dyn Scorer>,
    threshold: u8,
}

impl EmojiFinder {
    /// Create a finder showing every entry, using [`PartialRatio`] scoring.
    pub fn new(entries: Vec<EmojiEntry>) -> Self {
        Self::with_scorer(entries, Box::new(PartialRatio), DEFAULT_THRESHOLD)
    }

    /// Create a finder with a custom scorer and threshold.
    pub fn with_scorer(entries: Vec<EmojiEntry>, scorer: Box<dyn Scorer>, threshold: u8) -> Self {
        let mut finder = Self {
            entries: Vec::new(),
            query: String::new(),
            rows: Vec::new(),
            selected: None,
            scorer,
            threshold,
        };
        finder.render_list(&entries);
        finder.entries = entries;
        finder
    }

    /// The full dataset, in file order.
    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    /// Rows currently visible.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Raw text of the search field.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Replace the visible rows with one row per entry. Clears the selection.
    pub fn render_list(&mut self, entries: &[EmojiEntry]) {
        self.rows = entries.iter().map(render_row).collect();
        self.selected = None;
    }

    /// Recompute the visible rows for a new search field value.
    pub fn on_query_changed(&mut self, query: &str) {
        self.query = query.to_string();
        let needle = query.trim().to_lowercase();

        if needle.is_empty() {
            let entries = std::mem::take(&mut self.entries);
            self.render_list(&entries);
            self.entries = entries;
            return;
        }

        let matches: Vec<EmojiEntry> = self
            .entries
            .iter()
            .filter(|entry| self.matches(&needle, entry))
            .cloned()
            .collect();

        tracing::debug!(
            query = %needle,
            matched = matches.len(),
            total = self.entries.len(),
            "Filtered emoji list"
        );
        self.render_list(&matches);
    }

    /// True if either the emoji or the description scores at or above the threshold.
    fn matches(&self, needle: &str, entry: &EmojiEntry) -> bool {
        self.scorer.score(needle, &entry.emoji.to_lowercase()) >= self.threshold
            || self.scorer.score(needle, &entry.description.to_lowercase()) >= self.threshold
    }

    /// Highlight a row. Out-of-range rows clear the selection.
    pub fn select(&mut self, row: Option<usize>) {
        self.selected = row.filter(|&i| i < self.rows.len());
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    /// Text of the highlighted row.
    pub fn selected_text(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.rows.get(i))
            .map(String::as_str)
    }

    /// Copy the highlighted row's emoji to the clipboard.
    ///
    /// Returns the copied emoji, or `None` when nothing is selected or the
    /// clipboard refused the write.
    pub fn copy_selected_emoji<C: ClipboardPort>(&self, mut clipboard: C) -> Option<String> {
        let row = self.selected_text()?;
        let emoji = emoji_of_row(row).to_string();

        match clipboard.write(&emoji) {
            Ok(()) => {
                tracing::info!(emoji = %emoji, "Copied emoji to clipboard");
                Some(emoji)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                None
            }
        }
    }
}
