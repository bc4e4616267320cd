//! Configuration options for text parsing.

use serde::{Deserialize, Serialize};

/// Characters kept from the first numeric line in a series set's label.
pub const DEFAULT_PREVIEW_LENGTH: usize = 20;

/// Marker appended to a truncated preview label.
pub const ELLIPSIS: &str = " ...";

/// Options controlling how selections are turned into series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Maximum number of characters of the short label before truncation.
    pub preview_length: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preview_length(mut self, preview_length: usize) -> Self {
        self.preview_length = preview_length;
        self
    }
}
