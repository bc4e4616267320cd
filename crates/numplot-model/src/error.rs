use thiserror::Error;

use crate::mode::ParseMode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// A first-line mode was requested for a set with fewer than two series.
    #[error("{mode} needs at least 2 series, found {series_count}")]
    ModeUnavailable {
        mode: ParseMode,
        series_count: usize,
    },
    /// A click referenced a point that was never produced.
    #[error("no point {point_index} in series {series_index}")]
    IndexOutOfRange {
        series_index: usize,
        point_index: usize,
    },
    #[error("{texts} selection texts but {ranges} selection ranges")]
    SelectionMismatch { texts: usize, ranges: usize },
    /// Malformed range text, an end before the start, or a start too close
    /// to `usize::MAX` to hold the selected text.
    #[error("invalid range '{0}': expected LINE:COL-LINE:COL ending at or after its start")]
    InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
