//! Source locations inside the host document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// A span of document text, zero-based, half-open on the column axis.
///
/// Serializes in the editor's `{start: {line, character}, end: {...}}` shape
/// so ranges can be handed to the navigator unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct SourceRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SourceRange {
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A range covering `len` columns of a single line, clamped at the
    /// largest representable column.
    pub fn on_line(line: usize, column: usize, len: usize) -> Self {
        Self::new(line, column, line, column.saturating_add(len))
    }

    /// Like [`SourceRange::new`], but `None` when the end lies before the
    /// start.
    pub fn ordered(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Option<Self> {
        ((start_line, start_column) <= (end_line, end_column))
            .then(|| Self::new(start_line, start_column, end_line, end_column))
    }

    /// Last line that actually contains selected text (1-based).
    ///
    /// A selection ending at column 0 stops before that line starts.
    pub fn last_display_line(&self) -> usize {
        if self.end_column == 0 && self.end_line > self.start_line {
            self.end_line
        } else {
            self.end_line + 1
        }
    }

    /// Extracts the covered text from `source`, counting columns in chars.
    ///
    /// Returns `None` when the range lies outside the text.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        let lines: Vec<&str> = source.split('\n').collect();
        let start = byte_offset(&lines, self.start_line, self.start_column)?;
        let end = byte_offset(&lines, self.end_line, self.end_column)?;
        source.get(start..end)
    }
}

fn byte_offset(lines: &[&str], line: usize, column: usize) -> Option<usize> {
    let text = lines.get(line)?;
    let line_start: usize = lines[..line].iter().map(|l| l.len() + 1).sum();
    let within = if column == text.chars().count() {
        text.len()
    } else {
        text.char_indices().nth(column)?.0
    };
    Some(line_start + within)
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_column, self.end_line, self.end_column
        )
    }
}

impl FromStr for SourceRange {
    type Err = PlotError;

    /// Parses `LINE:COL-LINE:COL` (zero-based), the same text `Display` writes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlotError::InvalidRange(s.to_string());
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let (start_line, start_column) = parse_position(start).ok_or_else(invalid)?;
        let (end_line, end_column) = parse_position(end).ok_or_else(invalid)?;
        Self::ordered(start_line, start_column, end_line, end_column).ok_or_else(invalid)
    }
}

fn parse_position(text: &str) -> Option<(usize, usize)> {
    let (line, column) = text.split_once(':')?;
    Some((line.trim().parse().ok()?, column.trim().parse().ok()?))
}

#[derive(Serialize, Deserialize)]
struct PositionRepr {
    line: usize,
    character: usize,
}

#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: PositionRepr,
    end: PositionRepr,
}

impl TryFrom<RangeRepr> for SourceRange {
    type Error = PlotError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        let RangeRepr { start, end } = repr;
        Self::ordered(start.line, start.character, end.line, end.character).ok_or_else(|| {
            PlotError::InvalidRange(format!(
                "{}:{}-{}:{}",
                start.line, start.character, end.line, end.character
            ))
        })
    }
}

impl From<SourceRange> for RangeRepr {
    fn from(range: SourceRange) -> Self {
        Self {
            start: PositionRepr {
                line: range.start_line,
                character: range.start_column,
            },
            end: PositionRepr {
                line: range.end_line,
                character: range.end_column,
            },
        }
    }
}
