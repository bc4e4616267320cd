//! Chart interpretation modes.
//!
//! A parsed [`SeriesSet`](crate::SeriesSet) can be shown two ways:
//!
//! - **Plain**: every series is plotted against its token index, as a line
//!   or bar chart ([`ChartKind`]).
//! - **XY**: tokens are paired into coordinates according to a
//!   [`ParseMode`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy for turning one-dimensional series into (X, Y) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParseMode {
    /// Within each series, even positions are X and odd positions are Y.
    #[default]
    AlternatingXY,
    /// Like `AlternatingXY` with X and Y swapped on every point.
    AlternatingYX,
    /// The first series supplies X for every following series.
    FirstLineX,
    /// Like `FirstLineX` with X and Y swapped on every point.
    FirstLineY,
}

impl ParseMode {
    /// All modes in cycling order.
    pub const ALL: [ParseMode; 4] = [
        ParseMode::AlternatingXY,
        ParseMode::AlternatingYX,
        ParseMode::FirstLineX,
        ParseMode::FirstLineY,
    ];

    /// Button titles, indexed like [`ParseMode::ALL`].
    pub const TITLES: [&'static str; 4] = ["X/Y Pairs", "Y/X Pairs", "First Line X", "First Line Y"];

    pub fn index(self) -> usize {
        match self {
            ParseMode::AlternatingXY => 0,
            ParseMode::AlternatingYX => 1,
            ParseMode::FirstLineX => 2,
            ParseMode::FirstLineY => 3,
        }
    }

    /// Mode at `index`, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        Self::TITLES[self.index()]
    }

    /// Returns true for the modes that pair against the first series.
    pub fn is_first_line(self) -> bool {
        matches!(self, ParseMode::FirstLineX | ParseMode::FirstLineY)
    }

    /// Whether this mode can be applied to a set of `series_count` series.
    pub fn is_available(self, series_count: usize) -> bool {
        !self.is_first_line() || series_count >= 2
    }

    /// Replaces an unavailable first-line mode with the alternating mode of
    /// the same orientation.
    pub fn clamp(self, series_count: usize) -> Self {
        if self.is_available(series_count) {
            return self;
        }
        match self {
            ParseMode::FirstLineY => ParseMode::AlternatingYX,
            _ => ParseMode::AlternatingXY,
        }
    }

    /// Next mode in cycling order, skipping modes unavailable for
    /// `series_count` series.
    pub fn next(self, series_count: usize) -> Self {
        let next = Self::from_index(self.index() + 1);
        if next.is_available(series_count) {
            next
        } else {
            ParseMode::AlternatingXY
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rendering for plain (index-on-X) charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

impl ChartKind {
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ChartKind::Line => ChartKind::Bar,
            ChartKind::Bar => ChartKind::Line,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two chart families a host can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartVariant {
    #[default]
    #[serde(rename = "lineChart")]
    Plain,
    #[serde(rename = "xyChart")]
    Xy,
}

impl ChartVariant {
    /// Command name the host uses to open this chart.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartVariant::Plain => "lineChart",
            ChartVariant::Xy => "xyChart",
        }
    }
}

impl fmt::Display for ChartVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
