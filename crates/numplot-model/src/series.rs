//! Parsed numbers and the series they are grouped into.

use serde::{Deserialize, Serialize};

use crate::range::SourceRange;

/// A single parsed number and the exact text it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub value: f64,
    pub range: SourceRange,
}

impl Token {
    pub fn new(value: f64, range: SourceRange) -> Self {
        Self { value, range }
    }
}

/// One line's worth of tokens, in source order. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Token>", into = "Vec<Token>")]
pub struct Series(Vec<Token>);

impl Series {
    /// Wraps `tokens`, or returns `None` when there are none.
    pub fn new(tokens: Vec<Token>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self(tokens))
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> &Token {
        &self.0[0]
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|token| token.value)
    }

    /// 1-based document line of the first token, used to name datasets.
    pub fn display_line(&self) -> usize {
        self.first().range.start_line + 1
    }
}

impl TryFrom<Vec<Token>> for Series {
    type Error = String;

    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        Self::new(tokens).ok_or_else(|| "series must contain at least one token".to_string())
    }
}

impl From<Series> for Vec<Token> {
    fn from(series: Series) -> Self {
        series.0
    }
}

/// Everything produced by one parse of one or more selections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesSet {
    pub series: Vec<Series>,
    /// Trimmed preview of the first line that produced numbers.
    pub short_label: String,
    pub file_path: String,
    /// One range per original selection.
    pub ranges: Vec<SourceRange>,
}

impl SeriesSet {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// Length of the longest series, 0 when empty.
    pub fn max_len(&self) -> usize {
        self.series.iter().map(Series::len).max().unwrap_or(0)
    }

    pub fn token_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// File name without directories, accepting both separator styles.
    pub fn file_name(&self) -> &str {
        self.file_path
            .rsplit(['/', '\\'])
            .find(|name| !name.is_empty())
            .unwrap_or(self.file_path.as_str())
    }
}
