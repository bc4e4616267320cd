//! Plotted points and the tokens they were derived from.

use serde::{Deserialize, Serialize};

use crate::range::SourceRange;
use crate::series::Token;

/// Token(s) that produced a plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Provenance {
    /// Plain charts: the token is the Y value, X is its index.
    Single { token: Token },
    /// XY charts: one token per axis.
    Pair { x: Token, y: Token },
}

impl Provenance {
    pub fn ranges(&self) -> Vec<SourceRange> {
        match self {
            Provenance::Single { token } => vec![token.range],
            Provenance::Pair { x, y } => vec![x.range, y.range],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePoint {
    pub x: f64,
    pub y: f64,
    pub provenance: Provenance,
}

impl CoordinatePoint {
    /// Point built from an X token and a Y token.
    pub fn paired(x: Token, y: Token) -> Self {
        Self {
            x: x.value,
            y: y.value,
            provenance: Provenance::Pair { x, y },
        }
    }

    /// Point for the `index`-th token of a plain series.
    pub fn indexed(index: usize, token: Token) -> Self {
        Self {
            x: index as f64,
            y: token.value,
            provenance: Provenance::Single { token },
        }
    }

    /// Exchanges the axes, provenance included.
    #[must_use]
    pub fn swapped(self) -> Self {
        let provenance = match self.provenance {
            Provenance::Pair { x, y } => Provenance::Pair { x: y, y: x },
            single @ Provenance::Single { .. } => single,
        };
        Self {
            x: self.y,
            y: self.x,
            provenance,
        }
    }
}

/// One labeled sequence of points, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<CoordinatePoint>,
}
