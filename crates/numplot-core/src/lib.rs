//! Number series parsing and plotting logic.
//!
//! This crate turns selected text into chartable data and back:
//!
//! - **tokenizer**: located numbers from a line of free-form text
//! - **builder**: one series per numeric line across all selections
//! - **mapper**: plot coordinates for indexed and XY charts
//! - **resolver**: clicked points back to source ranges
//! - **session**: per-chart mode/kind/color state and sticky defaults
//! - **location**: chart header naming file and lines

pub mod builder;
pub mod location;
pub mod mapper;
pub mod resolver;
pub mod session;
pub mod tokenizer;

pub use builder::build_series_set;
pub use location::location_label;
pub use mapper::{Projection, category_labels, datasets, to_coordinates, to_indexed_points};
pub use resolver::{resolve, resolve_indexed, resolve_points};
pub use session::{ChartDefaults, ChartSession};
pub use tokenizer::tokenize;
