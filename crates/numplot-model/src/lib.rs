pub mod error;
pub mod message;
pub mod mode;
pub mod options;
pub mod provenance;
pub mod range;
pub mod series;

pub use error::{PlotError, Result};
pub use message::{HostMessage, ViewMessage};
pub use mode::{ChartKind, ChartVariant, ParseMode};
pub use options::{DEFAULT_PREVIEW_LENGTH, ELLIPSIS, ParseOptions};
pub use provenance::{CoordinatePoint, Dataset, Provenance};
pub use range::SourceRange;
pub use series::{Series, SeriesSet, Token};
