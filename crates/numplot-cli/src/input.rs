//! Reading the document and turning `--select` ranges into a plot request.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use numplot_model::{ChartVariant, HostMessage, SourceRange};
use tracing::{debug, info};

/// Path that reads the document from stdin.
pub const STDIN_PATH: &str = "-";

/// A text document the selections point into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: String,
    pub text: String,
}

impl Document {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Reads `path`, or stdin when it is `-`.
    pub fn read(path: &Path) -> Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read stdin")?;
            return Ok(Self::new("<stdin>", text));
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        Ok(Self::new(path.display().to_string(), text))
    }

    /// Range from the first character to the end of the last line.
    pub fn full_range(&self) -> SourceRange {
        let mut lines = self.text.split('\n');
        let last = lines.next_back().unwrap_or_default();
        let last_line = lines.count();
        SourceRange::new(0, 0, last_line, last.chars().count())
    }

    /// Text under each range, in the order given.
    ///
    /// An empty `ranges` slice selects the whole document.
    pub fn selections(&self, ranges: &[SourceRange]) -> Result<(Vec<String>, Vec<SourceRange>)> {
        let ranges = if ranges.is_empty() {
            vec![self.full_range()]
        } else {
            ranges.to_vec()
        };
        let texts = ranges
            .iter()
            .map(|range| {
                range
                    .slice(&self.text)
                    .map(str::to_string)
                    .ok_or_else(|| anyhow!("selection {range} is outside {}", self.path))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(selections = texts.len(), path = %self.path, "sliced selections");
        Ok((texts, ranges))
    }

    /// The message an editor would post to open a chart for these ranges.
    pub fn plot_request(&self, variant: ChartVariant, ranges: &[SourceRange]) -> Result<HostMessage> {
        let (texts, ranges) = self.selections(ranges)?;
        info!(%variant, selections = texts.len(), "prepared plot request");
        Ok(HostMessage::PlotText {
            variant,
            texts,
            path: self.path.clone(),
            ranges,
        })
    }
}
