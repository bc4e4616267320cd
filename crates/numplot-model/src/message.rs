//! Messages exchanged between the editor host and the chart view.
//!
//! Both directions are internally tagged on a `command` field so they can be
//! posted as plain JSON objects over whatever channel the host provides.

use serde::{Deserialize, Serialize};

use crate::mode::ChartVariant;
use crate::range::SourceRange;

/// Host to view: plot the given selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostMessage {
    PlotText {
        variant: ChartVariant,
        texts: Vec<String>,
        path: String,
        ranges: Vec<SourceRange>,
    },
}

/// View to host: select these ranges in `path` and reveal the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ViewMessage {
    Select {
        path: String,
        ranges: Vec<SourceRange>,
    },
}

impl ViewMessage {
    pub fn select(path: impl Into<String>, ranges: Vec<SourceRange>) -> Self {
        ViewMessage::Select {
            path: path.into(),
            ranges,
        }
    }
}
