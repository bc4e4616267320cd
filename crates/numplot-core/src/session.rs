//! Per-chart state and the preferences carried from one chart to the next.
//!
//! A [`ChartSession`] owns one parsed [`SeriesSet`] plus the user's choices
//! for it (parse mode, chart kind, color). Choices made in a session are
//! written back to the caller's [`ChartDefaults`] so the next chart starts
//! where the user left off; the defaults are only read when a session is
//! created.

use numplot_model::{
    ChartKind, ChartVariant, Dataset, HostMessage, ParseMode, ParseOptions, Result, SeriesSet,
    ViewMessage,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::build_series_set;
use crate::location::location_label;
use crate::mapper::{Projection, category_labels, datasets};
use crate::resolver::resolve_points;

/// Sticky preferences shared by successive charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartDefaults {
    /// Mode the next XY chart starts in.
    pub mode: ParseMode,
    /// Kind the next plain chart starts as.
    pub chart_kind: ChartKind,
    /// Color index the next chart starts with.
    pub next_color: usize,
}

/// One rendered chart.
#[derive(Debug, Clone)]
pub struct ChartSession {
    series_set: SeriesSet,
    variant: ChartVariant,
    mode: ParseMode,
    chart_kind: ChartKind,
    color_index: usize,
}

impl ChartSession {
    /// Starts a chart from the current defaults and claims the next color.
    ///
    /// A first-line default is clamped for sets with fewer than two series
    /// without touching the shared default.
    pub fn new(series_set: SeriesSet, variant: ChartVariant, defaults: &mut ChartDefaults) -> Self {
        let color_index = defaults.next_color;
        defaults.next_color = color_index.wrapping_add(1);
        let mode = defaults.mode.clamp(series_set.len());
        debug!(
            series = series_set.len(),
            ?variant,
            mode = %mode,
            color_index,
            "created chart session"
        );
        Self {
            series_set,
            variant,
            mode,
            chart_kind: defaults.chart_kind,
            color_index,
        }
    }

    /// Parses a `plotText` message and starts a chart for it.
    pub fn from_message(
        message: HostMessage,
        options: &ParseOptions,
        defaults: &mut ChartDefaults,
    ) -> Result<Self> {
        let HostMessage::PlotText {
            variant,
            texts,
            path,
            ranges,
        } = message;
        let series_set = build_series_set(&texts, &ranges, path, options)?;
        Ok(Self::new(series_set, variant, defaults))
    }

    pub fn series_set(&self) -> &SeriesSet {
        &self.series_set
    }

    pub fn variant(&self) -> ChartVariant {
        self.variant
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn projection(&self) -> Projection {
        match self.variant {
            ChartVariant::Plain => Projection::Indexed,
            ChartVariant::Xy => Projection::Paired(self.mode),
        }
    }

    /// Title of the toggle button for the current state.
    pub fn toggle_label(&self) -> &'static str {
        match self.variant {
            ChartVariant::Plain => self.chart_kind.label(),
            ChartVariant::Xy => self.mode.label(),
        }
    }

    /// Cycles to the next applicable parse mode and makes it the default.
    pub fn next_mode(&mut self, defaults: &mut ChartDefaults) -> ParseMode {
        self.mode = self.mode.next(self.series_set.len());
        defaults.mode = self.mode;
        debug!(mode = %self.mode, "switched parse mode");
        self.mode
    }

    /// Toggles line/bar and makes the result the default.
    pub fn next_chart_kind(&mut self, defaults: &mut ChartDefaults) -> ChartKind {
        self.chart_kind = self.chart_kind.next();
        defaults.chart_kind = self.chart_kind;
        debug!(chart_kind = %self.chart_kind, "switched chart kind");
        self.chart_kind
    }

    /// Advances this chart's color; the next chart continues after it.
    pub fn next_color(&mut self, defaults: &mut ChartDefaults) -> usize {
        self.color_index = self.color_index.wrapping_add(1);
        defaults.next_color = self.color_index.wrapping_add(1);
        self.color_index
    }

    /// Palette slot for dataset `dataset_index`, or `None` for an empty
    /// palette. Datasets take consecutive slots starting at the chart color.
    pub fn color_slot(&self, dataset_index: usize, palette_len: usize) -> Option<usize> {
        if palette_len == 0 {
            return None;
        }
        Some((self.color_index % palette_len + dataset_index % palette_len) % palette_len)
    }

    /// Points for the current state, recomputed on every call.
    pub fn datasets(&self) -> Result<Vec<Dataset>> {
        datasets(&self.series_set, self.projection())
    }

    /// X axis labels; only plain charts use category axes.
    pub fn category_labels(&self) -> Vec<String> {
        match self.variant {
            ChartVariant::Plain => category_labels(&self.series_set),
            ChartVariant::Xy => Vec::new(),
        }
    }

    /// A legend only helps when there is more than one series.
    pub fn legend_visible(&self) -> bool {
        self.series_set.len() > 1
    }

    pub fn location_label(&self) -> String {
        location_label(&self.series_set)
    }

    /// Select request for the points the user clicked, as
    /// `(series index, point index)` pairs.
    pub fn click(&self, points: &[(usize, usize)]) -> Result<ViewMessage> {
        let ranges = resolve_points(self.projection(), points, &self.series_set)?;
        Ok(ViewMessage::select(self.series_set.file_path.clone(), ranges))
    }

    /// Select request for the whole original selection.
    pub fn select_source(&self) -> ViewMessage {
        ViewMessage::select(
            self.series_set.file_path.clone(),
            self.series_set.ranges.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use numplot_model::{PlotError, SourceRange};

    use super::*;

    fn parse(text: &str) -> SeriesSet {
        let lines = text.lines().count();
        build_series_set(
            &[text],
            &[SourceRange::new(0, 0, lines, 0)],
            "/tmp/values.txt",
            &ParseOptions::default(),
        )
        .expect("build series set")
    }

    #[test]
    fn new_session_snapshots_defaults() {
        let mut defaults = ChartDefaults {
            mode: ParseMode::FirstLineY,
            chart_kind: ChartKind::Bar,
            next_color: 3,
        };
        let session = ChartSession::new(parse("1 2\n3 4"), ChartVariant::Xy, &mut defaults);
        assert_eq!(session.mode(), ParseMode::FirstLineY);
        assert_eq!(session.chart_kind(), ChartKind::Bar);
        assert_eq!(session.color_index(), 3);
        assert_eq!(defaults.next_color, 4);
    }

    #[test]
    fn single_series_clamps_mode_locally() {
        let mut defaults = ChartDefaults {
            mode: ParseMode::FirstLineX,
            ..ChartDefaults::default()
        };
        let session = ChartSession::new(parse("1 2 3 4"), ChartVariant::Xy, &mut defaults);
        assert_eq!(session.mode(), ParseMode::AlternatingXY);
        assert_eq!(defaults.mode, ParseMode::FirstLineX);
    }

    #[test]
    fn sessions_diverge_after_creation() {
        let mut defaults = ChartDefaults::default();
        let mut first = ChartSession::new(parse("1 2\n3 4"), ChartVariant::Xy, &mut defaults);
        let second = ChartSession::new(parse("5 6\n7 8"), ChartVariant::Xy, &mut defaults);
        assert_eq!(first.next_mode(&mut defaults), ParseMode::AlternatingYX);
        assert_eq!(second.mode(), ParseMode::AlternatingXY);
        assert_eq!(defaults.mode, ParseMode::AlternatingYX);

        let third = ChartSession::new(parse("1 2"), ChartVariant::Xy, &mut defaults);
        assert_eq!(third.mode(), ParseMode::AlternatingYX);
        assert_eq!(third.toggle_label(), "Y/X Pairs");
    }

    #[test]
    fn chart_kind_toggle_is_sticky() {
        let mut defaults = ChartDefaults::default();
        let mut session = ChartSession::new(parse("1 2 3"), ChartVariant::Plain, &mut defaults);
        assert_eq!(session.toggle_label(), "Line");
        assert_eq!(session.next_chart_kind(&mut defaults), ChartKind::Bar);
        assert_eq!(defaults.chart_kind, ChartKind::Bar);
        assert_eq!(session.toggle_label(), "Bar");
    }

    #[test]
    fn colors_advance_per_chart_and_per_click() {
        let mut defaults = ChartDefaults::default();
        let mut first = ChartSession::new(parse("1"), ChartVariant::Plain, &mut defaults);
        assert_eq!(first.color_index(), 0);
        assert_eq!(first.next_color(&mut defaults), 1);
        let second = ChartSession::new(parse("2"), ChartVariant::Plain, &mut defaults);
        assert_eq!(second.color_index(), 2);
        assert_eq!(second.color_slot(1, 7), Some(3));
        assert_eq!(second.color_slot(6, 7), Some(1));
        assert_eq!(second.color_slot(0, 0), None);
    }

    #[test]
    fn mode_change_recomputes_points() {
        let mut defaults = ChartDefaults::default();
        let set = parse("1, 2, 3\n4 5 6");
        let mut session = ChartSession::new(set, ChartVariant::Xy, &mut defaults);
        let before = session.datasets().unwrap();
        assert_eq!(before.len(), 2);
        session.next_mode(&mut defaults);
        session.next_mode(&mut defaults);
        assert_eq!(session.mode(), ParseMode::FirstLineX);
        let after = session.datasets().unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].label, "Line 2");
        assert_eq!(after[0].points.len(), 3);
    }

    #[test]
    fn click_builds_select_message() {
        let mut defaults = ChartDefaults::default();
        let set = parse("[1, 2]; 3");
        let session = ChartSession::new(set, ChartVariant::Plain, &mut defaults);
        let ViewMessage::Select { path, ranges } = session.click(&[(0, 2)]).unwrap();
        assert_eq!(path, "/tmp/values.txt");
        assert_eq!(ranges, vec![SourceRange::on_line(0, 8, 1)]);
        assert_eq!(
            session.click(&[(0, 3)]).unwrap_err(),
            PlotError::IndexOutOfRange {
                series_index: 0,
                point_index: 3
            }
        );
    }

    #[test]
    fn from_message_parses_every_selection() {
        let message = HostMessage::PlotText {
            variant: ChartVariant::Plain,
            texts: vec!["1 2".to_string(), "3".to_string()],
            path: "a.txt".to_string(),
            ranges: vec![SourceRange::new(0, 0, 0, 3), SourceRange::new(5, 2, 5, 3)],
        };
        let mut defaults = ChartDefaults::default();
        let session =
            ChartSession::from_message(message, &ParseOptions::default(), &mut defaults).unwrap();
        assert_eq!(session.series_set().len(), 2);
        assert!(session.legend_visible());
        assert_eq!(session.category_labels(), vec!["0", "1"]);
        assert_eq!(session.location_label(), "a.txt;1;6:");
        let ViewMessage::Select { ranges, .. } = session.select_source();
        assert_eq!(ranges.len(), 2);
    }
}
