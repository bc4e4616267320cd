//! Turning series into plot coordinates.
//!
//! XY pairing is a table of pure functions indexed by [`ParseMode`]:
//!
//! | mode            | X                     | Y                         |
//! |-----------------|-----------------------|---------------------------|
//! | `AlternatingXY` | token `2i`            | token `2i + 1`            |
//! | `AlternatingYX` | token `2i + 1`        | token `2i`                |
//! | `FirstLineX`    | series 0, token `i`   | series `k`, token `i`     |
//! | `FirstLineY`    | series `k`, token `i` | series 0, token `i`       |
//!
//! Alternating modes emit one point sequence per series (possibly empty),
//! first-line modes one per series after the first.

use numplot_model::{CoordinatePoint, Dataset, ParseMode, PlotError, Result, Series, SeriesSet};

type Mapping = fn(&SeriesSet) -> Vec<Vec<CoordinatePoint>>;

const MAPPINGS: [Mapping; 4] = [alternating_xy, alternating_yx, first_line_x, first_line_y];

/// How a series set is laid out on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Each token against its index within the series.
    Indexed,
    /// Tokens paired according to a [`ParseMode`].
    Paired(ParseMode),
}

/// Pairs the tokens of `set` into points under `mode`.
///
/// First-line modes need two series; asking for one on a smaller set is a
/// [`PlotError::ModeUnavailable`].
pub fn to_coordinates(set: &SeriesSet, mode: ParseMode) -> Result<Vec<Vec<CoordinatePoint>>> {
    if !mode.is_available(set.len()) {
        return Err(PlotError::ModeUnavailable {
            mode,
            series_count: set.len(),
        });
    }
    Ok(MAPPINGS[mode.index()](set))
}

/// Plots every token against its index (line and bar charts).
pub fn to_indexed_points(set: &SeriesSet) -> Vec<Vec<CoordinatePoint>> {
    set.series
        .iter()
        .map(|series| {
            series
                .tokens()
                .iter()
                .enumerate()
                .map(|(index, token)| CoordinatePoint::indexed(index, *token))
                .collect()
        })
        .collect()
}

/// X axis category labels for indexed charts: `"0"` up to the longest series.
pub fn category_labels(set: &SeriesSet) -> Vec<String> {
    (0..set.max_len()).map(|index| index.to_string()).collect()
}

/// Labeled point sequences, one per plotted series.
///
/// Each dataset is named after the document line its Y series starts on.
pub fn datasets(set: &SeriesSet, projection: Projection) -> Result<Vec<Dataset>> {
    let (points, labeled): (Vec<Vec<CoordinatePoint>>, &[Series]) = match projection {
        Projection::Indexed => (to_indexed_points(set), set.series.as_slice()),
        Projection::Paired(mode) => {
            let points = to_coordinates(set, mode)?;
            let labeled = if mode.is_first_line() {
                &set.series[1..]
            } else {
                &set.series[..]
            };
            (points, labeled)
        }
    };
    Ok(points
        .into_iter()
        .zip(labeled)
        .map(|(points, series)| Dataset {
            label: format!("Line {}", series.display_line()),
            points,
        })
        .collect())
}

fn alternating_xy(set: &SeriesSet) -> Vec<Vec<CoordinatePoint>> {
    set.series
        .iter()
        .map(|series| {
            series
                .tokens()
                .chunks_exact(2)
                .map(|pair| CoordinatePoint::paired(pair[0], pair[1]))
                .collect()
        })
        .collect()
}

fn alternating_yx(set: &SeriesSet) -> Vec<Vec<CoordinatePoint>> {
    swap_all(alternating_xy(set))
}

fn first_line_x(set: &SeriesSet) -> Vec<Vec<CoordinatePoint>> {
    let Some((first, rest)) = set.series.split_first() else {
        return Vec::new();
    };
    rest.iter()
        .map(|other| {
            first
                .tokens()
                .iter()
                .zip(other.tokens())
                .map(|(x, y)| CoordinatePoint::paired(*x, *y))
                .collect()
        })
        .collect()
}

fn first_line_y(set: &SeriesSet) -> Vec<Vec<CoordinatePoint>> {
    swap_all(first_line_x(set))
}

fn swap_all(series: Vec<Vec<CoordinatePoint>>) -> Vec<Vec<CoordinatePoint>> {
    series
        .into_iter()
        .map(|points| points.into_iter().map(CoordinatePoint::swapped).collect())
        .collect()
}
