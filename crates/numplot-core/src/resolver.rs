//! Mapping a clicked point back to the text it came from.
//!
//! Resolution is pure index arithmetic and mirrors [`crate::mapper`]: point
//! `p` of series `s` was built from
//!
//! - alternating modes: series `s`, tokens `2p` and `2p + 1`;
//! - first-line modes: series 0 token `p`, then series `s + 1` token `p`;
//! - indexed charts: series `s`, token `p`.

use numplot_model::{ParseMode, PlotError, Result, SeriesSet, SourceRange, Token};

use crate::mapper::Projection;

/// Source ranges of the token(s) behind point `point_index` of output series
/// `series_index` under `mode`, in source order.
pub fn resolve(
    mode: ParseMode,
    series_index: usize,
    point_index: usize,
    set: &SeriesSet,
) -> Result<Vec<SourceRange>> {
    let out_of_range = || PlotError::IndexOutOfRange {
        series_index,
        point_index,
    };
    let (first, second) = if mode.is_first_line() {
        let other = series_index.checked_add(1).ok_or_else(out_of_range)?;
        (
            token_at(set, 0, point_index),
            token_at(set, other, point_index),
        )
    } else {
        let position = point_index.checked_mul(2).ok_or_else(out_of_range)?;
        (
            token_at(set, series_index, position),
            position
                .checked_add(1)
                .and_then(|next| token_at(set, series_index, next)),
        )
    };
    match (first, second) {
        (Some(first), Some(second)) => Ok(vec![first.range, second.range]),
        _ => Err(out_of_range()),
    }
}

/// Source range of point `point_index` in series `series_index` of an
/// indexed chart.
pub fn resolve_indexed(
    series_index: usize,
    point_index: usize,
    set: &SeriesSet,
) -> Result<Vec<SourceRange>> {
    token_at(set, series_index, point_index)
        .map(|token| vec![token.range])
        .ok_or(PlotError::IndexOutOfRange {
            series_index,
            point_index,
        })
}

/// Resolves several clicked points at once, concatenating their ranges in
/// click order. Fails on the first point that does not exist.
pub fn resolve_points(
    projection: Projection,
    points: &[(usize, usize)],
    set: &SeriesSet,
) -> Result<Vec<SourceRange>> {
    let mut ranges = Vec::with_capacity(points.len() * 2);
    for &(series_index, point_index) in points {
        let resolved = match projection {
            Projection::Indexed => resolve_indexed(series_index, point_index, set)?,
            Projection::Paired(mode) => resolve(mode, series_index, point_index, set)?,
        };
        ranges.extend(resolved);
    }
    Ok(ranges)
}

fn token_at(set: &SeriesSet, series_index: usize, position: usize) -> Option<&Token> {
    set.get(series_index)?.get(position)
}

#[cfg(test)]
mod tests {
    use numplot_model::Series;

    use super::*;

    fn set_of(rows: &[&[f64]]) -> SeriesSet {
        let series = rows
            .iter()
            .enumerate()
            .map(|(line, values)| {
                let tokens = values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| Token::new(*value, SourceRange::on_line(line, i * 3, 2)))
                    .collect();
                Series::new(tokens).expect("non-empty row")
            })
            .collect();
        SeriesSet {
            series,
            ..SeriesSet::default()
        }
    }

    #[test]
    fn first_line_y_resolves_first_series_then_partner() {
        let set = set_of(&[&[10.0, 20.0, 30.0], &[1.0, 2.0, 3.0]]);
        let ranges = resolve(ParseMode::FirstLineY, 0, 1, &set).unwrap();
        assert_eq!(
            ranges,
            vec![SourceRange::on_line(0, 3, 2), SourceRange::on_line(1, 3, 2)]
        );
    }

    #[test]
    fn alternating_resolves_adjacent_tokens() {
        let set = set_of(&[&[1.0, 2.0, 3.0, 4.0]]);
        for mode in [ParseMode::AlternatingXY, ParseMode::AlternatingYX] {
            let ranges = resolve(mode, 0, 1, &set).unwrap();
            assert_eq!(
                ranges,
                vec![SourceRange::on_line(0, 6, 2), SourceRange::on_line(0, 9, 2)]
            );
        }
    }

    #[test]
    fn trailing_unpaired_token_is_unreachable() {
        let set = set_of(&[&[1.0, 2.0, 3.0]]);
        assert!(resolve(ParseMode::AlternatingXY, 0, 0, &set).is_ok());
        assert_eq!(
            resolve(ParseMode::AlternatingXY, 0, 1, &set).unwrap_err(),
            PlotError::IndexOutOfRange {
                series_index: 0,
                point_index: 1
            }
        );
    }

    #[test]
    fn first_line_stops_at_shorter_series() {
        let set = set_of(&[&[1.0, 2.0, 3.0], &[4.0, 5.0]]);
        assert!(resolve(ParseMode::FirstLineX, 0, 1, &set).is_ok());
        assert!(resolve(ParseMode::FirstLineX, 0, 2, &set).is_err());
        assert!(resolve(ParseMode::FirstLineX, 1, 0, &set).is_err());
    }

    #[test]
    fn huge_indices_do_not_overflow() {
        let set = set_of(&[&[1.0, 2.0]]);
        assert!(resolve(ParseMode::AlternatingXY, 0, usize::MAX, &set).is_err());
        assert!(resolve(ParseMode::FirstLineX, usize::MAX, 0, &set).is_err());
    }

    #[test]
    fn indexed_resolves_single_token() {
        let set = set_of(&[&[1.0, 2.0, 3.0]]);
        assert_eq!(
            resolve_indexed(0, 2, &set).unwrap(),
            vec![SourceRange::on_line(0, 6, 2)]
        );
        assert!(resolve_indexed(1, 0, &set).is_err());
    }

    #[test]
    fn multiple_points_keep_click_order() {
        let set = set_of(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let ranges = resolve_points(Projection::Indexed, &[(1, 0), (0, 1)], &set).unwrap();
        assert_eq!(
            ranges,
            vec![SourceRange::on_line(1, 0, 2), SourceRange::on_line(0, 3, 2)]
        );
    }
}
