//! Grouping tokens into one series per source line.

use numplot_model::{ELLIPSIS, ParseOptions, PlotError, Result, Series, SeriesSet, SourceRange};
use tracing::debug;

use crate::tokenizer::tokenize;

/// Parses one or more selections into a [`SeriesSet`].
///
/// `texts[i]` is the text of the selection starting at `ranges[i]`. Every
/// line that yields at least one number becomes a series, in selection order
/// then line order. Text without numbers produces an empty set.
pub fn build_series_set<S: AsRef<str>>(
    texts: &[S],
    ranges: &[SourceRange],
    file_path: impl Into<String>,
    options: &ParseOptions,
) -> Result<SeriesSet> {
    if texts.len() != ranges.len() {
        return Err(PlotError::SelectionMismatch {
            texts: texts.len(),
            ranges: ranges.len(),
        });
    }

    for (text, range) in texts.iter().zip(ranges) {
        check_start_fits(text.as_ref(), range)?;
    }

    let mut series = Vec::new();
    let mut first_line: Option<&str> = None;
    for (text, range) in texts.iter().zip(ranges) {
        let mut line_nr = range.start_line;
        let mut column = range.start_column;
        for line in text.as_ref().split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if !line.trim().is_empty()
                && let Some(tokens) = Series::new(tokenize(line, line_nr, column))
            {
                first_line.get_or_insert(line);
                series.push(tokens);
            }
            column = 0;
            line_nr += 1;
        }
    }

    let short_label = short_label(first_line.unwrap_or_default(), series.len(), options);
    let set = SeriesSet {
        series,
        short_label,
        file_path: file_path.into(),
        ranges: ranges.to_vec(),
    };
    debug!(
        selections = ranges.len(),
        series = set.len(),
        tokens = set.token_count(),
        "built series set"
    );
    Ok(set)
}

/// Rejects a selection whose start leaves no room for its own text: the
/// last line number or the first line's final column would not fit in
/// `usize`.
fn check_start_fits(text: &str, range: &SourceRange) -> Result<()> {
    let line_count = text.split('\n').count();
    let first_line_len = text.split('\n').next().map_or(0, |line| line.chars().count());
    let fits = range.start_line.checked_add(line_count).is_some()
        && range.start_column.checked_add(first_line_len + 1).is_some();
    if fits {
        Ok(())
    } else {
        Err(PlotError::InvalidRange(range.to_string()))
    }
}

/// Trimmed preview of `line`, cut to the preview length and marked with an
/// ellipsis when it is too long or when more series follow it.
fn short_label(line: &str, series_count: usize, options: &ParseOptions) -> String {
    let label = line.trim();
    if label.chars().count() > options.preview_length || series_count > 1 {
        let mut short: String = label.chars().take(options.preview_length).collect();
        short.push_str(ELLIPSIS);
        short
    } else {
        label.to_string()
    }
}
