//! Chart header naming the file and lines a chart was built from.

use numplot_model::SeriesSet;

/// Header naming where a chart's numbers came from, e.g. `data.txt;3-5;9:`.
///
/// Lists the 1-based line span of every selection after the file name and
/// ends with `:` when the set has a short label to show after it.
pub fn location_label(set: &SeriesSet) -> String {
    let mut label = set.file_name().to_string();
    for range in &set.ranges {
        let first = range.start_line + 1;
        let last = range.last_display_line();
        label.push(';');
        label.push_str(&first.to_string());
        if first < last {
            label.push('-');
            label.push_str(&last.to_string());
        }
    }
    if !set.short_label.is_empty() {
        label.push(':');
    }
    label
}
