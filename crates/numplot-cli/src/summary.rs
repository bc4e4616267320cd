//! Terminal tables for parsed series and plotted points.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use numplot_core::ChartSession;
use numplot_model::{ChartVariant, Dataset, SeriesSet, SourceRange};

pub fn print_series(set: &SeriesSet) {
    println!("File: {}", set.file_path);
    println!("Preview: {}", preview(&set.short_label));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Series"),
        header_cell("Line"),
        header_cell("Count"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, series) in set.series.iter().enumerate() {
        let values: Vec<String> = series.values().map(|value| value.to_string()).collect();
        table.add_row(vec![
            Cell::new(index),
            Cell::new(series.display_line()),
            Cell::new(series.len()),
            Cell::new(values.join(", ")),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(set.token_count()).add_attribute(Attribute::Bold),
        dim_cell(format!("{} series", set.len())),
    ]);
    println!("{table}");
}

pub fn print_points(session: &ChartSession, datasets: &[Dataset]) {
    println!("{} {}", session.location_label(), preview(&session.series_set().short_label));
    match session.variant() {
        ChartVariant::Plain => println!("Chart: {}", session.chart_kind()),
        ChartVariant::Xy => println!("Mode: {}", session.mode()),
    }
    if datasets.is_empty() {
        println!("No numbers found.");
        return;
    }
    let categories = session.category_labels();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Point"),
        header_cell("X"),
        header_cell("Y"),
        header_cell("Source"),
    ]);
    apply_points_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for dataset in datasets {
        for (index, point) in dataset.points.iter().enumerate() {
            let x = categories
                .get(index)
                .cloned()
                .unwrap_or_else(|| point.x.to_string());
            table.add_row(vec![
                dataset_cell(&dataset.label),
                Cell::new(index),
                Cell::new(x),
                Cell::new(point.y),
                ranges_cell(&point.provenance.ranges()),
            ]);
        }
    }
    println!("{table}");
    if session.legend_visible() {
        println!("Datasets: {}", datasets.len());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(75)),
        ]);
    }
}

fn apply_points_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn preview(label: &str) -> String {
    if label.is_empty() {
        "-".to_string()
    } else {
        format!("\"{label}\"")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dataset_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn ranges_cell(ranges: &[SourceRange]) -> Cell {
    let text: Vec<String> = ranges.iter().map(ToString::to_string).collect();
    dim_cell(text.join(" "))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
