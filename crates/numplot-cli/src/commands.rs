//! Subcommand handlers: load the document, build a chart session, print.

use anyhow::{Context, Result};
use numplot_core::{ChartDefaults, ChartSession};
use numplot_model::{ChartVariant, ParseMode, ParseOptions};
use tracing::{info, info_span, warn};

use numplot_cli::input::Document;

use crate::cli::{InputArgs, LayoutArgs, OutputFormatArg, PointsArgs, ResolveArgs, SeriesArgs};
use crate::summary::{print_points, print_series};

pub fn run_series(args: &SeriesArgs) -> Result<()> {
    let session = open_session(&args.input, ChartVariant::Plain, ChartDefaults::default())?;
    let set = session.series_set();
    match args.format {
        OutputFormatArg::Table => print_series(set),
        OutputFormatArg::Json => print_json(set)?,
    }
    Ok(())
}

pub fn run_points(args: &PointsArgs) -> Result<()> {
    let session = open_layout(&args.input, &args.layout)?;
    let datasets = session.datasets().context("plot series")?;
    match args.format {
        OutputFormatArg::Table => print_points(&session, &datasets),
        OutputFormatArg::Json => print_json(&datasets)?,
    }
    Ok(())
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let session = open_layout(&args.input, &args.layout)?;
    let message = session
        .click(&[(args.series, args.point)])
        .context("resolve clicked point")?;
    info!(series = args.series, point = args.point, "resolved click");
    print_json(&message)
}

fn open_layout(input: &InputArgs, layout: &LayoutArgs) -> Result<ChartSession> {
    if layout.plain {
        return open_session(input, ChartVariant::Plain, ChartDefaults::default());
    }
    let requested: ParseMode = layout.mode.into();
    let defaults = ChartDefaults {
        mode: requested,
        ..ChartDefaults::default()
    };
    let session = open_session(input, ChartVariant::Xy, defaults)?;
    if session.mode() != requested {
        warn!(
            requested = %requested,
            used = %session.mode(),
            series = session.series_set().len(),
            "mode needs at least 2 series"
        );
    }
    Ok(session)
}

fn open_session(
    input: &InputArgs,
    variant: ChartVariant,
    mut defaults: ChartDefaults,
) -> Result<ChartSession> {
    let document = Document::read(&input.file)?;
    let span = info_span!("document", path = %document.path);
    let _guard = span.enter();
    let request = document.plot_request(variant, &input.select)?;
    let options = ParseOptions::new().with_preview_length(input.preview_length);
    let session = ChartSession::from_message(request, &options, &mut defaults)
        .context("parse selections")?;
    info!(
        series = session.series_set().len(),
        tokens = session.series_set().token_count(),
        "parsed selections"
    );
    Ok(session)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
