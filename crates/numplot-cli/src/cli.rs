//! CLI argument definitions for the number plotter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use numplot_model::{DEFAULT_PREVIEW_LENGTH, ParseMode, SourceRange};

#[derive(Parser)]
#[command(
    name = "numplot",
    version,
    about = "Turn numbers in free-form text into chartable series",
    long_about = "Turn numbers in free-form text into chartable series.\n\n\
                  Every line of a selection becomes one series. Series can be plotted\n\
                  against their index or paired into X/Y points, and every point can be\n\
                  traced back to the exact text it came from."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the series parsed from the selections.
    Series(SeriesArgs),

    /// Show the plot coordinates for the selections.
    Points(PointsArgs),

    /// Print the select request for a clicked point.
    Resolve(ResolveArgs),
}

/// Where the numbers come from.
#[derive(Args)]
pub struct InputArgs {
    /// Text file to read, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Selection as LINE:COL-LINE:COL (zero-based). Repeat for multiple
    /// selections; defaults to the whole file.
    #[arg(long = "select", value_name = "RANGE")]
    pub select: Vec<SourceRange>,

    /// Characters of the first line kept in the preview label.
    #[arg(long = "preview-length", value_name = "N", default_value_t = DEFAULT_PREVIEW_LENGTH)]
    pub preview_length: usize,
}

/// How the series are laid out.
#[derive(Args)]
pub struct LayoutArgs {
    /// Pair numbers into X/Y points using this mode.
    #[arg(long = "mode", value_enum, default_value = "xy", conflicts_with = "plain")]
    pub mode: ModeArg,

    /// Plot every number against its index instead of pairing.
    #[arg(long = "plain")]
    pub plain: bool,
}

#[derive(Parser)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct PointsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Index of the plotted series (dataset) that was clicked.
    #[arg(long = "series", value_name = "INDEX")]
    pub series: usize,

    /// Index of the point within that series.
    #[arg(long = "point", value_name = "INDEX")]
    pub point: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Alternating X/Y pairs.
    Xy,
    /// Alternating Y/X pairs.
    Yx,
    /// First line supplies X.
    FirstX,
    /// First line supplies Y.
    FirstY,
}

impl From<ModeArg> for ParseMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Xy => ParseMode::AlternatingXY,
            ModeArg::Yx => ParseMode::AlternatingYX,
            ModeArg::FirstX => ParseMode::FirstLineX,
            ModeArg::FirstY => ParseMode::FirstLineY,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
