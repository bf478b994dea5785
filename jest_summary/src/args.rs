use std::path::PathBuf;

use clap::Parser;

use crate::config::{SummaryConfig, WidthSetting};
use crate::format::style::ColorChoice;

#[derive(Debug, Clone, Parser, Default)]
#[command(
    name = "jest-summary",
    version,
    about = "Print a Jest-style summary for an aggregated test result"
)]
pub struct SummaryCli {
    /// Aggregated result JSON; `-` or absent reads stdin.
    #[arg(long = "results", value_name = "PATH")]
    results: Option<PathBuf>,

    /// JSON array of live test-case records.
    #[arg(long = "live", value_name = "PATH")]
    live: Option<PathBuf>,

    #[arg(long = "estimated-time", alias = "estimatedTime", value_name = "SECONDS")]
    estimated_time: Option<f64>,

    #[arg(
        long = "round-time",
        alias = "roundTime",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool)
    )]
    round_time: Option<bool>,

    /// Progress bar columns, or `auto` for the terminal width.
    #[arg(long = "width", value_name = "COLS|auto", value_parser = parse_width)]
    width: Option<WidthSetting>,

    #[arg(long = "color", value_name = "auto|always|never", value_parser = parse_color)]
    color: Option<ColorChoice>,

    /// Render against a fixed clock (ms since the Unix epoch).
    #[arg(long = "now", value_name = "MS")]
    now: Option<u64>,

    #[arg(long = "verbose", default_value_t = false)]
    verbose: bool,
}

fn parse_width(raw: &str) -> Result<WidthSetting, String> {
    WidthSetting::parse(raw)
        .ok_or_else(|| format!("expected a column count or `auto`, got {raw:?}"))
}

fn parse_color(raw: &str) -> Result<ColorChoice, String> {
    ColorChoice::parse(raw)
        .ok_or_else(|| format!("expected auto, always or never, got {raw:?}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    pub results: InputSource,
    pub live: Option<PathBuf>,
    pub estimated_time: f64,
    pub round_time: bool,
    pub width: WidthSetting,
    pub color: ColorChoice,
    pub now_ms: Option<u64>,
    pub verbose: bool,
}

impl ParsedArgs {
    pub fn resolved_width(&self, detect_columns: impl FnOnce() -> usize) -> usize {
        match self.width {
            WidthSetting::Auto => detect_columns(),
            WidthSetting::Columns(columns) => columns,
        }
    }
}

pub fn parse_cli<I, T>(argv: I) -> Result<SummaryCli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    SummaryCli::try_parse_from(argv)
}

/// CLI flags win over config values; both fall back to the render defaults.
pub fn derive_args(cli: SummaryCli, cfg: &SummaryConfig) -> ParsedArgs {
    let results = match cli.results {
        None => InputSource::Stdin,
        Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
        Some(path) => InputSource::File(path),
    };
    ParsedArgs {
        results,
        live: cli.live,
        estimated_time: cli.estimated_time.or(cfg.estimated_time).unwrap_or(0.0),
        round_time: cli.round_time.or(cfg.round_time).unwrap_or(false),
        width: cli
            .width
            .or(cfg.width)
            .unwrap_or(WidthSetting::Columns(0)),
        color: cli.color.or(cfg.color).unwrap_or_default(),
        now_ms: cli.now,
        verbose: cli.verbose,
    }
}
