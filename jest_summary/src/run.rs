use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::Path;

use crate::args::{ParsedArgs, derive_args, parse_cli};
use crate::config::load_summary_config;
use crate::diagnostics_trace::{OptionsSummary, SummaryTrace, maybe_write_summary_trace};
use crate::error::SummaryError;
use crate::format::style::style_for;
use crate::format::terminal::terminal_columns_or_zero;
use crate::format::time::now_unix_ms;
use crate::input::{read_aggregated_result, read_live_test_cases};
use crate::summary::{RenderOptions, merge_test_counts, summarize_with_counts};

#[derive(Debug, Clone)]
pub struct SummaryRun {
    pub text: String,
    pub trace: SummaryTrace,
}

/// Reads the inputs named by `args` and renders one summary block.
pub fn run_summary(
    args: &ParsedArgs,
    stdin: impl Read,
    detect_columns: impl FnOnce() -> usize,
) -> Result<SummaryRun, SummaryError> {
    let result = read_aggregated_result(&args.results, stdin)?;
    let current_test_cases = read_live_test_cases(args.live.as_deref())?;
    let width = args.resolved_width(detect_columns);
    let options = RenderOptions {
        current_test_cases,
        estimated_time: args.estimated_time,
        round_time: args.round_time,
        width,
    };
    let now_ms = args.now_ms.unwrap_or_else(now_unix_ms);
    let style = style_for(args.color);
    let (text, live) = summarize_with_counts(style.as_ref(), &result, &options, now_ms);

    let trace = SummaryTrace {
        schema_version: 1,
        now_unix_ms: now_ms,
        options: OptionsSummary::from_args(args, width),
        live,
        merged: merge_test_counts(&result, live),
    };
    Ok(SummaryRun { text, trace })
}

/// Whole binary flow. Returns the process exit code: 0 on success, 1 when
/// config or input cannot be read, clap's code for argument errors.
pub fn run_cli<I, T>(
    argv: I,
    cwd: &Path,
    stdin: impl Read,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match parse_cli(argv) {
        Ok(cli) => cli,
        Err(err) => {
            let rendered = err.render().to_string();
            let sink: &mut dyn Write = if err.use_stderr() { stderr } else { stdout };
            let _ = write!(sink, "{rendered}");
            return err.exit_code();
        }
    };
    let cfg = match load_summary_config(cwd) {
        Ok(cfg) => cfg,
        Err(err) => {
            let _ = writeln!(stderr, "jest-summary: {err}");
            return 1;
        }
    };
    let parsed = derive_args(cli, &cfg);
    if parsed.verbose {
        let _ = writeln!(
            stderr,
            "jest-summary: results={:?} live={:?} estimated_time={} round_time={} width={:?} color={:?} now={:?}",
            parsed.results,
            parsed.live,
            parsed.estimated_time,
            parsed.round_time,
            parsed.width,
            parsed.color,
            parsed.now_ms,
        );
    }

    match run_summary(&parsed, stdin, terminal_columns_or_zero) {
        Ok(run) => {
            maybe_write_summary_trace(&run.trace);
            let _ = writeln!(stdout, "{}", run.text);
            0
        }
        Err(err) => {
            let _ = writeln!(stderr, "jest-summary: {err}");
            1
        }
    }
}
