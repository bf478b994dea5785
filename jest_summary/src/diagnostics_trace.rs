use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::args::{InputSource, ParsedArgs};
use crate::summary::{LiveCounts, MergedTestCounts};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTrace {
    pub schema_version: u32,
    pub now_unix_ms: u64,
    pub options: OptionsSummary,
    pub live: LiveCounts,
    pub merged: MergedTestCounts,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsSummary {
    pub results: String,
    pub live: Option<String>,
    pub estimated_time: f64,
    pub round_time: bool,
    pub width: usize,
    pub color: String,
    pub fixed_clock: bool,
}

impl OptionsSummary {
    pub fn from_args(args: &ParsedArgs, width: usize) -> Self {
        Self {
            results: match &args.results {
                InputSource::Stdin => "-".to_string(),
                InputSource::File(path) => path.to_string_lossy().to_string(),
            },
            live: args.live.as_ref().map(|p| p.to_string_lossy().to_string()),
            estimated_time: args.estimated_time,
            round_time: args.round_time,
            width,
            color: format!("{:?}", args.color),
            fixed_clock: args.now_ms.is_some(),
        }
    }
}

fn diagnostics_dir() -> Option<PathBuf> {
    std::env::var("JEST_SUMMARY_DIAGNOSTICS_DIR")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

pub fn maybe_write_summary_trace(trace: &SummaryTrace) {
    let Some(dir) = diagnostics_dir() else {
        return;
    };
    write_summary_trace(&dir, trace);
}

pub fn write_summary_trace(dir: &Path, trace: &SummaryTrace) {
    let _ = std::fs::create_dir_all(dir);
    let trace_path = dir.join("summary_trace.json");
    if let Ok(json) = serde_json::to_string_pretty(trace) {
        let _ = std::fs::write(trace_path, json);
    }
}
