use serde::Serialize;

use crate::format::plural::pluralize;
use crate::format::style::{Color, Style};
use crate::format::time::{elapsed_seconds, now_unix_ms};
use crate::summary::aggregate::{LiveCounts, aggregate};
use crate::summary::progress::render_time;
use crate::summary::segments::{Segment, render_line};
use crate::test_model::{AggregatedResult, SnapshotSummary, TestCaseOutcome};

const SUITES_LABEL: &str = "Test Suites: ";
const TESTS_LABEL: &str = "Tests:       ";
const SNAPSHOTS_LABEL: &str = "Snapshots:   ";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub current_test_cases: Vec<TestCaseOutcome>,
    /// Seconds.
    pub estimated_time: f64,
    pub round_time: bool,
    /// Columns available for the progress bar; zero hides it.
    pub width: usize,
}

/// Finalized counts plus live counts, per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedTestCounts {
    pub failed: i64,
    pub pending: i64,
    pub todo: i64,
    pub passed: i64,
    pub total: i64,
}

pub fn merge_test_counts(result: &AggregatedResult, live: LiveCounts) -> MergedTestCounts {
    MergedTestCounts {
        failed: result.num_failed_tests.saturating_add(live.failing),
        pending: result.num_pending_tests.saturating_add(live.pending),
        todo: result.num_todo_tests.saturating_add(live.todo),
        passed: result.num_passed_tests.saturating_add(live.passing),
        total: result.num_total_tests.saturating_add(live.total),
    }
}

pub fn summarize(style: &dyn Style, result: &AggregatedResult, options: &RenderOptions) -> String {
    summarize_at(style, result, options, now_unix_ms())
}

pub fn summarize_at(
    style: &dyn Style,
    result: &AggregatedResult,
    options: &RenderOptions,
    now_ms: u64,
) -> String {
    summarize_with_counts(style, result, options, now_ms).0
}

/// Renders the summary and hands back the live counts it was built from.
pub fn summarize_with_counts(
    style: &dyn Style,
    result: &AggregatedResult,
    options: &RenderOptions,
    now_ms: u64,
) -> (String, LiveCounts) {
    let elapsed = elapsed_seconds(result.start_time, now_ms, options.round_time);
    let live = aggregate(&options.current_test_cases);
    let merged = merge_test_counts(result, live);

    let text = [
        render_line(style, SUITES_LABEL, &suite_segments(result), &suites_tail(result)),
        render_line(
            style,
            TESTS_LABEL,
            &test_segments(merged),
            &format!("{} total", merged.total),
        ),
        render_line(
            style,
            SNAPSHOTS_LABEL,
            &snapshot_segments(&result.snapshot),
            &format!("{} total", result.snapshot.total),
        ),
        render_time(style, elapsed, options.estimated_time, options.width),
    ]
    .join("\n");
    (text, live)
}

pub fn suite_segments(result: &AggregatedResult) -> Vec<Segment> {
    vec![
        Segment::counted(result.num_failed_test_suites, "failed", Color::Red),
        Segment::counted(result.num_pending_test_suites, "skipped", Color::Yellow),
        Segment::counted(result.num_passed_test_suites, "passed", Color::Green),
    ]
}

fn suites_tail(result: &AggregatedResult) -> String {
    let suites_run = result.suites_run();
    let suites_total = result.num_total_test_suites;
    if suites_run != suites_total {
        format!("{suites_run} of {suites_total} total")
    } else {
        format!("{suites_total} total")
    }
}

pub fn test_segments(merged: MergedTestCounts) -> Vec<Segment> {
    vec![
        Segment::counted(merged.failed, "failed", Color::Red),
        Segment::counted(merged.pending, "skipped", Color::Yellow),
        Segment::counted(merged.todo, "todo", Color::Magenta),
        Segment::counted(merged.passed, "passed", Color::Green),
    ]
}

pub fn snapshot_segments(snapshot: &SnapshotSummary) -> Vec<Segment> {
    let obsolete = snapshot.unchecked > 0;
    let files_obsolete = snapshot.files_removed > 0;
    let files_text = pluralize("file", snapshot.files_removed);
    vec![
        Segment::counted(snapshot.unmatched, "failed", Color::Red),
        Segment::when(
            obsolete && !snapshot.did_update,
            format!("{} obsolete", snapshot.unchecked),
            Color::Yellow,
        ),
        Segment::when(
            obsolete && snapshot.did_update,
            format!("{} removed", snapshot.unchecked),
            Color::Green,
        ),
        Segment::when(
            files_obsolete && !snapshot.did_update,
            format!("{files_text} obsolete"),
            Color::Yellow,
        ),
        Segment::when(
            files_obsolete && snapshot.did_update,
            format!("{files_text} removed"),
            Color::Green,
        ),
        Segment::counted(snapshot.updated, "updated", Color::Green),
        Segment::counted(snapshot.added, "written", Color::Green),
        Segment::counted(snapshot.matched, "passed", Color::Green),
    ]
}
