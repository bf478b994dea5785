use crate::format::style::{AnsiStyle, PlainStyle};
use crate::summary::{
    BarLayout, LiveCounts, MergedTestCounts, RenderOptions, aggregate, bar_layout,
    merge_test_counts, render_bar, render_time, snapshot_segments, summarize_at, visible_texts,
};
use crate::test_model::{AggregatedResult, SnapshotSummary, TestCaseOutcome, TestStatus};

const NOW_MS: u64 = 1_700_000_000_000;

fn outcomes(statuses: &[&str]) -> Vec<TestCaseOutcome> {
    statuses
        .iter()
        .map(|s| TestCaseOutcome::new(TestStatus::from((*s).to_string())))
        .collect()
}

fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[test]
fn aggregate_empty_is_all_zero() {
    assert_eq!(aggregate(&[]), LiveCounts::default());
}

#[test]
fn aggregate_counts_unrecognized_status_in_total_only() {
    let counts = aggregate(&outcomes(&[
        "failed", "passed", "passed", "skipped", "todo", "focused", "",
    ]));
    assert_eq!(
        counts,
        LiveCounts {
            failing: 1,
            passing: 2,
            pending: 1,
            todo: 1,
            total: 7,
        }
    );
}

#[test]
fn merge_adds_live_counts_per_category() {
    let result = AggregatedResult {
        num_failed_tests: 1,
        num_passed_tests: 4,
        num_pending_tests: 2,
        num_todo_tests: 1,
        num_total_tests: 8,
        ..AggregatedResult::default()
    };
    let live = aggregate(&outcomes(&["passed", "failed", "pending"]));
    assert_eq!(
        merge_test_counts(&result, live),
        MergedTestCounts {
            failed: 2,
            pending: 2,
            todo: 1,
            passed: 5,
            total: 11,
        }
    );
}

#[test]
fn suites_line_shows_run_of_total_when_some_did_not_run() {
    let result = AggregatedResult {
        num_failed_test_suites: 1,
        num_passed_test_suites: 2,
        num_total_test_suites: 4,
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let out = summarize_at(&PlainStyle, &result, &RenderOptions::default(), NOW_MS);
    assert_eq!(lines(&out)[0], "Test Suites: 1 failed, 2 passed, 3 of 4 total");
}

#[test]
fn suites_line_shows_total_only_when_all_ran() {
    let result = AggregatedResult {
        num_pending_test_suites: 1,
        num_passed_test_suites: 3,
        num_total_test_suites: 3,
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let out = summarize_at(&PlainStyle, &result, &RenderOptions::default(), NOW_MS);
    assert_eq!(lines(&out)[0], "Test Suites: 1 skipped, 3 passed, 3 total");
}

#[test]
fn tests_line_only_passed() {
    let result = AggregatedResult {
        num_passed_tests: 5,
        num_total_tests: 5,
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let out = summarize_at(&PlainStyle, &result, &RenderOptions::default(), NOW_MS);
    assert_eq!(lines(&out)[1], "Tests:       5 passed, 5 total");
}

#[test]
fn tests_line_merges_live_cases_in_fixed_order() {
    let result = AggregatedResult {
        num_passed_tests: 5,
        num_total_tests: 5,
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let options = RenderOptions {
        current_test_cases: outcomes(&["todo", "failed", "skipped", "passed", "other"]),
        ..RenderOptions::default()
    };
    let out = summarize_at(&PlainStyle, &result, &options, NOW_MS);
    assert_eq!(
        lines(&out)[1],
        "Tests:       1 failed, 1 skipped, 1 todo, 6 passed, 10 total"
    );
}

#[test]
fn snapshot_segments_obsolete_without_update() {
    let snapshot = SnapshotSummary {
        unchecked: 2,
        files_removed: 1,
        ..SnapshotSummary::default()
    };
    let segments = snapshot_segments(&snapshot);
    assert_eq!(
        visible_texts(&segments),
        vec!["2 obsolete", "1 file obsolete"]
    );
}

#[test]
fn snapshot_segments_removed_after_update_never_obsolete() {
    let snapshot = SnapshotSummary {
        unchecked: 2,
        files_removed: 3,
        did_update: true,
        ..SnapshotSummary::default()
    };
    let texts = visible_texts(&snapshot_segments(&snapshot)).join(", ");
    assert_eq!(texts, "2 removed, 3 files removed");
    assert!(!texts.contains("obsolete"));
}

#[test]
fn snapshots_line_full_order() {
    let result = AggregatedResult {
        snapshot: SnapshotSummary {
            unmatched: 1,
            unchecked: 1,
            files_removed: 2,
            updated: 3,
            added: 4,
            matched: 5,
            total: 13,
            did_update: false,
        },
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let out = summarize_at(&PlainStyle, &result, &RenderOptions::default(), NOW_MS);
    assert_eq!(
        lines(&out)[2],
        "Snapshots:   1 failed, 1 obsolete, 2 files obsolete, 3 updated, 4 written, 5 passed, 13 total"
    );
}

#[test]
fn empty_result_renders_four_zero_lines() {
    let result = AggregatedResult {
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let out = summarize_at(&PlainStyle, &result, &RenderOptions::default(), NOW_MS);
    similar_asserts::assert_eq!(
        out,
        "Test Suites: 0 total\nTests:       0 total\nSnapshots:   0 total\nTime:        0s"
    );
}

#[test]
fn round_time_floors_elapsed() {
    let result = AggregatedResult {
        start_time: NOW_MS - 5_700,
        ..AggregatedResult::default()
    };
    let rounded = RenderOptions {
        round_time: true,
        ..RenderOptions::default()
    };
    let out = summarize_at(&PlainStyle, &result, &rounded, NOW_MS);
    assert_eq!(lines(&out)[3], "Time:        5s");

    let out = summarize_at(&PlainStyle, &result, &RenderOptions::default(), NOW_MS);
    assert_eq!(lines(&out)[3], "Time:        6s");
}

#[test]
fn time_line_with_estimate_and_half_bar() {
    let result = AggregatedResult {
        start_time: NOW_MS - 5_000,
        ..AggregatedResult::default()
    };
    let options = RenderOptions {
        estimated_time: 10.0,
        width: 40,
        ..RenderOptions::default()
    };
    let out = summarize_at(&PlainStyle, &result, &options, NOW_MS);
    let out_lines = lines(&out);
    assert_eq!(out_lines.len(), 5);
    assert_eq!(out_lines[3], "Time:        5s, estimated 10s");
    assert_eq!(out_lines[4], "█".repeat(40));
    assert_eq!(bar_layout(5.0, 10.0, 40), Some(BarLayout { filled: 20, empty: 20 }));
}

#[test]
fn bar_layout_is_capped_at_forty_columns() {
    let layout = bar_layout(3.0, 12.0, 120).unwrap();
    assert_eq!(layout.filled + layout.empty, 40);
    assert_eq!(layout.filled, 10);

    let narrow = bar_layout(3.0, 12.0, 10).unwrap();
    assert_eq!(narrow, BarLayout { filled: 2, empty: 8 });
}

#[test]
fn bar_layout_absent_when_any_gate_fails() {
    assert_eq!(bar_layout(1.0, 10.0, 0), None);
    assert_eq!(bar_layout(1.0, 2.0, 40), None);
    assert_eq!(bar_layout(10.0, 10.0, 40), None);
    assert_eq!(bar_layout(11.0, 10.0, 40), None);
    assert_eq!(bar_layout(1.0, 10.0, 1), None);
}

#[test]
fn bar_layout_clamps_negative_elapsed_to_empty() {
    assert_eq!(
        bar_layout(-4.0, 10.0, 20),
        Some(BarLayout {
            filled: 0,
            empty: 20
        })
    );
}

#[test]
fn render_bar_styles_filled_green_and_empty_white() {
    let bar = render_bar(&AnsiStyle, BarLayout { filled: 1, empty: 2 });
    assert_eq!(
        bar,
        "\u{1b}[32m█\u{1b}[39m\u{1b}[37m█\u{1b}[39m\u{1b}[37m█\u{1b}[39m"
    );
}

#[test]
fn render_time_highlights_when_over_estimate_by_a_second() {
    let over = render_time(&AnsiStyle, 12.0, 10.0, 40);
    assert_eq!(
        over,
        "\u{1b}[1mTime:\u{1b}[22m        \u{1b}[1m\u{1b}[33m12s\u{1b}[39m\u{1b}[22m"
    );

    let barely_over = render_time(&AnsiStyle, 10.5, 10.0, 40);
    assert_eq!(barely_over, "\u{1b}[1mTime:\u{1b}[22m        11s");

    let no_estimate = render_time(&AnsiStyle, 30.0, 0.0, 40);
    assert_eq!(no_estimate, "\u{1b}[1mTime:\u{1b}[22m        30s");
}

#[test]
fn render_time_short_estimate_has_no_bar() {
    assert_eq!(
        render_time(&PlainStyle, 1.0, 2.0, 80),
        "Time:        1s, estimated 2s"
    );
}

#[test]
fn colored_segments_are_bold_and_colored() {
    let result = AggregatedResult {
        num_failed_test_suites: 1,
        num_total_test_suites: 1,
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let out = summarize_at(&AnsiStyle, &result, &RenderOptions::default(), NOW_MS);
    assert!(lines(&out)[0].starts_with(
        "\u{1b}[1mTest Suites: \u{1b}[22m\u{1b}[1m\u{1b}[31m1 failed\u{1b}[39m\u{1b}[22m, "
    ));
}

#[test]
fn extreme_counts_saturate_instead_of_overflowing() {
    let result = AggregatedResult {
        num_failed_test_suites: i64::MAX,
        num_passed_test_suites: 1,
        num_total_test_suites: 3,
        num_passed_tests: i64::MAX,
        num_total_tests: i64::MAX,
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let options = RenderOptions {
        current_test_cases: outcomes(&["passed"]),
        ..RenderOptions::default()
    };
    let out = summarize_at(&PlainStyle, &result, &options, NOW_MS);
    let out_lines = lines(&out);
    assert_eq!(
        out_lines[0],
        format!(
            "Test Suites: {max} failed, 1 passed, {max} of 3 total",
            max = i64::MAX
        )
    );
    assert_eq!(
        out_lines[1],
        format!("Tests:       {max} passed, {max} total", max = i64::MAX)
    );
}

#[test]
fn negative_counts_are_hidden_but_still_totalled() {
    let result = AggregatedResult {
        num_failed_test_suites: -1,
        num_passed_test_suites: 2,
        num_total_test_suites: 2,
        num_failed_tests: -3,
        num_passed_tests: 4,
        num_total_tests: 1,
        start_time: NOW_MS,
        ..AggregatedResult::default()
    };
    let out = summarize_at(&PlainStyle, &result, &RenderOptions::default(), NOW_MS);
    let out_lines = lines(&out);
    assert_eq!(out_lines[0], "Test Suites: 2 passed, 1 of 2 total");
    assert_eq!(out_lines[1], "Tests:       4 passed, 1 total");
}
