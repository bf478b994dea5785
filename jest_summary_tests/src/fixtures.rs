use jest_summary::test_model::{AggregatedResult, SnapshotSummary, TestCaseOutcome, TestStatus};

pub const NOW_MS: u64 = 1_700_000_000_000;

/// A finished-looking run that started `elapsed_ms` before [`NOW_MS`].
pub fn result_started_ago(elapsed_ms: u64) -> AggregatedResult {
    AggregatedResult {
        start_time: NOW_MS - elapsed_ms,
        ..AggregatedResult::default()
    }
}

pub fn mixed_run() -> AggregatedResult {
    AggregatedResult {
        num_failed_test_suites: 1,
        num_passed_test_suites: 5,
        num_pending_test_suites: 1,
        num_total_test_suites: 8,
        num_failed_tests: 2,
        num_passed_tests: 40,
        num_pending_tests: 3,
        num_todo_tests: 1,
        num_total_tests: 46,
        snapshot: SnapshotSummary {
            added: 2,
            unmatched: 1,
            unchecked: 4,
            files_removed: 1,
            did_update: false,
            matched: 10,
            total: 13,
            updated: 0,
        },
        ..result_started_ago(12_300)
    }
}

pub fn live_cases(statuses: &[&str]) -> Vec<TestCaseOutcome> {
    statuses
        .iter()
        .map(|status| TestCaseOutcome::new(TestStatus::from((*status).to_string())))
        .collect()
}
