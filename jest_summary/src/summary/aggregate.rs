use serde::Serialize;

use crate::test_model::{TestCaseOutcome, TestStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveCounts {
    pub failing: i64,
    pub passing: i64,
    pub pending: i64,
    pub todo: i64,
    pub total: i64,
}

/// Tallies live test cases. `total` counts every case, including ones whose
/// status falls outside the four named buckets.
pub fn aggregate(outcomes: &[TestCaseOutcome]) -> LiveCounts {
    outcomes
        .iter()
        .fold(LiveCounts::default(), |mut counts, outcome| {
            match outcome.status {
                TestStatus::Failed => counts.failing += 1,
                TestStatus::Passed => counts.passing += 1,
                TestStatus::Skipped => counts.pending += 1,
                TestStatus::Todo => counts.todo += 1,
                TestStatus::Other(_) => {}
            }
            counts.total += 1;
            counts
        })
}
