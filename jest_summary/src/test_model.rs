use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregatedResult {
    pub num_failed_test_suites: i64,
    pub num_passed_test_suites: i64,
    pub num_pending_test_suites: i64,
    pub num_total_test_suites: i64,
    pub num_failed_tests: i64,
    pub num_passed_tests: i64,
    pub num_pending_tests: i64,
    pub num_todo_tests: i64,
    pub num_total_tests: i64,
    pub snapshot: SnapshotSummary,
    /// Milliseconds since the Unix epoch.
    pub start_time: u64,
}

impl AggregatedResult {
    pub fn suites_run(&self) -> i64 {
        self.num_failed_test_suites.saturating_add(self.num_passed_test_suites)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotSummary {
    pub added: i64,
    pub unmatched: i64,
    pub unchecked: i64,
    pub files_removed: i64,
    pub did_update: bool,
    pub matched: i64,
    pub total: i64,
    pub updated: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestStatus {
    Failed,
    Passed,
    Skipped,
    Todo,
    Other(String),
}

impl From<String> for TestStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "failed" => TestStatus::Failed,
            "passed" => TestStatus::Passed,
            "skipped" => TestStatus::Skipped,
            "todo" => TestStatus::Todo,
            _ => TestStatus::Other(raw),
        }
    }
}

impl From<TestStatus> for String {
    fn from(status: TestStatus) -> Self {
        match status {
            TestStatus::Failed => "failed".to_string(),
            TestStatus::Passed => "passed".to_string(),
            TestStatus::Skipped => "skipped".to_string(),
            TestStatus::Todo => "todo".to_string(),
            TestStatus::Other(raw) => raw,
        }
    }
}

/// A test case observed during the current run but not yet folded into the
/// aggregated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTestCaseOutcome")]
pub struct TestCaseOutcome {
    pub status: TestStatus,
}

impl TestCaseOutcome {
    pub fn new(status: TestStatus) -> Self {
        Self { status }
    }
}

// Jest reports live cases as `{ test, testCaseResult: { status, .. } }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTestCaseOutcome {
    Nested {
        #[serde(rename = "testCaseResult")]
        test_case_result: StatusOnly,
    },
    Flat(StatusOnly),
}

#[derive(Debug, Deserialize)]
struct StatusOnly {
    status: TestStatus,
}

impl From<RawTestCaseOutcome> for TestCaseOutcome {
    fn from(raw: RawTestCaseOutcome) -> Self {
        match raw {
            RawTestCaseOutcome::Nested { test_case_result } => {
                TestCaseOutcome::new(test_case_result.status)
            }
            RawTestCaseOutcome::Flat(flat) => TestCaseOutcome::new(flat.status),
        }
    }
}
