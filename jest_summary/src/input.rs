use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::args::InputSource;
use crate::error::SummaryError;
use crate::test_model::{AggregatedResult, TestCaseOutcome};

pub fn read_aggregated_result(
    source: &InputSource,
    stdin: impl Read,
) -> Result<AggregatedResult, SummaryError> {
    match source {
        InputSource::Stdin => {
            let raw = read_all(stdin, Path::new("<stdin>"))?;
            parse_json("<stdin>", &raw)
        }
        InputSource::File(path) => {
            let raw = read_file(path)?;
            parse_json(&path.to_string_lossy(), &raw)
        }
    }
}

pub fn read_live_test_cases(path: Option<&Path>) -> Result<Vec<TestCaseOutcome>, SummaryError> {
    let Some(path) = path else {
        return Ok(vec![]);
    };
    let raw = read_file(path)?;
    parse_json(&path.to_string_lossy(), &raw)
}

pub fn parse_json<T: DeserializeOwned>(source_name: &str, raw: &str) -> Result<T, SummaryError> {
    serde_json::from_str::<T>(raw).map_err(|err| SummaryError::ResultsParse {
        source_name: source_name.to_string(),
        message: err.to_string(),
    })
}

fn read_file(path: &Path) -> Result<String, SummaryError> {
    std::fs::read_to_string(path).map_err(|source| SummaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_all(mut reader: impl Read, label: &Path) -> Result<String, SummaryError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|source| SummaryError::Io {
            path: label.to_path_buf(),
            source,
        })?;
    Ok(raw)
}
