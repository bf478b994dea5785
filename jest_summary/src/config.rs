use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::SummaryError;
use crate::format::style::ColorChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthSetting {
    Auto,
    Columns(usize),
}

impl WidthSetting {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Some(WidthSetting::Auto);
        }
        trimmed.parse::<usize>().ok().map(WidthSetting::Columns)
    }
}

impl<'de> Deserialize<'de> for WidthSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Columns(usize),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Columns(columns) => Ok(WidthSetting::Columns(columns)),
            Raw::Keyword(keyword) => WidthSetting::parse(&keyword).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "invalid width {keyword:?}, expected a number or \"auto\""
                ))
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryConfig {
    pub estimated_time: Option<f64>,
    pub round_time: Option<bool>,
    pub width: Option<WidthSetting>,
    pub color: Option<ColorChoice>,
}

const CONFIG_FILE_NAMES: [&str; 7] = [
    "jest-summary.toml",
    "jest-summary.config.json",
    "jest-summary.config.json5",
    "jest-summary.config.yaml",
    "jest-summary.config.yml",
    ".jestsummaryrc",
    ".jestsummaryrc.json",
];

pub fn discover_config_path(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

pub fn load_summary_config(dir: &Path) -> Result<SummaryConfig, SummaryError> {
    match discover_config_path(dir) {
        Some(path) => load_summary_config_from_path(&path),
        None => Ok(SummaryConfig::default()),
    }
}

pub fn load_summary_config_from_path(path: &Path) -> Result<SummaryConfig, SummaryError> {
    let ext = path
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let is_bare_rc = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n == ".jestsummaryrc");

    match ext.as_str() {
        "json" | "json5" | "jsonc" => load_json_config(path),
        "yaml" | "yml" => load_yaml_config(path),
        "toml" => load_toml_config(path),
        _ if is_bare_rc => load_json_config(path),
        _ => Ok(SummaryConfig::default()),
    }
}

fn read_config(path: &Path) -> Result<String, SummaryError> {
    std::fs::read_to_string(path).map_err(|source| SummaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path, message: impl ToString) -> SummaryError {
    SummaryError::ConfigParse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn load_json_config(path: &Path) -> Result<SummaryConfig, SummaryError> {
    let raw = read_config(path)?;
    json5::from_str::<SummaryConfig>(&raw)
        .or_else(|_| serde_json::from_str::<SummaryConfig>(&raw))
        .map_err(|err| parse_error(path, err))
}

fn load_yaml_config(path: &Path) -> Result<SummaryConfig, SummaryError> {
    let raw = read_config(path)?;
    serde_yaml::from_str::<SummaryConfig>(&raw).map_err(|err| parse_error(path, err))
}

fn load_toml_config(path: &Path) -> Result<SummaryConfig, SummaryError> {
    let raw = read_config(path)?;
    let table = toml::from_str::<toml::Value>(&raw).map_err(|err| parse_error(path, err))?;
    let json = serde_json::to_value(table).map_err(|err| parse_error(path, err))?;
    serde_json::from_value::<SummaryConfig>(normalize_keys_to_camel_case(&json))
        .map_err(|err| parse_error(path, err))
}

fn normalize_keys_to_camel_case(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (snake_to_camel(k), normalize_keys_to_camel_case(v)))
                .collect(),
        ),
        JsonValue::Array(items) => {
            JsonValue::Array(items.iter().map(normalize_keys_to_camel_case).collect())
        }
        other => other.clone(),
    }
}

fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' || ch == '-' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
