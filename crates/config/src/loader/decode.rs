//! Format decoders.
//!
//! Responsibilities:
//! - Turn raw file bytes into a fresh `Map` for the selected format.
//! - Map `serde_json` and `serde_yaml` trees onto the closed `Value` set.
//!
//! Does NOT handle:
//! - INI grammar (see `ini`); INI input never fails to decode.
//!
//! Invariants:
//! - Integers use the same width rule as the INI parser.
//! - Arrays become string lists with each element stringified.
//! - An empty or null document is an empty map; any other non-mapping
//!   top-level document is rejected.

use crate::ini;
use crate::value::{Map, Value};

use super::options::Format;

/// Decode `bytes` as `format`. The error is a human-readable parse message.
pub(crate) fn decode(format: Format, bytes: &[u8]) -> Result<Map, String> {
    match format {
        Format::Ini => Ok(ini::parse(&String::from_utf8_lossy(bytes))),
        Format::Json => {
            let document: serde_json::Value =
                serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
            into_document(from_json(document))
        }
        Format::Yaml => {
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Map::new());
            }
            let document: serde_yaml::Value =
                serde_yaml::from_slice(bytes).map_err(|e| e.to_string())?;
            into_document(from_yaml(document))
        }
    }
}

fn into_document(value: Value) -> Result<Map, String> {
    match value {
        Value::Map(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(format!(
            "top-level document must be a mapping, found {}",
            other.type_name()
        )),
    }
}

#[allow(clippy::cast_precision_loss)]
fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from_integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::Float(u as f64)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::StringList(
            items
                .into_iter()
                .map(|item| from_json(item).to_text())
                .collect(),
        ),
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

#[allow(clippy::cast_precision_loss)]
fn from_yaml(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from_integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::Float(u as f64)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::StringList(
            items
                .into_iter()
                .map(|item| from_yaml(item).to_text())
                .collect(),
        ),
        serde_yaml::Value::Mapping(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (from_yaml(key).to_text(), from_yaml(value)))
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}
