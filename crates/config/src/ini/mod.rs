//! INI format parser.
//!
//! Responsibilities:
//! - Turn INI text into the nested `Map` shape held by the configuration store.
//! - Handle sections, whole-line and inline comments, quoting, escape
//!   sequences, continuation lines and literal type inference.
//!
//! Does NOT handle:
//! - Reading files (see `loader`).
//! - Reporting errors: malformed lines are skipped one at a time.
//!
//! Invariants:
//! - Keys before the first section header land at the root.
//! - A header `[name]` selects (creating if needed) `root[name]` as a map,
//!   replacing any non-map value stored under that name.
//! - An empty or invalid section name discards every key until the next valid
//!   header or the end of input.
//! - Repeated sections merge; later keys overwrite earlier ones.

mod lines;
mod scalar;

use crate::constants::INI_RESERVED_CHARS;
use crate::path::ensure_map;
use crate::value::{Map, Value};

use lines::{logical_lines, strip_inline_comment};

pub use scalar::unescape;

/// Where key/value lines are currently written.
enum Target {
    Root,
    Section(String),
    Discard,
}

/// Parse INI `content` into a nested map. Never fails.
pub fn parse(content: &str) -> Map {
    let mut root = Map::new();
    let mut target = Target::Root;

    for line in logical_lines(content) {
        let text = line.text.as_str();
        if text.is_empty() || text.starts_with('#') || text.starts_with(';') {
            continue;
        }

        if let Some(header) = section_header(text) {
            target = if is_valid_name(header) {
                let slot = root
                    .entry(header.to_string())
                    .or_insert_with(|| Value::Map(Map::new()));
                ensure_map(slot);
                Target::Section(header.to_string())
            } else {
                tracing::warn!(
                    line = line.number,
                    header = text,
                    "Ignoring keys under invalid INI section header"
                );
                Target::Discard
            };
            continue;
        }

        let Some((key, value)) = split_pair(strip_inline_comment(text)) else {
            continue;
        };
        let value = scalar::infer(value);

        match &target {
            Target::Root => {
                root.insert(key.to_string(), value);
            }
            Target::Section(name) => {
                let slot = root
                    .entry(name.clone())
                    .or_insert_with(|| Value::Map(Map::new()));
                ensure_map(slot).insert(key.to_string(), value);
            }
            Target::Discard => {}
        }
    }

    root
}

/// Trimmed name between `[` and `]` when the whole line is a header.
fn section_header(text: &str) -> Option<&str> {
    text.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(INI_RESERVED_CHARS)
}

/// Split on the first `=` and validate the key.
fn split_pair(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    let (key, value) = text.split_once('=')?;
    let key = key.trim();
    if !is_valid_name(key) {
        return None;
    }
    Some((key, value.trim()))
}
