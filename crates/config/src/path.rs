//! Dot-path resolution over nested maps.
//!
//! Responsibilities:
//! - Resolve a key against a `Map`, trying the literal key before the
//!   segmented (nested) interpretation.
//! - Insert a value at a key, creating intermediate maps as needed.
//!
//! Does NOT handle:
//! - Locking; callers pass a map they already hold the right guard for.
//! - Type coercion (see `coerce.rs`).
//!
//! Invariants:
//! - A literal top-level key always shadows the nested interpretation of the
//!   same string.
//! - Reads never create maps and never look through non-map values.
//! - Writes replace a non-map intermediate value with an empty map, losing
//!   the previous scalar.

use crate::value::{Map, Value};

/// Resolve `key`: literal match first, then the nested path if `key`
/// contains `separator`.
pub fn resolve<'a>(map: &'a Map, key: &str, separator: char) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }
    if !key.contains(separator) {
        return None;
    }
    resolve_nested(map, key, separator)
}

/// Walk the nested maps segment by segment. Every non-final segment must
/// hold a map.
pub fn resolve_nested<'a>(map: &'a Map, key: &str, separator: char) -> Option<&'a Value> {
    let mut segments = key.split(separator);
    let mut current = map;
    let mut segment = segments.next()?;
    for next in segments {
        current = current.get(segment)?.as_map()?;
        segment = next;
    }
    current.get(segment)
}

/// Existence check using the same rules as [`resolve`].
pub fn contains(map: &Map, key: &str, separator: char) -> bool {
    resolve(map, key, separator).is_some()
}

/// Store `value` at `key`.
///
/// An existing literal key is overwritten in place. Otherwise a key holding
/// the separator is written through the nested path.
pub fn insert(map: &mut Map, key: &str, value: Value, separator: char) {
    if map.contains_key(key) || !key.contains(separator) {
        map.insert(key.to_string(), value);
    } else {
        insert_nested(map, key, value, separator);
    }
}

/// Store `value` at the nested path, replacing any non-map value found on
/// the way with an empty map.
pub fn insert_nested(map: &mut Map, key: &str, value: Value, separator: char) {
    let segments: Vec<&str> = key.split(separator).collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = map;
    for segment in parents {
        let slot = current
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Map(Map::new()));
        current = ensure_map(slot);
    }
    current.insert((*last).to_string(), value);
}

/// Immediate child paths under `prefix`, each joined with the separator.
/// Empty when `prefix` does not resolve to a map.
pub fn child_paths(map: &Map, prefix: &str, separator: char) -> Vec<String> {
    resolve(map, prefix, separator)
        .and_then(Value::as_map)
        .map(|children| {
            children
                .keys()
                .map(|child| format!("{prefix}{separator}{child}"))
                .collect()
        })
        .unwrap_or_default()
}

/// Make `slot` a map, discarding any other value it held.
pub(crate) fn ensure_map(slot: &mut Value) -> &mut Map {
    if !matches!(slot, Value::Map(_)) {
        *slot = Value::Map(Map::new());
    }
    match slot {
        Value::Map(map) => map,
        _ => unreachable!("slot holds a map after replacement"),
    }
}
