//! Type coercion for stored values.
//!
//! Responsibilities:
//! - Convert a `Value` into the semantic type requested by a typed accessor.
//! - Keep every conversion total: failure is `None`, never an error or panic.
//!
//! Does NOT handle:
//! - Default selection (accessors apply the caller default or zero value).
//! - Key lookup (see `path.rs`).
//!
//! Invariants:
//! - Boolean strings use the strict vocabulary `true`/`false`/`1`/`0`
//!   (case-insensitive). The INI parser's looser `yes`/`no`/`on`/`off` words
//!   are not recognized here.
//! - A string becomes a list by splitting on `,` without trimming.

use std::time::Duration;

use crate::duration::parse_duration;
use crate::value::Value;

impl Value {
    /// Stringify any value. Strings pass through unchanged.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Integer view: integers pass through, floats truncate toward zero,
    /// strings are parsed as base-10.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n as i64),
            Value::Int64(n) => Some(*n),
            Value::Float(x) => Some(x.trunc() as i64),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Float view: floats pass through, integers widen, strings are parsed.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            Value::Int64(n) => Some(*n as f64),
            Value::String(s) => parse_float(s),
            _ => None,
        }
    }

    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) => parse_strict_bool(s),
            _ => None,
        }
    }

    /// Duration view.
    ///
    /// Strings are read as a unit-suffixed expression first and as a bare
    /// count of seconds second. Integers count whole seconds; floats count
    /// fractional seconds. Negative spans are not representable.
    pub fn to_duration(&self) -> Option<Duration> {
        match self {
            Value::String(s) => parse_duration(s).or_else(|| {
                s.parse::<i64>()
                    .ok()
                    .and_then(|secs| u64::try_from(secs).ok())
                    .map(Duration::from_secs)
            }),
            Value::Int(n) => u64::try_from(*n).ok().map(Duration::from_secs),
            Value::Int64(n) => u64::try_from(*n).ok().map(Duration::from_secs),
            Value::Float(x) => Duration::try_from_secs_f64(*x).ok(),
            _ => None,
        }
    }

    /// List view: lists pass through, a single string splits on `,`.
    pub fn to_string_list(&self) -> Option<Vec<String>> {
        match self {
            Value::StringList(items) => Some(items.clone()),
            Value::String(s) => Some(s.split(',').map(str::to_string).collect()),
            _ => None,
        }
    }
}

fn parse_strict_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") || s == "1" {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s == "0" {
        Some(false)
    } else {
        None
    }
}

/// Parse a decimal float, rejecting literals too large for `f64`.
///
/// Spelled-out `inf` and `nan` words are still accepted.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let x: f64 = text.parse().ok()?;
    (x.is_finite() || !text.bytes().any(|b| b.is_ascii_digit())).then_some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    #[test]
    fn test_to_text() {
        assert_eq!(Value::from("plain").to_text(), "plain");
        assert_eq!(Value::Bool(true).to_text(), "true");
        assert_eq!(Value::Null.to_text(), "<nil>");
        assert_eq!(Value::Int(42).to_text(), "42");
        assert_eq!(Value::Map(Map::new()).to_text(), "map[]");
    }

    #[test]
    fn test_to_int() {
        assert_eq!(Value::Int(7).to_int(), Some(7));
        assert_eq!(Value::Int64(i64::MAX).to_int(), Some(i64::MAX));
        assert_eq!(Value::Float(3.99).to_int(), Some(3));
        assert_eq!(Value::Float(-3.99).to_int(), Some(-3));
        assert_eq!(Value::from("123").to_int(), Some(123));
        assert_eq!(Value::from("-5").to_int(), Some(-5));
        assert_eq!(Value::from("12.5").to_int(), None);
        assert_eq!(Value::from("abc").to_int(), None);
        assert_eq!(Value::Bool(true).to_int(), None);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(Value::Float(2.5).to_float(), Some(2.5));
        assert_eq!(Value::Int(2).to_float(), Some(2.0));
        assert_eq!(Value::Int64(-4).to_float(), Some(-4.0));
        assert_eq!(Value::from("1.25").to_float(), Some(1.25));
        assert_eq!(Value::from("1e3").to_float(), Some(1000.0));
        assert_eq!(Value::from("x1").to_float(), None);
        assert_eq!(Value::from("1e400").to_float(), None);
        assert_eq!(Value::from("inf").to_float(), Some(f64::INFINITY));
        assert_eq!(Value::Null.to_float(), None);
    }

    #[test]
    fn test_to_bool_strict_vocabulary() {
        assert_eq!(Value::Bool(false).to_bool(), Some(false));
        assert_eq!(Value::from("true").to_bool(), Some(true));
        assert_eq!(Value::from("TRUE").to_bool(), Some(true));
        assert_eq!(Value::from("1").to_bool(), Some(true));
        assert_eq!(Value::from("False").to_bool(), Some(false));
        assert_eq!(Value::from("0").to_bool(), Some(false));

        for loose in ["yes", "no", "on", "off", "t", "f", ""] {
            assert_eq!(Value::from(loose).to_bool(), None, "{loose:?} must not coerce");
        }
        assert_eq!(Value::Int(1).to_bool(), None);
    }

    #[test]
    fn test_to_duration() {
        assert_eq!(
            Value::from("1m30s").to_duration(),
            Some(Duration::from_secs(90))
        );
        assert_eq!(Value::from("45").to_duration(), Some(Duration::from_secs(45)));
        assert_eq!(Value::Int(10).to_duration(), Some(Duration::from_secs(10)));
        assert_eq!(
            Value::Int64(3600).to_duration(),
            Some(Duration::from_secs(3600))
        );
        assert_eq!(
            Value::Float(90.5).to_duration(),
            Some(Duration::from_millis(90_500))
        );
        assert_eq!(Value::Int(-1).to_duration(), None);
        assert_eq!(Value::Float(-0.5).to_duration(), None);
        assert_eq!(Value::from("soon").to_duration(), None);
        assert_eq!(Value::Bool(true).to_duration(), None);
    }

    #[test]
    fn test_to_string_list() {
        assert_eq!(
            Value::from(vec!["a", "b"]).to_string_list(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            Value::from("a, b,c").to_string_list(),
            Some(vec!["a".to_string(), " b".to_string(), "c".to_string()])
        );
        assert_eq!(Value::from("").to_string_list(), Some(vec![String::new()]));
        assert_eq!(Value::Int(1).to_string_list(), None);
    }
}
