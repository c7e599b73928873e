//! Dynamically-typed configuration values.
//!
//! Responsibilities:
//! - Define the closed `Value` variant set stored by the configuration store.
//! - Provide `From` conversions for native Rust types.
//! - Render values as strings for the string accessor and `Display`.
//!
//! Does NOT handle:
//! - Coercion into typed results (see `coerce.rs`).
//! - Key path traversal (see `path.rs`).
//!
//! Invariants:
//! - Nested maps only ever contain `Value`; there is no other container shape.
//! - Integers keep their width: `Int` holds machine-word values, `Int64` holds
//!   values at or beyond the machine-word bounds.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::constants::{MAP_TOKEN, NULL_TOKEN};

/// A nested configuration table keyed by segment name.
pub type Map = BTreeMap<String, Value>;

/// A configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    /// Machine-word integer.
    Int(isize),
    /// Wide integer, produced when a value sits on or outside the `isize` bounds.
    Int64(i64),
    Float(f64),
    String(String),
    StringList(Vec<String>),
    Map(Map),
}

impl Value {
    /// Build an integer value, widening to `Int64` at the machine-word bounds.
    ///
    /// The bounds themselves widen too: `isize::MAX` and `isize::MIN` become
    /// `Int64`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_integer(n: i64) -> Self {
        if n >= isize::MAX as i64 || n <= isize::MIN as i64 {
            Value::Int64(n)
        } else {
            Value::Int(n as isize)
        }
    }

    /// Short name of the variant, used in log fields.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Int64(_) => "int64",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::StringList(_) => "string_list",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str(NULL_TOKEN),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(f, *x),
            Value::String(s) => f.write_str(s),
            Value::StringList(items) => write!(f, "[{}]", items.join(" ")),
            Value::Map(map) => {
                write!(f, "{MAP_TOKEN}[")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Shortest round-trip digits, switching to an exponent below `1e-4` and from
/// `1e6` upward (`1e+06`, `1.5e-07`). Non-finite values print as `NaN`,
/// `+Inf` and `-Inf`.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "+Inf" } else { "-Inf" });
    }
    if x == 0.0 {
        return write!(f, "{x}");
    }

    let scientific = format!("{x:e}");
    let parts = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match parts {
        Some((mantissa, exp)) if !(-4..6).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        _ => write!(f, "{x}"),
    }
}

macro_rules! impl_from_narrow_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(isize::from(n))
                }
            }
        )*
    };
}

impl_from_narrow_int!(i8, i16, u8);

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::from_integer(i64::from(n))
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int64(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::StringList(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::StringList(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Value::StringList(items.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
