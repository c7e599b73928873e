//! Typed accessors over the configuration store.
//!
//! Every accessor comes in two forms: `get_x(key)` falls back to the type's
//! zero value, `get_x_or(key, default)` falls back to `default`. Neither ever
//! fails; a missing key or a value that does not coerce yields the fallback.

use std::time::Duration;

use crate::path;
use crate::store::Config;
use crate::value::{Map, Value};

impl Config {
    /// Resolve `key` under the read lock and run `f` on the value found.
    fn with_value<T>(&self, key: &str, f: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        let guard = self.read();
        path::resolve(&guard, key, self.separator()).and_then(f)
    }

    pub fn get_string(&self, key: &str) -> String {
        self.get_string_or(key, "")
    }

    /// Any stored value is stringified, so only a missing key falls back.
    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.with_value(key, |v| Some(v.to_text()))
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.get_int_or(key, 0)
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.with_value(key, Value::to_int).unwrap_or(default)
    }

    pub fn get_float(&self, key: &str) -> f64 {
        self.get_float_or(key, 0.0)
    }

    pub fn get_float_or(&self, key: &str, default: f64) -> f64 {
        self.with_value(key, Value::to_float).unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_or(key, false)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.with_value(key, Value::to_bool).unwrap_or(default)
    }

    pub fn get_duration(&self, key: &str) -> Duration {
        self.get_duration_or(key, Duration::ZERO)
    }

    /// Strings like `"1m30s"` or `"45"`, integers as seconds, floats as
    /// fractional seconds.
    pub fn get_duration_or(&self, key: &str, default: Duration) -> Duration {
        self.with_value(key, Value::to_duration).unwrap_or(default)
    }

    /// Never returns an absent list: the fallback is an empty `Vec`.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.with_value(key, Value::to_string_list)
            .unwrap_or_default()
    }

    pub fn get_string_list_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        self.with_value(key, Value::to_string_list)
            .unwrap_or_else(|| default.iter().map(|s| (*s).to_string()).collect())
    }

    /// Copy of the map stored at `key`, or `None` if `key` does not hold a map.
    pub fn get_nested_map(&self, key: &str) -> Option<Map> {
        self.with_value(key, |v| v.as_map().cloned())
    }

    /// Full paths of the immediate children of the map at `prefix`.
    ///
    /// `get_nested_keys("server")` might return `["server.host", "server.port"]`.
    pub fn get_nested_keys(&self, prefix: &str) -> Vec<String> {
        path::child_paths(&self.read(), prefix, self.separator())
    }
}
