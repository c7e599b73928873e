//! Optional configuration handle.
//!
//! Responsibilities:
//! - Wrap a possibly absent `&Config` so call sites can query it without
//!   checking for presence first.
//!
//! Does NOT handle:
//! - Ownership; the handle borrows.
//!
//! Invariants:
//! - On an absent handle every read returns the caller default or the type's
//!   zero value (empty string, 0, 0.0, false, zero duration, empty list,
//!   `None` map, no keys, size 0, empty).
//! - Writes on an absent handle are no-ops; loading reports
//!   `ConfigError::Unavailable`.

use std::path::Path;
use std::time::Duration;

use crate::loader::{ConfigError, LoadOptions};
use crate::store::Config;
use crate::value::{Map, Value};

/// A `Config` reference that may be missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeConfig<'a>(Option<&'a Config>);

impl<'a> From<Option<&'a Config>> for MaybeConfig<'a> {
    fn from(inner: Option<&'a Config>) -> Self {
        Self(inner)
    }
}

impl<'a> From<&'a Config> for MaybeConfig<'a> {
    fn from(inner: &'a Config) -> Self {
        Self(Some(inner))
    }
}

impl<'a> MaybeConfig<'a> {
    /// A handle with no configuration behind it.
    pub fn absent() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn inner(&self) -> Option<&'a Config> {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.and_then(|c| c.get(key))
    }

    pub fn set(&self, key: &str, value: impl Into<Value>) {
        if let Some(config) = self.0 {
            config.set(key, value);
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.is_some_and(|c| c.has(key))
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.map(Config::keys).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.map_or(0, Config::len)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none_or(Config::is_empty)
    }

    pub fn clear(&self) {
        if let Some(config) = self.0 {
            config.clear();
        }
    }

    pub fn get_all(&self) -> Map {
        self.0.map(Config::get_all).unwrap_or_default()
    }

    pub fn get_string(&self, key: &str) -> String {
        self.get_string_or(key, "")
    }

    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.0
            .map_or_else(|| default.to_string(), |c| c.get_string_or(key, default))
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.get_int_or(key, 0)
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.0.map_or(default, |c| c.get_int_or(key, default))
    }

    pub fn get_float(&self, key: &str) -> f64 {
        self.get_float_or(key, 0.0)
    }

    pub fn get_float_or(&self, key: &str, default: f64) -> f64 {
        self.0.map_or(default, |c| c.get_float_or(key, default))
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_or(key, false)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.0.map_or(default, |c| c.get_bool_or(key, default))
    }

    pub fn get_duration(&self, key: &str) -> Duration {
        self.get_duration_or(key, Duration::ZERO)
    }

    pub fn get_duration_or(&self, key: &str, default: Duration) -> Duration {
        self.0.map_or(default, |c| c.get_duration_or(key, default))
    }

    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.0
            .map(|c| c.get_string_list(key))
            .unwrap_or_default()
    }

    pub fn get_string_list_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        match self.0 {
            Some(config) => config.get_string_list_or(key, default),
            None => default.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn get_nested_map(&self, key: &str) -> Option<Map> {
        self.0.and_then(|c| c.get_nested_map(key))
    }

    pub fn get_nested_keys(&self, prefix: &str) -> Vec<String> {
        self.0
            .map(|c| c.get_nested_keys(prefix))
            .unwrap_or_default()
    }

    /// Load a file into the wrapped store.
    pub fn load_file(&self, path: impl AsRef<Path>, options: &LoadOptions) -> Result<(), ConfigError> {
        match self.0 {
            Some(config) => config.load_file(path, options),
            None => Err(ConfigError::Unavailable),
        }
    }
}
