//! Thread-safe configuration store.
//!
//! Responsibilities:
//! - Own the root `Map` behind a readers-writer lock.
//! - Provide the untyped operations: get, set, has, keys, len, clear,
//!   get_all, load_from_map, set_defaults.
//! - Validate construction settings.
//!
//! Does NOT handle:
//! - Typed accessors (see `accessors.rs`).
//! - File loading (see `loader`); the loader only hands a finished map to
//!   [`Config::replace_all`].
//!
//! Invariants:
//! - Readers share the lock; every mutation holds the write lock for its
//!   whole duration, so no partially applied write is observable.
//! - A poisoned lock is recovered rather than propagated as a panic.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::constants::{DEFAULT_SEPARATOR, FORBIDDEN_SEPARATORS, INI_RESERVED_CHARS};
use crate::loader::{ConfigError, apply_defaults};
use crate::path;
use crate::value::{Map, Value};

/// Construction settings for a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSettings {
    /// Character separating the segments of a nested key path.
    pub separator: char,
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl ConfigSettings {
    /// Reject separators that would collide with key names or INI syntax.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.separator;
        if sep.is_alphanumeric()
            || sep.is_whitespace()
            || FORBIDDEN_SEPARATORS.contains(&sep)
            || INI_RESERVED_CHARS.contains(&sep)
        {
            return Err(ConfigError::InvalidSeparator(sep));
        }
        Ok(())
    }
}

/// In-memory hierarchical configuration.
///
/// Keys are either literal top-level names or separator-delimited paths into
/// nested maps. A literal key always wins over the nested reading of the same
/// string.
pub struct Config {
    data: RwLock<Map>,
    separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("separator", &self.separator)
            .field("keys", &self.read().len())
            .finish()
    }
}

impl Config {
    /// Create an empty store using `.` as the path separator.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Map::new()),
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Create an empty store with validated settings.
    pub fn with_settings(settings: ConfigSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            data: RwLock::new(Map::new()),
            separator: settings.separator,
        })
    }

    /// Create a store pre-populated with `data`.
    pub fn from_map(data: Map) -> Self {
        Self {
            data: RwLock::new(data),
            separator: DEFAULT_SEPARATOR,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Map> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Map> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the value at `key`, if any.
    pub fn get(&self, key: &str) -> Option<Value> {
        path::resolve(&self.read(), key, self.separator).cloned()
    }

    /// Store `value` at `key`.
    ///
    /// A dotted key writes through nested maps unless the literal key already
    /// exists at the top level. Non-map values met along the path are
    /// replaced by empty maps.
    pub fn set(&self, key: &str, value: impl Into<Value>) {
        path::insert(&mut self.write(), key, value.into(), self.separator);
    }

    /// True when `key` exists literally or as a fully resolving nested path.
    pub fn has(&self, key: &str) -> bool {
        path::contains(&self.read(), key, self.separator)
    }

    /// Top-level keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    /// Deep copy of the whole store.
    pub fn get_all(&self) -> Map {
        self.read().clone()
    }

    /// Merge `data` into the store, overwriting top-level entries with the
    /// same name.
    pub fn load_from_map(&self, data: Map) {
        self.write().extend(data);
    }

    /// Insert every entry of `defaults` whose key is not present yet.
    pub fn set_defaults(&self, defaults: Map) {
        apply_defaults(&mut self.write(), &defaults, self.separator);
    }

    /// Swap in a fully prepared map in one write-lock critical section.
    pub(crate) fn replace_all(&self, data: Map) {
        *self.write() = data;
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.read().iter() {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
