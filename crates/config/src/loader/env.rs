//! Environment overlay and `.env` preloading.
//!
//! Responsibilities:
//! - Override top-level keys of a candidate map with same-named environment
//!   variables.
//! - Load an optional `.env` file into the process environment.
//!
//! Does NOT handle:
//! - Nested keys; only top-level names are matched.
//! - Type inference; overridden values are always strings.
//!
//! Invariants:
//! - The overlay never introduces keys that are not already present.
//! - Empty environment variables are treated as unset.
//! - Variables already set in the process win over `.env` entries.
//! - `DOTENV_DISABLED` is checked before the `.env` file is touched.

use std::io::ErrorKind;
use std::path::Path;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::value::{Map, Value};

use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or not UTF-8.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Names the platform cannot look up without panicking.
fn is_valid_var_name(key: &str) -> bool {
    !key.is_empty() && !key.contains('=') && !key.contains('\0')
}

/// Replace every top-level value whose key names a set environment variable.
pub(crate) fn apply_env_overlay(data: &mut Map) {
    for (key, value) in data.iter_mut() {
        if !is_valid_var_name(key) {
            continue;
        }
        if let Some(raw) = env_var_or_none(key) {
            tracing::debug!(key = %key, "Applying environment override");
            *value = Value::String(raw);
        }
    }
}

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load `path` as a `.env` file without overriding variables already set.
///
/// A missing file is not an error. If `DOTENV_DISABLED` is "true" or "1"
/// nothing is loaded.
///
/// # Errors
///
/// Returns `ConfigError::DotenvParse` for malformed lines and
/// `ConfigError::DotenvIo` when the file exists but cannot be read.
pub fn load_dotenv(path: &Path) -> Result<(), ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("Skipping .env loading, disabled by environment");
        return Ok(());
    }

    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound
    )
}
