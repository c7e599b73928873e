//! File load pipeline.
//!
//! Responsibilities:
//! - Run the ordered load steps on a locally owned candidate map: existence
//!   check, format selection, read, decode, defaults, environment overlay,
//!   required keys, custom validation.
//! - Commit the finished candidate into a [`Config`] in one write.
//!
//! Does NOT handle:
//! - Merging with the previous store content; a successful load replaces it.
//!
//! Invariants:
//! - No lock is held while any step before the commit runs.
//! - Any failure leaves the store exactly as it was.

use std::fs;
use std::path::Path;

use crate::path;
use crate::store::Config;
use crate::value::Map;

use super::decode::decode;
use super::defaults::apply_defaults;
use super::env::{apply_env_overlay, load_dotenv};
use super::error::ConfigError;
use super::options::{Format, LoadOptions};

/// Build the candidate map for `path` without touching any store.
pub(crate) fn prepare(
    path: &Path,
    options: &LoadOptions,
    separator: char,
) -> Result<Map, ConfigError> {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let format = options.format.unwrap_or_else(|| Format::from_path(path));
    tracing::debug!(path = %path.display(), %format, "Loading configuration file");

    let bytes = fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = decode(format, &bytes).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    })?;

    apply_defaults(&mut data, &options.defaults, separator);

    if !options.ignore_env {
        if let Some(dotenv_path) = &options.dotenv_path {
            load_dotenv(dotenv_path)?;
        }
        apply_env_overlay(&mut data);
    }

    if let Some(missing) = options
        .required_keys
        .iter()
        .find(|key| !path::contains(&data, key, separator))
    {
        return Err(ConfigError::RequiredKeyMissing(missing.clone()));
    }

    if let Some(validator) = &options.validator {
        validator(&data).map_err(ConfigError::ValidationFailed)?;
    }

    Ok(data)
}

impl Config {
    /// Load `path` and atomically replace the store content with it.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error; the store is unchanged then.
    pub fn load_file(&self, path: impl AsRef<Path>, options: &LoadOptions) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let data = match prepare(path, options, self.separator()) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Configuration load aborted");
                return Err(e);
            }
        };

        let keys = data.len();
        self.replace_all(data);
        tracing::debug!(path = %path.display(), keys, "Configuration committed");
        Ok(())
    }

    /// Create a new store from `path`.
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, ConfigError> {
        let config = Self::new();
        config.load_file(path, options)?;
        Ok(config)
    }

    /// Create a new store from `path`, filling gaps from `defaults`.
    pub fn load_with_defaults(path: impl AsRef<Path>, defaults: Map) -> Result<Self, ConfigError> {
        Self::load(path, &LoadOptions::new().with_defaults(defaults))
    }
}
