//! Load options and format selection.
//!
//! Responsibilities:
//! - Define the supported file formats and extension-based detection.
//! - Define `LoadOptions`, the explicit settings for one file load.
//!
//! Invariants:
//! - Unknown or missing extensions select INI rather than failing.
//! - `LoadOptions::default()` infers the format, applies the environment
//!   overlay, requires nothing and validates nothing.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::value::{Map, Value};

/// Custom validation run against the fully merged data before commit.
pub type Validator = Box<dyn Fn(&Map) -> anyhow::Result<()> + Send + Sync>;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ini,
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Format::Json,
            Some("yaml" | "yml") => Format::Yaml,
            _ => Format::Ini,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Ini => "INI",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        };
        f.write_str(name)
    }
}

/// Options for a single [`Config::load_file`](crate::Config::load_file) call.
#[derive(Default)]
pub struct LoadOptions {
    /// Explicit format; `None` detects it from the extension.
    pub format: Option<Format>,
    /// Skip the environment overlay (and `.env` preloading).
    pub ignore_env: bool,
    /// Keys that must exist, flat or nested, once defaults and environment
    /// have been applied.
    pub required_keys: Vec<String>,
    /// Values used where the file provides none.
    pub defaults: Map,
    pub validator: Option<Validator>,
    /// `.env` file loaded into the process environment before the overlay.
    pub dotenv_path: Option<PathBuf>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("ignore_env", &self.ignore_env)
            .field("required_keys", &self.required_keys)
            .field("defaults", &self.defaults)
            .field("validator", &self.validator.is_some())
            .field("dotenv_path", &self.dotenv_path)
            .finish()
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a format instead of detecting it from the extension.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Disable the environment overlay.
    pub fn ignore_env(mut self) -> Self {
        self.ignore_env = true;
        self
    }

    pub fn with_required_key(mut self, key: impl Into<String>) -> Self {
        self.required_keys.push(key.into());
        self
    }

    pub fn with_required_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_defaults(mut self, defaults: Map) -> Self {
        self.defaults.extend(defaults);
        self
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Set the validation callback. A returned error aborts the load.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Map) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn with_dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }
}
