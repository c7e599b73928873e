//! Process-wide configuration instance.
//!
//! Prefer passing a [`Config`] explicitly. The shared instance exists for
//! programs that want one store for their whole lifetime without threading a
//! handle through every call.
//!
//! Invariants:
//! - Constructed exactly once, on first access, even under concurrent first
//!   access. Never torn down.

use std::path::Path;
use std::sync::OnceLock;

use crate::loader::{ConfigError, LoadOptions};
use crate::store::Config;

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// The shared instance, created empty on first use.
pub fn global() -> &'static Config {
    GLOBAL.get_or_init(Config::new)
}

/// Load a file into the shared instance.
pub fn load_global(path: impl AsRef<Path>, options: &LoadOptions) -> Result<(), ConfigError> {
    global().load_file(path, options)
}
