//! Configuration file loading.
//!
//! Responsibilities:
//! - Load INI, JSON and YAML files into a [`Config`](crate::Config).
//! - Merge defaults, overlay environment variables, check required keys and
//!   run custom validation before committing.
//! - Enforce the `DOTENV_DISABLED` gate before optional `.env` preloading.
//!
//! Does NOT handle:
//! - Persisting configuration changes back to disk.
//! - Watching files for changes.
//!
//! Invariants / Assumptions:
//! - Every step runs on a candidate map outside the store lock.
//! - A failed load never modifies the store.
//! - Environment variables override file values and defaults, but only for
//!   top-level keys that already exist.

mod decode;
mod defaults;
mod env;
mod error;
mod options;
mod pipeline;

pub(crate) use defaults::apply_defaults;
pub use env::{env_var_or_none, load_dotenv};
pub use error::ConfigError;
pub use options::{Format, LoadOptions, Validator};

#[cfg(test)]
mod tests;
