//! In-memory hierarchical configuration store.
//!
//! This crate loads INI, JSON and YAML files into a thread-safe store
//! addressed by separator-delimited key paths (`server.port`), and exposes
//! typed accessors that coerce stored values and never fail.
//!
//! ```no_run
//! use std::time::Duration;
//! use strata_config::{Config, LoadOptions};
//!
//! let options = LoadOptions::new()
//!     .with_default("server.port", 8080)
//!     .with_required_key("server.host");
//! let config = Config::load("app.ini", &options)?;
//!
//! let port = config.get_int("server.port");
//! let timeout = config.get_duration_or("server.timeout", Duration::from_secs(30));
//! # let _ = (port, timeout);
//! # Ok::<(), strata_config::ConfigError>(())
//! ```

mod accessors;
mod coerce;
pub mod constants;
pub mod duration;
mod global;
pub mod ini;
mod loader;
mod optional;
pub mod path;
mod store;
pub mod value;

pub use duration::parse_duration;
pub use global::{global, load_global};
pub use loader::{ConfigError, Format, LoadOptions, Validator, env_var_or_none, load_dotenv};
pub use optional::MaybeConfig;
pub use store::{Config, ConfigSettings};
pub use value::{Map, Value};
