//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every way a file load can abort.
//! - Define construction errors for invalid store settings.
//!
//! Does NOT handle:
//! - Accessor failures; typed accessors degrade to defaults instead.
//!
//! Invariants:
//! - All error variants include context for debugging (paths, keys, formats).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use super::options::Format;

/// Errors that can occur while building or loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config file at {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("Required configuration key is missing: {0:?}")]
    RequiredKeyMissing(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[source] anyhow::Error),

    #[error("Invalid key path separator {0:?}")]
    InvalidSeparator(char),

    #[error("Configuration is not available")]
    Unavailable,

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = ConfigError::RequiredKeyMissing("server.port".to_string());
        assert_eq!(
            err.to_string(),
            "Required configuration key is missing: \"server.port\""
        );

        let err = ConfigError::Parse {
            path: PathBuf::from("app.json"),
            format: Format::Json,
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse JSON config file at app.json: expected value"
        );
    }

    #[test]
    fn test_validation_failure_keeps_cause() {
        let err = ConfigError::ValidationFailed(anyhow::anyhow!("port out of range"));
        assert_eq!(err.to_string(), "Validation failed: port out of range");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("port out of range"));
    }
}
