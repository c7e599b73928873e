//! Tests for the configuration load pipeline.
//!
//! Responsibilities:
//! - Test each load step in isolation and in order.
//! - Test environment overlay precedence and `.env` preloading.
//! - Test that failed loads leave the store untouched.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and
//!   `global_test_lock()`.
//! - Every file is written inside a `tempfile::TempDir`.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;

pub mod basic_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
