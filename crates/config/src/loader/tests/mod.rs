//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test the end-to-end load of a record from a sectioned file.
//! - Test environment variable parsing through the binder.
//! - Test config file value conversion through the binder.
//! - Test precedence, omission and error-stop behavior.
//!
//! Does NOT handle:
//! - Conversion edge cases of single values (tested in env.rs and file.rs).
//! - Duration grammar details (tested in duration.rs).
//!
//! Invariants:
//! - Tests inject `MapEnv` unless they specifically exercise `ProcessEnv`.
//! - Tests touching the process environment use `serial_test` and
//!   `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use time::{Duration, OffsetDateTime};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Writes `content` to `config.toml` inside `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join("config.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    write!(file, "{}", content).unwrap();
    config_path
}

/// A record covering every supported field type.
#[derive(Debug, Clone, PartialEq)]
pub struct Everything {
    pub name: String,
    pub enabled: bool,
    pub workers: isize,
    pub offset: i64,
    pub slots: usize,
    pub max_bytes: u64,
    pub ratio: f64,
    pub started_at: OffsetDateTime,
    pub timeout: Duration,
    pub hosts: Vec<String>,
}

impl Default for Everything {
    fn default() -> Self {
        Self {
            name: String::new(),
            enabled: false,
            workers: 0,
            offset: 0,
            slots: 0,
            max_bytes: 0,
            ratio: 0.0,
            started_at: OffsetDateTime::UNIX_EPOCH,
            timeout: Duration::ZERO,
            hosts: Vec::new(),
        }
    }
}

crate::bindable!(Everything {
    name,
    enabled,
    workers,
    offset,
    slots,
    max_bytes,
    ratio,
    started_at,
    timeout,
    hosts,
});
