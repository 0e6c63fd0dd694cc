//! Integration tests for loading records through the public API.
//!
//! These tests exercise the crate the way a downstream application does:
//! records declared with `bindable!` outside the crate, the `load` entry
//! point against the process environment, and the `ConfigLoader` builder.

use std::path::PathBuf;

use serial_test::serial;
use shift_config::{
    BindSource, ConfigError, ConfigLoader, DecodeError, MapEnv, ValueError, bindable, keys, load,
};
use tempfile::TempDir;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

#[derive(Debug)]
struct ServiceConfig {
    listen_addr: String,
    max_connections: usize,
    read_timeout: Duration,
    deployed_at: OffsetDateTime,
    verbose: bool,
    admin_token: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            max_connections: 64,
            read_timeout: Duration::seconds(5),
            deployed_at: OffsetDateTime::UNIX_EPOCH,
            verbose: false,
            admin_token: String::new(),
        }
    }
}

bindable!(ServiceConfig {
    #[key = "addr"]
    listen_addr,
    max_connections,
    read_timeout,
    deployed_at,
    verbose,
    #[key = "-"]
    admin_token,
});

const CONFIG: &str = r#"
[dev]
addr = "0.0.0.0:9000"
max_connections = 16
read_timeout = "1m30s"
deployed_at = 2024-03-01T08:00:00Z

[prod]
addr = "0.0.0.0:443"
max_connections = 4096
verbose = false
"#;

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("service.toml");
    std::fs::write(&path, CONFIG).unwrap();
    path
}

/// Test that `load` reads the process environment over the file section.
#[test]
#[serial]
fn test_load_with_process_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir);

    temp_env::with_vars(
        [
            ("SVCTEST_MAX_CONNECTIONS", Some("128")),
            ("SVCTEST_VERBOSE", Some("true")),
            ("SVCTEST_ADMIN_TOKEN", Some("leaked")),
            ("SVCTEST_ADDR", None),
        ],
        || {
            let mut config = ServiceConfig::default();
            load(&mut config, &path, Some("svctest"), "dev").unwrap();

            assert_eq!(config.listen_addr, "0.0.0.0:9000");
            assert_eq!(config.max_connections, 128);
            assert_eq!(config.read_timeout, Duration::seconds(90));
            assert_eq!(config.deployed_at, datetime!(2024-03-01 08:00:00 UTC));
            assert!(config.verbose);
            assert!(config.admin_token.is_empty());
        },
    );
}

/// Test that a missing file leaves defaults in place.
#[test]
#[serial]
fn test_load_missing_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();

    temp_env::with_vars([("SVCTEST_MAX_CONNECTIONS", None::<&str>)], || {
        let mut config = ServiceConfig::default();
        load(
            &mut config,
            temp_dir.path().join("missing.toml"),
            Some("svctest"),
            "dev",
        )
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.max_connections, 64);
    });
}

/// Test selecting a different section with the builder.
#[test]
fn test_builder_selects_environment_section() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir);

    let mut config = ServiceConfig::default();
    let report = ConfigLoader::new()
        .with_config_path(&path)
        .with_environment("prod")
        .with_env_source(MapEnv::new())
        .load(&mut config)
        .unwrap();

    assert_eq!(config.listen_addr, "0.0.0.0:443");
    assert_eq!(config.max_connections, 4096);
    assert_eq!(config.read_timeout, Duration::seconds(5));
    assert_eq!(report.source_of("addr"), Some(BindSource::File));
    assert_eq!(report.source_of("read_timeout"), Some(BindSource::Unset));
}

/// Test that a field error reports the key and the underlying failure.
#[test]
fn test_field_error_is_reported_with_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir);

    let mut config = ServiceConfig::default();
    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_environment("dev")
        .with_env_source(MapEnv::new().with_var("READ_TIMEOUT", "90"))
        .load(&mut config)
        .unwrap_err();

    assert_eq!(err.key(), Some("read_timeout"));
    assert!(matches!(
        err.value_error(),
        Some(ValueError::InvalidDuration(_))
    ));
    assert_eq!(config.listen_addr, "0.0.0.0:9000");
}

/// Test that an unreadable document is a decode error.
#[test]
fn test_invalid_toml_is_a_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "[dev]\naddr = \"unterminated\n").unwrap();

    let mut config = ServiceConfig::default();
    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_source(MapEnv::new())
        .load(&mut config)
        .unwrap_err();

    match err {
        ConfigError::Decode(DecodeError::Parse { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Test that `keys` lists external keys in declaration order.
#[test]
fn test_keys_from_downstream_record() {
    let mut config = ServiceConfig::default();
    assert_eq!(
        keys(&mut config),
        vec![
            "addr",
            "max_connections",
            "read_timeout",
            "deployed_at",
            "verbose"
        ]
    );
}
