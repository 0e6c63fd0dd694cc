//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that binds a record from the
//!   environment and one section of a config file.
//! - Provide the `load` and `keys` convenience functions.
//!
//! Does NOT handle:
//! - Per-field binding and precedence (delegated to bind.rs).
//! - File format details (delegated to the `Decoder`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - A missing config file is not an error; any other decode failure is.
//! - A missing environment section is not an error; every field falls through
//!   to the environment or keeps its value.
//! - The file is decoded at most once per `load` call.

use std::path::{Path, PathBuf};

use super::bind::{BindReport, bind};
use super::error::ConfigError;
use crate::decode::{Decoder, TomlDecoder};
use crate::environment::{EnvSource, ProcessEnv};
use crate::key::resolve_key;
use crate::types::{Bindable, Table, Value};

/// Configuration loader that binds records from environment variables and a
/// sectioned config file.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: Option<String>,
    environment: String,
    env_source: Box<dyn EnvSource>,
    decoder: Box<dyn Decoder>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader that reads the process environment and TOML files.
    ///
    /// With no config path set, only the environment is consulted.
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: None,
            environment: String::new(),
            env_source: Box::new(ProcessEnv),
            decoder: Box::new(TomlDecoder),
        }
    }

    /// Set the config file to read.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Prefix environment variable names with `PREFIX_`.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Select the top-level section of the config file to read values from.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Replace the environment variable source.
    pub fn with_env_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.env_source = Box::new(source);
        self
    }

    /// Replace the config file decoder.
    pub fn with_decoder(mut self, decoder: impl Decoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn env_prefix(&self) -> Option<&str> {
        self.env_prefix.as_deref()
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Bind `target` and report where each field's value came from.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read or decoded (`ConfigError::Decode`)
    /// - The environment's entry in the file is not a table (`ConfigError::InvalidSection`)
    /// - An environment variable is set but unreadable (`ConfigError::Env`)
    /// - A value cannot be converted to its field's type (`ConfigError::Field`)
    ///
    /// Fields bound before a failing field keep their new values.
    pub fn load<T: Bindable + ?Sized>(&self, target: &mut T) -> Result<BindReport, ConfigError> {
        let section = self.read_section()?;
        bind(
            target,
            self.env_prefix.as_deref(),
            self.env_source.as_ref(),
            &section,
        )
    }

    /// Decode the config file and take the active environment's section.
    fn read_section(&self) -> Result<Table, ConfigError> {
        let Some(path) = self.config_path.as_deref() else {
            return Ok(Table::new());
        };

        let mut document = match self.decoder.decode(path) {
            Ok(document) => document,
            Err(e) if e.is_not_found() => {
                tracing::debug!(
                    path = %path.display(),
                    "Config file not found; using environment only"
                );
                return Ok(Table::new());
            }
            Err(e) => return Err(e.into()),
        };

        match document.remove(&self.environment) {
            Some(Value::Table(section)) => Ok(section),
            Some(other) => Err(ConfigError::InvalidSection {
                environment: self.environment.clone(),
                actual: other.kind(),
            }),
            None => {
                tracing::debug!(
                    path = %path.display(),
                    environment = %self.environment,
                    "Config file has no section for environment"
                );
                Ok(Table::new())
            }
        }
    }
}

/// Load `target` from the process environment and the `environment` section
/// of the TOML file at `path`.
///
/// A missing file is not an error. See [`ConfigLoader::load`] for details.
///
/// ```no_run
/// use shift_config::{bindable, load};
///
/// #[derive(Default)]
/// struct Settings {
///     database_url: String,
///     workers: usize,
/// }
///
/// bindable!(Settings { database_url, workers });
///
/// let mut settings = Settings::default();
/// load(&mut settings, "config.toml", Some("app"), "prod")?;
/// # Ok::<(), shift_config::ConfigError>(())
/// ```
pub fn load<T: Bindable + ?Sized>(
    target: &mut T,
    path: impl AsRef<Path>,
    env_prefix: Option<&str>,
    environment: &str,
) -> Result<(), ConfigError> {
    let mut loader = ConfigLoader::new()
        .with_config_path(path.as_ref())
        .with_environment(environment);
    if let Some(prefix) = env_prefix {
        loader = loader.with_env_prefix(prefix);
    }
    loader.load(target).map(|_| ())
}

/// The non-empty resolved keys of `target`'s fields, in declaration order.
pub fn keys<T: Bindable + ?Sized>(target: &mut T) -> Vec<String> {
    target
        .fields()
        .into_iter()
        .map(|field| resolve_key(field.name, field.tag))
        .filter(|key| !key.is_empty())
        .collect()
}
