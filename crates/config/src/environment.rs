//! Environment variable lookup.
//!
//! Responsibilities:
//! - Define the `EnvSource` seam the binder reads variables through.
//! - Provide `ProcessEnv` (the live process environment) and `MapEnv` (a
//!   fixed map, for tests and for callers that assemble variables themselves).
//!
//! Invariants:
//! - Lookups never write to the environment.
//! - An empty value is returned as-is; the binder treats it as unset.
//! - A value that is present but unreadable is an error, never "unset".

use std::collections::HashMap;
use std::env::VarError;

use thiserror::Error;

/// Errors reported by an [`EnvSource`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment variable {name} is not valid unicode")]
    NotUnicode { name: String },
}

/// Looks up environment variables by their uppercase name.
pub trait EnvSource {
    /// `Ok(None)` when the variable is not set.
    fn get(&self, name: &str) -> Result<Option<String>, EnvError>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Result<Option<String>, EnvError> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
                name: name.to_string(),
            }),
        }
    }
}

/// An environment backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Result<Option<String>, EnvError> {
        Ok(self.vars.get(name).cloned())
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Result<Option<String>, EnvError> {
        (**self).get(name)
    }
}
