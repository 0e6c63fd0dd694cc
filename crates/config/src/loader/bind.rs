//! Field binding.
//!
//! Responsibilities:
//! - Walk a record's field descriptors in declaration order.
//! - Read each field from the environment first and the config section second.
//! - Record where every field's value came from.
//!
//! Does NOT handle:
//! - Decoding the file or picking the section (see `builder.rs`).
//! - Converting values (see `env.rs` and `file.rs`).
//!
//! Invariants:
//! - A non-empty environment value wins; the section is not consulted.
//! - A field present in neither source keeps its current value.
//! - The first lookup or conversion error stops binding; later fields are
//!   untouched.

use std::fmt;

use super::env::assign_from_env;
use super::error::ConfigError;
use super::file::assign_from_file;
use crate::environment::EnvSource;
use crate::key::{env_var_name, resolve_key};
use crate::types::{Bindable, Table};

/// Where a field's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindSource {
    /// Read from an environment variable.
    Environment,
    /// Read from the active section of the config file.
    File,
    /// Neither source had the key; the field kept its value.
    Unset,
    /// The field is tagged to never be bound.
    Omitted,
}

impl fmt::Display for BindSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindSource::Environment => write!(f, "environment"),
            BindSource::File => write!(f, "file"),
            BindSource::Unset => write!(f, "unset"),
            BindSource::Omitted => write!(f, "omitted"),
        }
    }
}

/// The outcome for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Declared field name.
    pub field: &'static str,
    /// Resolved key; empty for omitted fields.
    pub key: String,
    /// Environment variable consulted; empty for omitted fields.
    pub env_var: String,
    pub source: BindSource,
}

/// Per-field outcomes of a successful load, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    bindings: Vec<Binding>,
}

impl BindReport {
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Look up the outcome for a resolved key.
    pub fn get(&self, key: &str) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|b| b.source != BindSource::Omitted && b.key == key)
    }

    /// The source for a resolved key, if the record has such a field.
    pub fn source_of(&self, key: &str) -> Option<BindSource> {
        self.get(key).map(|b| b.source)
    }
}

/// Bind every eligible field of `target`.
pub(crate) fn bind<T: Bindable + ?Sized>(
    target: &mut T,
    prefix: Option<&str>,
    env: &dyn EnvSource,
    section: &Table,
) -> Result<BindReport, ConfigError> {
    let mut report = BindReport::default();

    for field in target.fields() {
        let key = resolve_key(field.name, field.tag);
        if key.is_empty() {
            tracing::trace!(field = field.name, "Field is omitted from binding");
            report.bindings.push(Binding {
                field: field.name,
                key,
                env_var: String::new(),
                source: BindSource::Omitted,
            });
            continue;
        }

        let env_var = env_var_name(&key, prefix);
        let raw = env.get(&env_var)?.filter(|v| !v.is_empty());
        let source = if let Some(raw) = raw {
            assign_from_env(&raw, field.slot).map_err(|source| ConfigError::Field {
                key: key.clone(),
                source,
            })?;
            BindSource::Environment
        } else if let Some(value) = section.get(&key) {
            assign_from_file(value, field.slot).map_err(|source| ConfigError::Field {
                key: key.clone(),
                source,
            })?;
            BindSource::File
        } else {
            BindSource::Unset
        };

        tracing::debug!(
            field = field.name,
            key = %key,
            env_var = %env_var,
            source = %source,
            "Bound configuration field"
        );
        report.bindings.push(Binding {
            field: field.name,
            key,
            env_var,
            source,
        });
    }

    Ok(report)
}
