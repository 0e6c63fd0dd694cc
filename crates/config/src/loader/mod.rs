//! Configuration loader for environment variables and sectioned config files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` and the `load` entry point.
//! - Bind record fields from the environment first and the file second.
//! - Convert environment strings and decoded file values to field types.
//!
//! Does NOT handle:
//! - Decoding file formats (see `decode.rs`).
//! - Deriving keys from field names (see `key.rs`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - A field found in neither source is never modified.
//! - Binding stops at the first error.

mod bind;
mod builder;
mod env;
mod error;
mod file;

pub use bind::{BindReport, BindSource, Binding};
pub use builder::{ConfigLoader, keys, load};
pub use error::{ConfigError, ValueError};

#[cfg(test)]
mod tests;
