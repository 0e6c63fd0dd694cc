//! Type definitions shared by the loader.
//!
//! Responsibilities:
//! - Define field descriptors and the `Bindable` trait (`field.rs`).
//! - Define the dynamically-typed decoded file value model (`value.rs`).
//!
//! Does NOT handle:
//! - Decoding files (see `decode.rs`).
//! - Binding values to fields (see `loader` module).

mod field;
mod value;

pub use field::{Bindable, Field, FieldKind, Slot};
pub use value::{Table, Value, ValueKind};
