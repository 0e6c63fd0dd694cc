//! Field descriptors for bindable records.
//!
//! Responsibilities:
//! - Define the closed set of field types the binder can assign (`Slot`).
//! - Define `Field`, the per-field descriptor built for each bind call.
//! - Define the `Bindable` trait and the `bindable!` macro that implements it.
//!
//! Does NOT handle:
//! - Key resolution (see `key.rs`).
//! - Value conversion (see `loader::env` and `loader::file`).
//!
//! Invariants:
//! - Descriptors borrow the record mutably and live only for one bind call.
//! - Field order in `Bindable::fields` is the binding order.

use std::fmt;

use time::{Duration, OffsetDateTime};

/// The declared type of a bindable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Bool,
    Int,
    Int64,
    Uint,
    Uint64,
    Float,
    Timestamp,
    Duration,
    TextList,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "String",
            FieldKind::Bool => "bool",
            FieldKind::Int => "isize",
            FieldKind::Int64 => "i64",
            FieldKind::Uint => "usize",
            FieldKind::Uint64 => "u64",
            FieldKind::Float => "f64",
            FieldKind::Timestamp => "OffsetDateTime",
            FieldKind::Duration => "Duration",
            FieldKind::TextList => "Vec<String>",
        };
        f.write_str(name)
    }
}

/// A mutable borrow of one field, tagged with its declared type.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    Bool(&'a mut bool),
    Int(&'a mut isize),
    Int64(&'a mut i64),
    Uint(&'a mut usize),
    Uint64(&'a mut u64),
    Float(&'a mut f64),
    Timestamp(&'a mut OffsetDateTime),
    Duration(&'a mut Duration),
    TextList(&'a mut Vec<String>),
}

impl Slot<'_> {
    /// The declared type behind this slot.
    pub fn kind(&self) -> FieldKind {
        match self {
            Slot::Text(_) => FieldKind::Text,
            Slot::Bool(_) => FieldKind::Bool,
            Slot::Int(_) => FieldKind::Int,
            Slot::Int64(_) => FieldKind::Int64,
            Slot::Uint(_) => FieldKind::Uint,
            Slot::Uint64(_) => FieldKind::Uint64,
            Slot::Float(_) => FieldKind::Float,
            Slot::Timestamp(_) => FieldKind::Timestamp,
            Slot::Duration(_) => FieldKind::Duration,
            Slot::TextList(_) => FieldKind::TextList,
        }
    }
}

macro_rules! impl_slot_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Slot<'a> {
                fn from(value: &'a mut $ty) -> Self {
                    Slot::$variant(value)
                }
            }
        )*
    };
}

impl_slot_from! {
    String => Text,
    bool => Bool,
    isize => Int,
    i64 => Int64,
    usize => Uint,
    u64 => Uint64,
    f64 => Float,
    OffsetDateTime => Timestamp,
    Duration => Duration,
    Vec<String> => TextList,
}

/// Descriptor for one field of a bindable record.
#[derive(Debug)]
pub struct Field<'a> {
    /// Declared field name, used to derive the key when no tag is given.
    pub name: &'static str,
    /// Explicit key tag; `Some("-")` excludes the field.
    pub tag: Option<&'static str>,
    /// Where the bound value is written.
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, tag: Option<&'static str>, slot: impl Into<Slot<'a>>) -> Self {
        Self {
            name,
            tag,
            slot: slot.into(),
        }
    }
}

/// A record whose fields can be populated by the loader.
///
/// Usually implemented with [`bindable!`](crate::bindable); a manual
/// implementation returns one [`Field`] per bindable field, in order.
pub trait Bindable {
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Implement [`Bindable`] for a struct from a list of its fields.
///
/// A field may carry `#[key = "name"]` to override its external key, or
/// `#[key = "-"]` to never be bound.
///
/// ```
/// use shift_config::{bindable, keys};
///
/// #[derive(Default)]
/// struct Settings {
///     listen_addr: String,
///     workers: usize,
///     debug_token: String,
/// }
///
/// bindable!(Settings {
///     #[key = "addr"]
///     listen_addr,
///     workers,
///     #[key = "-"]
///     debug_token,
/// });
///
/// let mut settings = Settings::default();
/// assert_eq!(keys(&mut settings), vec!["addr", "workers"]);
/// ```
#[macro_export]
macro_rules! bindable {
    ($ty:ty { $( $(#[key = $tag:literal])? $field:ident ),* $(,)? }) => {
        impl $crate::Bindable for $ty {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            ::core::stringify!($field),
                            $crate::bindable!(@tag $($tag)?),
                            &mut self.$field,
                        )
                    ),*
                ]
            }
        }
    };
    (@tag) => {
        ::core::option::Option::None
    };
    (@tag $tag:literal) => {
        ::core::option::Option::Some($tag)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Sample {
        name: String,
        retries: usize,
        timeout: Duration,
        hosts: Vec<String>,
    }

    crate::bindable!(Sample {
        name,
        #[key = "max_retries"]
        retries,
        timeout,
        #[key = "-"]
        hosts,
    });

    #[test]
    fn test_bindable_macro_builds_descriptors_in_order() {
        let mut sample = Sample::default();
        let fields = sample.fields();

        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "retries", "timeout", "hosts"]);

        let tags: Vec<_> = fields.iter().map(|f| f.tag).collect();
        assert_eq!(tags, vec![None, Some("max_retries"), None, Some("-")]);

        let kinds: Vec<_> = fields.iter().map(|f| f.slot.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::Text,
                FieldKind::Uint,
                FieldKind::Duration,
                FieldKind::TextList
            ]
        );
    }

    #[test]
    fn test_slot_writes_through_to_record() {
        let mut sample = Sample::default();
        for field in sample.fields() {
            if let Slot::Uint(value) = field.slot {
                *value = 7;
            }
        }
        assert_eq!(sample.retries, 7);
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Int.to_string(), "isize");
        assert_eq!(FieldKind::TextList.to_string(), "Vec<String>");
    }
}
