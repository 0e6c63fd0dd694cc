//! Typed configuration loading from environment variables and sectioned files.
//!
//! A record implements [`Bindable`] (usually through [`bindable!`]) to expose
//! its fields. Each field is bound from an environment variable if one is set,
//! otherwise from the active environment's section of a TOML file, otherwise
//! it keeps its current value.
//!
//! ```no_run
//! use shift_config::{bindable, load};
//! use time::Duration;
//!
//! #[derive(Default)]
//! struct Settings {
//!     database_url: String,
//!     request_timeout: Duration,
//!     cache: Vec<String>,
//! }
//!
//! bindable!(Settings {
//!     #[key = "db"]
//!     database_url,
//!     request_timeout,
//!     #[key = "-"]
//!     cache,
//! });
//!
//! // Reads APP_DB and APP_REQUEST_TIMEOUT, then [dev] db / request_timeout.
//! let mut settings = Settings::default();
//! load(&mut settings, "config.toml", Some("app"), "dev")?;
//! # Ok::<(), shift_config::ConfigError>(())
//! ```

pub mod bounds;
pub mod constants;
pub mod decode;
mod duration;
mod environment;
mod key;
mod loader;
pub mod types;

pub use decode::{DecodeError, Decoder, TomlDecoder};
pub use duration::{DurationError, parse_duration};
pub use environment::{EnvError, EnvSource, MapEnv, ProcessEnv};
pub use key::{env_var_name, resolve_key, to_snake_case};
pub use loader::{
    BindReport, BindSource, Binding, ConfigError, ConfigLoader, ValueError, keys, load,
};
pub use types::{Bindable, Field, FieldKind, Slot, Table, Value, ValueKind};
