//! Centralized constants for the shift-config crate.
//!
//! These values define the external naming contract (tags, environment
//! variable separators) shared by the key resolver and the binder.

// =============================================================================
// Field Metadata
// =============================================================================

/// Key tag that excludes a field from binding entirely.
pub const OMIT_TAG: &str = "-";

// =============================================================================
// Environment Variable Naming
// =============================================================================

/// Separator placed between the environment prefix and the resolved key.
pub const ENV_SEPARATOR: char = '_';

/// Separator inserted between words when deriving a key from a field name.
pub const KEY_WORD_SEPARATOR: char = '_';
