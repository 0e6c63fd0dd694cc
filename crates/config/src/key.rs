//! External key derivation for bindable fields.
//!
//! Responsibilities:
//! - Turn a field's declared name and optional key tag into its resolved key.
//! - Build the environment variable name for a resolved key.
//!
//! Does NOT handle:
//! - Looking keys up in any source (see `loader::bind`).
//!
//! Invariants:
//! - A field tagged with `OMIT_TAG` resolves to an empty key and is never bound.
//! - Explicit tags are returned verbatim; callers own their casing.
//! - `to_snake_case` is idempotent on its own output.

use crate::constants::{ENV_SEPARATOR, KEY_WORD_SEPARATOR, OMIT_TAG};

/// Resolve the external key for a field.
///
/// An empty result means the field must be skipped.
pub fn resolve_key(name: &str, tag: Option<&str>) -> String {
    match tag {
        Some(OMIT_TAG) => String::new(),
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => to_snake_case(name),
    }
}

/// Convert an identifier into lowercase words joined by underscores.
///
/// A lowercase to uppercase transition always starts a new word. Inside a run
/// of capitals only the last capital starts a new word, and only when the
/// character after it exists and is not uppercase, so acronyms stay together.
/// A digit after a run of capitals counts as that next character:
///
/// ```
/// use shift_config::to_snake_case;
///
/// assert_eq!(to_snake_case("oneTwo"), "one_two");
/// assert_eq!(to_snake_case("OneTWOThree"), "one_two_three");
/// assert_eq!(to_snake_case("ONETWOThree"), "onetwo_three");
/// assert_eq!(to_snake_case("HTTP2Server"), "htt_p2_server");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_upper = false;

    for (i, &c) in chars.iter().enumerate() {
        let upper = c.is_uppercase();

        if i != 0 && upper {
            if !prev_upper {
                out.push(KEY_WORD_SEPARATOR);
            } else if let Some(next) = chars.get(i + 1)
                && !next.is_uppercase()
            {
                out.push(KEY_WORD_SEPARATOR);
            }
        }

        out.extend(c.to_lowercase());
        prev_upper = upper;
    }

    out
}

/// Build the environment variable name read for a resolved key.
///
/// The prefix, when present and non-empty, is joined with `_` before the
/// whole name is uppercased.
pub fn env_var_name(key: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => {
            format!("{prefix}{ENV_SEPARATOR}{key}").to_uppercase()
        }
        _ => key.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case_splits_words() {
        assert_eq!(to_snake_case("oneTwo"), "one_two");
        assert_eq!(to_snake_case("OneTwo"), "one_two");
        assert_eq!(to_snake_case("OneTWOThree"), "one_two_three");
        assert_eq!(to_snake_case("ONETWOThree"), "onetwo_three");
    }

    #[test]
    fn test_to_snake_case_keeps_trailing_acronym() {
        assert_eq!(to_snake_case("UserID"), "user_id");
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
    }

    #[test]
    fn test_to_snake_case_digit_after_acronym_splits_last_capital() {
        assert_eq!(to_snake_case("HTTP2Server"), "htt_p2_server");
        assert_eq!(to_snake_case("Field1Name"), "field1_name");
        assert_eq!(to_snake_case("OAuth2"), "o_auth2");
    }

    #[test]
    fn test_to_snake_case_leaves_snake_case_alone() {
        assert_eq!(to_snake_case("config_string"), "config_string");
        assert_eq!(to_snake_case("configint"), "configint");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_non_ascii() {
        assert_eq!(to_snake_case("ÉtatInitial"), "état_initial");
        assert_eq!(to_snake_case("안녕"), "안녕");
    }

    #[test]
    fn test_resolve_key_tags() {
        assert_eq!(resolve_key("Hello", Some("안녕")), "안녕");
        assert_eq!(resolve_key("Hello", Some("MixedCase")), "MixedCase");
        assert_eq!(resolve_key("Uint", Some("-")), "");
        assert_eq!(resolve_key("DatabaseURL", None), "database_url");
        assert_eq!(resolve_key("DatabaseURL", Some("")), "database_url");
    }

    #[test]
    fn test_env_var_name_with_and_without_prefix() {
        assert_eq!(env_var_name("config_int", None), "CONFIG_INT");
        assert_eq!(env_var_name("config_int", Some("")), "CONFIG_INT");
        assert_eq!(env_var_name("config_int", Some("app")), "APP_CONFIG_INT");
        assert_eq!(env_var_name("port", Some("MyApp")), "MYAPP_PORT");
    }
}
