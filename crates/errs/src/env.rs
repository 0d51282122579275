//! Environment variable helpers used by [`crate::config::TraceConfig::from_env`].

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default.
///
/// Unset and unparsable values both fall back to `default`.
#[inline]
pub(crate) fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Get environment variable as boolean.
///
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true.
/// A set variable with any other value is false; unset returns the default.
#[inline]
pub(crate) fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Get environment variable as optional value.
#[inline]
pub(crate) fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
