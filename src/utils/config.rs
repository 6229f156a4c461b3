/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to `default` when it is unset,
/// blank or does not parse as `T`. Surrounding whitespace is ignored.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    let value = raw.trim();
    if value.is_empty() {
        return default;
    }
    value.parse::<T>().unwrap_or_else(|e| {
        error!("Failed to parse {}={:?}: {:?}, using default", env_var, value, e);
        default
    })
}

/// Gets an environment variable and parses it, returning None if not found, blank or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env::var(env_var).ok()?;
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<T>().ok()
}
