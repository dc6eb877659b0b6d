use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Reads and parses `name`, falling back to `default` when the variable is
/// unset, blank, or does not parse. Parse failures are logged.
pub fn var_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => parse_or(name, &raw, default),
        _ => default,
    }
}

fn parse_or<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().unwrap_or_else(|err| {
        tracing::warn!("Ignoring invalid {}={:?}: {}", name, raw, err);
        default
    })
}
