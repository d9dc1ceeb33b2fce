//! Shared utilities for CLI commands.

/// `bounded_stack::DEFAULT_LIMIT` as a `--limit` default value.
pub(crate) const DEFAULT_LIMIT_STR: &str = "1000";

/// Parses a `--limit` value, rejecting zero before it reaches `Stack::new`.
pub(crate) fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("limit must be a positive number".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(format!("invalid limit `{}`: {}", raw, e)),
    }
}
