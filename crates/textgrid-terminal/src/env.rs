//! Environment variable lookup.

/// Look up an environment variable, falling back to `default` when the
/// variable is unset or not valid UTF-8.
///
/// # Example
///
/// ```
/// use textgrid_terminal::env::get_env;
///
/// assert_eq!(get_env("TEXTGRID_SURELY_UNSET", "fallback"), "fallback");
/// ```
pub fn get_env(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_returns_default() {
        assert_eq!(get_env("TEXTGRID_TEST_UNSET_VARIABLE", "nope"), "nope");
    }

    #[test]
    fn test_set_returns_value() {
        // PATH is set in any reasonable test environment.
        assert_ne!(get_env("PATH", ""), "");
    }
}
