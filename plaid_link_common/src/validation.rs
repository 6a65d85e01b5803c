use crate::errors::ConfigError;

/// **Basic input validation for a configuration value**
///
/// Checks for:
/// - An empty or whitespace-only string.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// **Requires a configuration value to be present and non-empty**
///
/// Returns the trimmed value.
///
/// # Errors
/// - Value absent or blank, `ConfigError::MissingVar`
pub fn required(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(value) if is_non_empty(&value) => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingVar(name.to_string())),
    }
}
