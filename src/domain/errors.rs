// ============================================================================
// Configuration Errors
// Error types for building and validating formatting configuration
// ============================================================================

use std::fmt;

/// Errors that can occur while building or validating a
/// [`FormattingConfig`](super::FormattingConfig).
///
/// Masking itself never fails; these only surface from the configuration
/// helpers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// Precision text is not an integer
    InvalidPrecision(String),
    /// A separator is the empty string
    EmptySeparator,
    /// Decimal and thousand separators are identical
    AmbiguousSeparators,
    /// Serialized configuration could not be read
    Config(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrecision(text) => {
                write!(f, "invalid precision: {:?} is not an integer", text)
            }
            ConfigError::EmptySeparator => write!(f, "separators cannot be empty"),
            ConfigError::AmbiguousSeparators => write!(
                f,
                "ambiguous separators: decimal and thousand separators are identical"
            ),
            ConfigError::Config(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::InvalidPrecision("two".to_string()).to_string(),
            "invalid precision: \"two\" is not an integer"
        );
        assert_eq!(
            ConfigError::EmptySeparator.to_string(),
            "separators cannot be empty"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ConfigError::EmptySeparator, ConfigError::EmptySeparator);
        assert_ne!(ConfigError::EmptySeparator, ConfigError::AmbiguousSeparators);
    }
}
