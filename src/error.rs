use std::fmt;

/// Error returned when a [`SanitizerConfig`](crate::SanitizerConfig) fails validation.
///
/// Sanitization itself never fails. Configuration is the only fallible
/// surface of the crate, and its errors describe the rejected setting
/// without echoing any field content.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{ConfigError, ConfigErrorKind};
///
/// let error = ConfigError::new(ConfigErrorKind::InvalidLength, "email_max_len must be at least 6");
/// assert_eq!(error.kind(), ConfigErrorKind::InvalidLength);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ConfigErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sanitizer config ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Kind of configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// A length limit is outside its allowed range.
    InvalidLength,
    /// A URI scheme in the veto list is malformed.
    InvalidScheme,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "invalid length"),
            Self::InvalidScheme => write!(f, "invalid scheme"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_creation() {
        let error = ConfigError::new(ConfigErrorKind::InvalidScheme, "scheme is empty");

        assert_eq!(error.kind(), ConfigErrorKind::InvalidScheme);
        assert_eq!(error.message(), "scheme is empty");
    }

    #[test]
    fn config_error_display() {
        let error = ConfigError::new(ConfigErrorKind::InvalidLength, "too short");

        let output = format!("{}", error);
        assert!(output.contains("invalid sanitizer config"));
        assert!(output.contains("invalid length"));
        assert!(output.contains("too short"));
    }

    #[test]
    fn error_kinds_display() {
        assert_eq!(
            format!("{}", ConfigErrorKind::InvalidLength),
            "invalid length"
        );
        assert_eq!(
            format!("{}", ConfigErrorKind::InvalidScheme),
            "invalid scheme"
        );
    }
}
