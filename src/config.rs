//! Sanitizer configuration.

use crate::error::{ConfigError, ConfigErrorKind};

/// Default cap on email field length, in characters.
pub const DEFAULT_EMAIL_MAX_LEN: usize = 254;

/// Shortest value `email_max_len` may take: `a@b.cd`.
pub const MIN_EMAIL_MAX_LEN: usize = 6;

/// Schemes vetoed when no list is configured.
pub const DEFAULT_VETO_SCHEMES: [&str; 3] = ["javascript", "data", "vbscript"];

/// Validated settings for a [`FieldSanitizer`](crate::FieldSanitizer).
///
/// `Default` gives the standard policy: emails capped at 254 characters and
/// `javascript:`, `data:` and `vbscript:` values vetoed.
///
/// # Examples
///
/// ```
/// use field_sanitizer::SanitizerConfig;
///
/// let config = SanitizerConfig::builder()
///     .email_max_len(128)
///     .veto_scheme("file")
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.email_max_len(), 128);
/// assert!(config.veto_schemes().iter().any(|s| s == "file"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizerConfig {
    email_max_len: usize,
    veto_schemes: Vec<String>,
}

impl SanitizerConfig {
    /// Starts a builder seeded with the default settings.
    pub fn builder() -> SanitizerConfigBuilder {
        SanitizerConfigBuilder::default()
    }

    /// Maximum email length in characters.
    pub fn email_max_len(&self) -> usize {
        self.email_max_len
    }

    /// Lowercased scheme names (without `:`) whose values are discarded.
    pub fn veto_schemes(&self) -> &[String] {
        &self.veto_schemes
    }
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            email_max_len: DEFAULT_EMAIL_MAX_LEN,
            veto_schemes: DEFAULT_VETO_SCHEMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Builder for [`SanitizerConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct SanitizerConfigBuilder {
    email_max_len: usize,
    veto_schemes: Vec<String>,
}

impl Default for SanitizerConfigBuilder {
    fn default() -> Self {
        let defaults = SanitizerConfig::default();
        Self {
            email_max_len: defaults.email_max_len,
            veto_schemes: defaults.veto_schemes,
        }
    }
}

impl SanitizerConfigBuilder {
    /// Sets the email length cap.
    pub fn email_max_len(mut self, len: usize) -> Self {
        self.email_max_len = len;
        self
    }

    /// Adds a scheme to the veto list. A trailing `:` is accepted and dropped.
    pub fn veto_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.veto_schemes.push(scheme.into());
        self
    }

    /// Replaces the veto list.
    pub fn veto_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.veto_schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// - [`ConfigErrorKind::InvalidLength`] if `email_max_len` is below
    ///   [`MIN_EMAIL_MAX_LEN`].
    /// - [`ConfigErrorKind::InvalidScheme`] if a scheme is empty, does not
    ///   start with an ASCII letter, or contains anything other than ASCII
    ///   alphanumerics, `+`, `-` or `.`.
    pub fn build(self) -> Result<SanitizerConfig, ConfigError> {
        if self.email_max_len < MIN_EMAIL_MAX_LEN {
            return Err(ConfigError::new(
                ConfigErrorKind::InvalidLength,
                format!("email_max_len must be at least {}", MIN_EMAIL_MAX_LEN),
            ));
        }

        let mut veto_schemes: Vec<String> = Vec::with_capacity(self.veto_schemes.len());
        for raw in &self.veto_schemes {
            let scheme = normalize_scheme(raw)?;
            if !veto_schemes.contains(&scheme) {
                veto_schemes.push(scheme);
            }
        }

        Ok(SanitizerConfig {
            email_max_len: self.email_max_len,
            veto_schemes,
        })
    }
}

fn normalize_scheme(raw: &str) -> Result<String, ConfigError> {
    let scheme = raw.trim().trim_end_matches(':').to_ascii_lowercase();

    let mut chars = scheme.chars();
    match chars.next() {
        None => Err(ConfigError::new(
            ConfigErrorKind::InvalidScheme,
            "scheme is empty",
        )),
        Some(first) if !first.is_ascii_alphabetic() => Err(ConfigError::new(
            ConfigErrorKind::InvalidScheme,
            "scheme must start with an ASCII letter",
        )),
        Some(_) if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) => {
            Err(ConfigError::new(
                ConfigErrorKind::InvalidScheme,
                "scheme may only contain ASCII letters, digits, '+', '-' or '.'",
            ))
        }
        Some(_) => Ok(scheme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_standard_policy() {
        let config = SanitizerConfig::default();

        assert_eq!(config.email_max_len(), 254);
        assert_eq!(config.veto_schemes(), &["javascript", "data", "vbscript"]);
    }

    #[test]
    fn builder_defaults_equal_default() {
        let built = SanitizerConfig::builder().build().expect("defaults are valid");

        assert_eq!(built, SanitizerConfig::default());
    }

    #[test]
    fn builder_normalizes_schemes() {
        let config = SanitizerConfig::builder()
            .veto_schemes(["JavaScript:", " FILE ", "javascript"])
            .build()
            .expect("valid schemes");

        assert_eq!(config.veto_schemes(), &["javascript", "file"]);
    }

    #[test]
    fn builder_rejects_short_email_cap() {
        let err = SanitizerConfig::builder()
            .email_max_len(5)
            .build()
            .unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::InvalidLength);
        assert!(err.message().contains('6'));
    }

    #[test]
    fn builder_accepts_minimum_email_cap() {
        let config = SanitizerConfig::builder()
            .email_max_len(MIN_EMAIL_MAX_LEN)
            .build()
            .expect("minimum is valid");

        assert_eq!(config.email_max_len(), MIN_EMAIL_MAX_LEN);
    }

    #[test]
    fn builder_rejects_empty_scheme() {
        let err = SanitizerConfig::builder().veto_scheme(":").build().unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::InvalidScheme);
    }

    #[test]
    fn builder_rejects_scheme_starting_with_digit() {
        let err = SanitizerConfig::builder().veto_scheme("1http").build().unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::InvalidScheme);
    }

    #[test]
    fn builder_rejects_scheme_with_spaces() {
        let err = SanitizerConfig::builder()
            .veto_scheme("java script")
            .build()
            .unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::InvalidScheme);
    }

    #[test]
    fn empty_veto_list_is_allowed() {
        let config = SanitizerConfig::builder()
            .veto_schemes(Vec::<String>::new())
            .build()
            .expect("empty list is valid");

        assert!(config.veto_schemes().is_empty());
    }
}
