//! Recommended field attributes per field kind.
//!
//! These are hints for the UI layer (length limits, autocomplete, input
//! mode) that narrow what a user can type before the sanitizer ever runs.
//! They complement [`FieldSanitizer`](crate::FieldSanitizer), they do not
//! replace it.

use crate::config::SanitizerConfig;
use crate::context::FieldKind;

/// Maximum length recommended for single-line text fields.
pub const PLAIN_TEXT_MAX_LEN: usize = 100;

/// Maximum length recommended for multi-line text fields.
pub const MULTILINE_TEXT_MAX_LEN: usize = 2000;

/// Client-side email pattern, the unanchored form of the sanitizer's shape check.
pub const EMAIL_PATTERN: &str = r"[^\s@]+@[^\s@]+\.[^\s@]{2,}";

/// Attributes a field of a given kind should carry.
///
/// `None` means "leave the attribute unset".
///
/// # Examples
///
/// ```
/// use field_sanitizer::{FieldAttributes, FieldKind};
///
/// let attrs = FieldAttributes::for_kind(FieldKind::Email);
/// assert_eq!(attrs.max_length, Some(254));
/// assert_eq!(attrs.autocomplete, Some("email"));
///
/// let pairs: Vec<(&str, String)> = attrs.iter().collect();
/// assert!(pairs.contains(&("maxlength", "254".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldAttributes {
    /// `maxlength`
    pub max_length: Option<usize>,
    /// `autocomplete`
    pub autocomplete: Option<&'static str>,
    /// `spellcheck`
    pub spellcheck: Option<bool>,
    /// `inputmode`
    pub input_mode: Option<&'static str>,
    /// `pattern`
    pub pattern: Option<&'static str>,
}

impl FieldAttributes {
    /// Recommended attributes for `kind` under the default configuration.
    pub fn for_kind(kind: FieldKind) -> Self {
        Self::for_kind_with(kind, &SanitizerConfig::default())
    }

    /// Recommended attributes for `kind`; the email length follows `config`.
    pub fn for_kind_with(kind: FieldKind, config: &SanitizerConfig) -> Self {
        match kind {
            FieldKind::PlainText => Self {
                max_length: Some(PLAIN_TEXT_MAX_LEN),
                autocomplete: Some("name"),
                spellcheck: Some(false),
                input_mode: Some("text"),
                pattern: None,
            },
            FieldKind::Email => Self {
                max_length: Some(config.email_max_len()),
                autocomplete: Some("email"),
                spellcheck: None,
                input_mode: Some("email"),
                pattern: Some(EMAIL_PATTERN),
            },
            FieldKind::MultilineText => Self {
                max_length: Some(MULTILINE_TEXT_MAX_LEN),
                autocomplete: None,
                spellcheck: Some(true),
                input_mode: None,
                pattern: None,
            },
            FieldKind::Other => Self::default(),
        }
    }

    /// Yields `(attribute, value)` pairs for every attribute that is set.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        let max_length = self.max_length.map(|v| ("maxlength", v.to_string()));
        let autocomplete = self.autocomplete.map(|v| ("autocomplete", v.to_string()));
        let spellcheck = self.spellcheck.map(|v| ("spellcheck", v.to_string()));
        let input_mode = self.input_mode.map(|v| ("inputmode", v.to_string()));
        let pattern = self.pattern.map(|v| ("pattern", v.to_string()));

        [max_length, autocomplete, spellcheck, input_mode, pattern]
            .into_iter()
            .flatten()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_attributes() {
        let attrs = FieldAttributes::for_kind(FieldKind::PlainText);

        assert_eq!(attrs.max_length, Some(100));
        assert_eq!(attrs.autocomplete, Some("name"));
        assert_eq!(attrs.spellcheck, Some(false));
        assert_eq!(attrs.input_mode, Some("text"));
        assert_eq!(attrs.pattern, None);
    }

    #[test]
    fn email_attributes_follow_config() {
        let config = SanitizerConfig::builder()
            .email_max_len(120)
            .build()
            .expect("valid config");

        let attrs = FieldAttributes::for_kind_with(FieldKind::Email, &config);

        assert_eq!(attrs.max_length, Some(120));
        assert_eq!(attrs.input_mode, Some("email"));
        assert_eq!(attrs.pattern, Some(EMAIL_PATTERN));
    }

    #[test]
    fn multiline_attributes() {
        let attrs = FieldAttributes::for_kind(FieldKind::MultilineText);

        assert_eq!(attrs.max_length, Some(2000));
        assert_eq!(attrs.spellcheck, Some(true));
        assert_eq!(attrs.autocomplete, None);
    }

    #[test]
    fn other_kind_has_no_attributes() {
        assert!(FieldAttributes::for_kind(FieldKind::Other).is_empty());
    }

    #[test]
    fn iter_yields_only_set_attributes_in_order() {
        let pairs: Vec<_> = FieldAttributes::for_kind(FieldKind::PlainText).iter().collect();

        assert_eq!(
            pairs,
            vec![
                ("maxlength", "100".to_string()),
                ("autocomplete", "name".to_string()),
                ("spellcheck", "false".to_string()),
                ("inputmode", "text".to_string()),
            ]
        );
    }

    #[test]
    fn email_pattern_accepts_what_the_sanitizer_keeps() {
        let anchored = regex::Regex::new(&format!("^{}$", EMAIL_PATTERN)).expect("valid pattern");

        assert!(anchored.is_match("ada@example.org"));
        assert!(crate::policy::is_email_shaped("ada@example.org"));
        assert!(!anchored.is_match("ada@@example.org"));
    }
}
