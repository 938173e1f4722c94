//! Field-kind context and field values.
//!
//! The sanitizer never inspects a UI toolkit. Callers describe the field with
//! an explicit [`FieldContext`], derived at call time from whatever the
//! toolkit declares (an input `type`, an element tag, a widget class).

use std::fmt;
use std::str::FromStr;

/// The kind of field being sanitized. Selects the field-specific policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line free text (`<input type="text">`).
    PlainText,
    /// An email address (`<input type="email">`).
    Email,
    /// Multi-line free text (`<textarea>`).
    MultilineText,
    /// Anything else. No field-specific filtering is applied.
    Other,
}

impl FieldKind {
    /// Canonical name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain-text",
            Self::Email => "email",
            Self::MultilineText => "multiline-text",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldKind(String);

impl fmt::Display for UnknownFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownFieldKind {}

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    /// Parses the canonical names `plain-text`, `email`, `multiline-text`
    /// and `other` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain-text" => Ok(Self::PlainText),
            "email" => Ok(Self::Email),
            "multiline-text" => Ok(Self::MultilineText),
            "other" => Ok(Self::Other),
            _ => Err(UnknownFieldKind(s.to_string())),
        }
    }
}

/// Describes the field a value belongs to.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{FieldContext, FieldKind};
///
/// let ctx = FieldContext::from_descriptor(Some("email"), "input");
/// assert_eq!(ctx.kind(), FieldKind::Email);
///
/// let ctx = FieldContext::from_descriptor(None, "TEXTAREA");
/// assert_eq!(ctx.kind(), FieldKind::MultilineText);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldContext {
    kind: FieldKind,
}

impl FieldContext {
    /// Creates a context for the given kind.
    pub fn new(kind: FieldKind) -> Self {
        Self { kind }
    }

    /// Context for a single-line text field.
    pub fn plain_text() -> Self {
        Self::new(FieldKind::PlainText)
    }

    /// Context for an email field.
    pub fn email() -> Self {
        Self::new(FieldKind::Email)
    }

    /// Context for a multi-line text field.
    pub fn multiline_text() -> Self {
        Self::new(FieldKind::MultilineText)
    }

    /// Context for a field with no field-specific policy.
    pub fn other() -> Self {
        Self::new(FieldKind::Other)
    }

    /// Derives a context from a declared input type and element tag.
    ///
    /// The `type` attribute wins when present, otherwise the tag name is
    /// used. `text` maps to [`FieldKind::PlainText`], `email` to
    /// [`FieldKind::Email`], `textarea` (as a type or a tag) to
    /// [`FieldKind::MultilineText`], everything else to [`FieldKind::Other`].
    pub fn from_descriptor(type_attr: Option<&str>, tag_name: &str) -> Self {
        let tag = tag_name.trim().to_ascii_lowercase();
        let declared = type_attr
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| tag.clone());

        let kind = match declared.as_str() {
            "email" => FieldKind::Email,
            "text" => FieldKind::PlainText,
            "textarea" => FieldKind::MultilineText,
            _ if tag == "textarea" => FieldKind::MultilineText,
            _ => FieldKind::Other,
        };
        Self::new(kind)
    }

    /// Returns the field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

impl From<FieldKind> for FieldContext {
    fn from(kind: FieldKind) -> Self {
        Self::new(kind)
    }
}

/// A field's current value.
///
/// Only [`FieldValue::Text`] is sanitized. Checkbox booleans and numeric
/// inputs pass through [`FieldSanitizer::sanitize_value`](crate::FieldSanitizer::sanitize_value)
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Textual value.
    Text(String),
    /// Boolean value, e.g. a checkbox.
    Bool(bool),
    /// Numeric value.
    Number(f64),
}

impl FieldValue {
    /// Returns the text, if this is a textual value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
