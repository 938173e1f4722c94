//! Toolkit-agnostic field abstraction.

use crate::context::{FieldContext, FieldKind};

/// A text-like form field the guard can read and write.
///
/// Toolkit integrations implement this for their own field handles. The
/// trait intentionally does NOT:
/// - Sanitize (that's `FormGuard`'s job)
/// - Decide the policy (the context does)
///
/// It only exposes the value and describes the field.
///
/// # Examples
///
/// ```
/// use field_sanitizer::form::FormField;
/// use field_sanitizer::FieldContext;
///
/// struct Widget {
///     input_type: Option<String>,
///     tag: String,
///     buffer: String,
/// }
///
/// impl FormField for Widget {
///     fn context(&self) -> FieldContext {
///         FieldContext::from_descriptor(self.input_type.as_deref(), &self.tag)
///     }
///
///     fn value(&self) -> &str {
///         &self.buffer
///     }
///
///     fn set_value(&mut self, value: String) {
///         self.buffer = value;
///     }
/// }
/// ```
pub trait FormField {
    /// Describes the field for policy selection.
    fn context(&self) -> FieldContext;

    /// Current value of the field.
    fn value(&self) -> &str;

    /// Replaces the field's value.
    fn set_value(&mut self, value: String);
}

/// An owned form field.
///
/// Useful for server-side form handling, tests and demos, and as a
/// reference implementation of [`FormField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    name: String,
    context: FieldContext,
    value: String,
}

impl TextField {
    /// Creates a field of the given kind holding `value`.
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: FieldContext::new(kind),
            value: value.into(),
        }
    }

    /// Creates a field whose kind is derived from a declared type and tag.
    pub fn from_descriptor(
        name: impl Into<String>,
        type_attr: Option<&str>,
        tag_name: &str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            context: FieldContext::from_descriptor(type_attr, tag_name),
            value: value.into(),
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field kind.
    pub fn kind(&self) -> FieldKind {
        self.context.kind()
    }

    /// Current value.
    pub fn text(&self) -> &str {
        &self.value
    }
}

impl FormField for TextField {
    fn context(&self) -> FieldContext {
        self.context
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_exposes_its_parts() {
        let field = TextField::new("email", FieldKind::Email, "a@b.cd");

        assert_eq!(field.name(), "email");
        assert_eq!(field.kind(), FieldKind::Email);
        assert_eq!(field.text(), "a@b.cd");
        assert_eq!(field.context(), FieldContext::email());
    }

    #[test]
    fn text_field_from_descriptor() {
        let field = TextField::from_descriptor("message", None, "textarea", "hi");

        assert_eq!(field.kind(), FieldKind::MultilineText);
    }

    #[test]
    fn set_value_replaces_value() {
        let mut field = TextField::new("name", FieldKind::PlainText, "old");

        field.set_value("new".to_string());

        assert_eq!(FormField::value(&field), "new");
    }
}
