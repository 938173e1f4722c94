//! Event handling for form fields.

use std::fmt;

use crate::hardening::FieldAttributes;
use crate::sanitizer::FieldSanitizer;

use super::FormField;

/// The field events a guard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The user edited the field.
    Input,
    /// Text was pasted; the pasted text is already in the field.
    Paste,
    /// The enclosing form is being submitted.
    Submit,
}

impl fmt::Display for FieldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Paste => write!(f, "paste"),
            Self::Submit => write!(f, "submit"),
        }
    }
}

/// Outcome of sanitizing a whole form on submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitReport {
    /// Number of fields processed.
    pub fields: usize,
    /// Fields whose value changed.
    pub changed: usize,
    /// Non-empty fields reduced to empty text (scheme veto, or nothing left).
    pub emptied: usize,
}

impl SubmitReport {
    /// Returns `true` if every field was already clean.
    pub fn is_clean(&self) -> bool {
        self.changed == 0
    }
}

/// Applies a [`FieldSanitizer`] to form fields on input, paste and submit.
///
/// # Examples
///
/// ```
/// use field_sanitizer::form::{FormGuard, TextField};
/// use field_sanitizer::FieldKind;
///
/// let guard = FormGuard::new();
/// let mut fields = vec![
///     TextField::new("name", FieldKind::PlainText, "  Ada   Lovelace "),
///     TextField::new("email", FieldKind::Email, "ada@example.org"),
///     TextField::new("site", FieldKind::Other, "javascript:alert(1)"),
/// ];
///
/// let report = guard.on_submit(&mut fields);
///
/// assert_eq!(report.fields, 3);
/// assert_eq!(report.changed, 2);
/// assert_eq!(report.emptied, 1);
/// assert_eq!(fields[0].text(), "Ada Lovelace");
/// ```
#[derive(Debug, Default)]
pub struct FormGuard {
    sanitizer: FieldSanitizer,
}

impl FormGuard {
    /// Creates a guard with the default sanitizer.
    pub fn new() -> Self {
        Self::with_sanitizer(FieldSanitizer::new())
    }

    /// Creates a guard around `sanitizer`.
    pub fn with_sanitizer(sanitizer: FieldSanitizer) -> Self {
        Self { sanitizer }
    }

    /// The sanitizer this guard applies.
    pub fn sanitizer(&self) -> &FieldSanitizer {
        &self.sanitizer
    }

    /// Sanitizes `field` in response to `event`.
    ///
    /// For input and paste the cleaned value is written back only if it
    /// differs, so an already-clean field is left untouched. Submit always
    /// writes the cleaned value. Returns whether the value changed.
    pub fn on_event<F>(&self, event: FieldEvent, field: &mut F) -> bool
    where
        F: FormField + ?Sized,
    {
        let context = field.context();
        let cleaned = self.sanitizer.sanitize(field.value(), Some(&context));
        let changed = cleaned != field.value();

        if changed {
            tracing::debug!(
                %event,
                kind = %context.kind(),
                before_len = field.value().len(),
                after_len = cleaned.len(),
                "field value rewritten"
            );
        }
        if changed || event == FieldEvent::Submit {
            field.set_value(cleaned);
        }
        changed
    }

    /// Sanitizes every field of a form before it is submitted.
    pub fn on_submit<'f, I, F>(&self, fields: I) -> SubmitReport
    where
        I: IntoIterator<Item = &'f mut F>,
        F: FormField + ?Sized + 'f,
    {
        let mut report = SubmitReport::default();
        for field in fields {
            let was_empty = field.value().is_empty();
            report.fields += 1;
            if self.on_event(FieldEvent::Submit, field) {
                report.changed += 1;
                if !was_empty && field.value().is_empty() {
                    report.emptied += 1;
                }
            }
        }

        tracing::debug!(
            fields = report.fields,
            changed = report.changed,
            emptied = report.emptied,
            "form sanitized for submit"
        );
        report
    }

    /// Recommended attributes for `field`, following this guard's config.
    pub fn attributes_for<F>(&self, field: &F) -> FieldAttributes
    where
        F: FormField + ?Sized,
    {
        FieldAttributes::for_kind_with(field.context().kind(), self.sanitizer.config())
    }
}
