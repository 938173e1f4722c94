//! Integration tests for the form guard.
//!
//! These tests walk a contact form through the event flow a UI toolkit
//! would drive: fields edited, text pasted, form submitted.

use field_sanitizer::form::{FieldEvent, FormField, FormGuard, SubmitReport, TextField};
use field_sanitizer::{FieldContext, FieldKind, FieldSanitizer, SanitizerConfig};

// A toolkit-style field that records how often it was written.
struct RecordingField {
    input_type: Option<&'static str>,
    tag: &'static str,
    buffer: String,
    writes: usize,
}

impl RecordingField {
    fn new(input_type: Option<&'static str>, tag: &'static str, value: &str) -> Self {
        Self {
            input_type,
            tag,
            buffer: value.to_string(),
            writes: 0,
        }
    }
}

impl FormField for RecordingField {
    fn context(&self) -> FieldContext {
        FieldContext::from_descriptor(self.input_type, self.tag)
    }

    fn value(&self) -> &str {
        &self.buffer
    }

    fn set_value(&mut self, value: String) {
        self.buffer = value;
        self.writes += 1;
    }
}

#[test]
fn input_events_write_back_only_when_different() {
    let guard = FormGuard::new();
    let mut field = RecordingField::new(Some("text"), "input", "Ada");

    assert!(!guard.on_event(FieldEvent::Input, &mut field));
    assert_eq!(field.writes, 0);

    field.buffer.push_str("<script>x</script>");
    assert!(guard.on_event(FieldEvent::Input, &mut field));
    assert_eq!(field.writes, 1);
    assert_eq!(field.buffer, "Ada");
}

#[test]
fn paste_into_textarea_is_cleaned() {
    let guard = FormGuard::new();
    let mut field = RecordingField::new(
        None,
        "textarea",
        "Hello,\r\n\r\n<a href=\"javascript:x()\">click</a> me ~~~",
    );

    assert!(guard.on_event(FieldEvent::Paste, &mut field));
    assert_eq!(field.buffer, "Hello, click me");
}

#[test]
fn submit_writes_every_field() {
    let guard = FormGuard::new();
    let mut fields = vec![
        RecordingField::new(Some("text"), "input", "Ada"),
        RecordingField::new(Some("email"), "input", "ada@example.org"),
    ];

    let report = guard.on_submit(&mut fields);

    assert!(report.is_clean());
    assert!(fields.iter().all(|f| f.writes == 1));
}

#[test]
fn contact_form_submit_flow() {
    let guard = FormGuard::new();
    let mut fields = vec![
        TextField::from_descriptor("name", Some("text"), "input", "  Ｇｒａｃｅ   Hopper<br>"),
        TextField::from_descriptor("email", Some("email"), "input", "grace@navy.mil "),
        TextField::from_descriptor(
            "message",
            None,
            "textarea",
            "&lt;img src=x onerror=alert(1)&gt;Hi!\n\nCan we talk?",
        ),
        TextField::from_descriptor("website", Some("url"), "input", "data:text/html,hi"),
    ];

    let report = guard.on_submit(&mut fields);

    assert_eq!(
        report,
        SubmitReport {
            fields: 4,
            changed: 4,
            emptied: 1,
        }
    );
    assert_eq!(fields[0].text(), "Grace Hopper");
    assert_eq!(fields[1].text(), "grace@navy.mil");
    assert_eq!(fields[2].text(), "Hi! Can we talk?");
    assert_eq!(fields[3].kind(), FieldKind::Other);
    assert_eq!(fields[3].text(), "");
}

#[test]
fn guard_uses_configured_sanitizer() {
    let config = SanitizerConfig::builder()
        .veto_scheme("ftp")
        .build()
        .expect("valid config");
    let guard = FormGuard::with_sanitizer(FieldSanitizer::with_config(config));
    let mut field = TextField::new("link", FieldKind::Other, "FTP://files.example");

    assert!(guard.on_event(FieldEvent::Input, &mut field));
    assert_eq!(field.text(), "");
}

#[test]
fn attributes_are_derived_from_field_context() {
    let guard = FormGuard::new();
    let textarea = RecordingField::new(None, "textarea", "");
    let email = RecordingField::new(Some("email"), "input", "");

    let pairs: Vec<_> = guard.attributes_for(&textarea).iter().collect();
    assert!(pairs.contains(&("maxlength", "2000".to_string())));
    assert!(pairs.contains(&("spellcheck", "true".to_string())));

    let pairs: Vec<_> = guard.attributes_for(&email).iter().collect();
    assert!(pairs.contains(&("autocomplete", "email".to_string())));
    assert!(pairs.contains(&("inputmode", "email".to_string())));
}
