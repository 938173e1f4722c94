//! Contact form demonstration.
//!
//! This example walks a contact form through the guard:
//! 1. Derive each field's kind from its declared type and tag
//! 2. Print the attributes recommended for each field
//! 3. Sanitize on input and paste events
//! 4. Sanitize every field on submit and print the report
//!
//! Run with: `RUST_LOG=field_sanitizer=trace cargo run --example contact_form`

use field_sanitizer::form::{FieldEvent, FormField, FormGuard, TextField};
use field_sanitizer::{FieldContext, FieldSanitizer, SanitizerConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Contact Form Example ===\n");

    let config = match SanitizerConfig::builder().email_max_len(120).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return;
        }
    };
    let guard = FormGuard::with_sanitizer(FieldSanitizer::with_config(config));

    let mut fields = vec![
        TextField::from_descriptor("name", Some("text"), "input", ""),
        TextField::from_descriptor("email", Some("email"), "input", ""),
        TextField::from_descriptor("message", None, "textarea", ""),
        TextField::from_descriptor("website", Some("url"), "input", ""),
    ];

    // Scenario 1: Field hardening
    println!("--- Scenario 1: Recommended Attributes ---");
    for field in &fields {
        let attrs = guard.attributes_for(field);
        let rendered: Vec<String> = attrs
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value))
            .collect();
        println!("{} ({}): {}", field.name(), field.kind(), rendered.join(" "));
    }

    // Scenario 2: Typing and pasting
    println!("\n--- Scenario 2: Input and Paste Events ---");
    let edits = [
        (0, FieldEvent::Input, "  Ｇｒａｃｅ   <b>Hopper</b>"),
        (1, FieldEvent::Paste, " grace@navy.mil\n"),
        (2, FieldEvent::Paste, "&lt;script&gt;alert(1)&lt;/script&gt;Hello!\n\nCan we talk?"),
        (3, FieldEvent::Input, "JavaScript:alert(document.cookie)"),
    ];
    for (index, event, typed) in edits {
        let field = &mut fields[index];
        field.set_value(typed.to_string());
        println!("{} <- {:?}", field.name(), typed);
        let changed = guard.on_event(event, field);
        println!("  {} event, changed: {}, now: {:?}", event, changed, field.text());
    }

    // Scenario 3: Submit
    println!("\n--- Scenario 3: Submit ---");
    let report = guard.on_submit(&mut fields);
    println!(
        "fields: {}, changed: {}, emptied: {}, clean: {}",
        report.fields,
        report.changed,
        report.emptied,
        report.is_clean()
    );
    for field in &fields {
        println!("  {} = {:?}", field.name(), field.text());
    }

    // Scenario 4: Direct use without a form
    println!("\n--- Scenario 4: Direct Sanitization ---");
    let sanitizer = FieldSanitizer::new();
    for raw in ["fish & chips", "a   b\n\tc", "data:text/html,hi"] {
        println!(
            "{:?} -> {:?}",
            raw,
            sanitizer.sanitize(raw, Some(&FieldContext::other()))
        );
    }

    println!("\n=== Example Complete ===");
}
