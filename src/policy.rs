//! Field-specific constraints, whitespace collapse and the scheme veto.
//!
//! These are the stages of the pipeline that run after markup is gone. They
//! are plain functions over `&str` so they can be tested stage by stage.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SanitizerConfig;
use crate::context::FieldKind;

/// Conservative email shape: local part, `@`, a domain with a dot followed
/// by at least two characters, no whitespace and no second `@`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email shape regex is valid")
});

/// Everything outside the email fallback charset.
static EMAIL_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9@._+\-]").expect("email charset regex is valid")
});

/// Everything outside letters, digits, whitespace and `. , ; : ' " ! - ( ) ? _ @`.
static TEXT_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^\p{L}\p{N}\s.,;:'"!\-()?_@]"#).expect("text charset regex is valid")
});

/// Collapses each run of Unicode whitespace to one space and trims the ends.
pub fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for word in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Returns `true` if `input` has the conservative email shape.
///
/// This is deliberately looser than RFC 5321/5322.
pub fn is_email_shaped(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
}

/// Applies the constraint for `kind`.
///
/// - `Email`: truncate to `email_max_len` characters; if the result is not
///   email-shaped, drop everything outside `[A-Za-z0-9@._+-]`.
/// - `PlainText` / `MultilineText`: drop everything that is not a letter,
///   digit, whitespace or allowed punctuation.
/// - `Other`: unchanged.
///
/// Dropping characters can leave doubled or edge spaces behind, so the
/// filtered kinds collapse whitespace again.
pub fn apply_field_constraint(input: &str, kind: FieldKind, config: &SanitizerConfig) -> String {
    match kind {
        FieldKind::Email => {
            let truncated = truncate_chars(input, config.email_max_len());
            if is_email_shaped(truncated) {
                truncated.to_string()
            } else {
                EMAIL_DISALLOWED.replace_all(truncated, "").into_owned()
            }
        }
        FieldKind::PlainText | FieldKind::MultilineText => {
            let filtered = TEXT_DISALLOWED.replace_all(input, "");
            collapse_whitespace(&filtered)
        }
        FieldKind::Other => input.to_string(),
    }
}

/// Returns the vetoed scheme `input` starts with, compared case-insensitively.
///
/// Leading control characters and whitespace are skipped first, the same
/// way a browser's URL parser skips them before reading the scheme.
pub fn dangerous_scheme<'a>(input: &str, config: &'a SanitizerConfig) -> Option<&'a str> {
    let bytes = input
        .trim_start_matches(|c: char| c.is_control() || c.is_whitespace())
        .as_bytes();
    config
        .veto_schemes()
        .iter()
        .find(|scheme| {
            let n = scheme.len();
            bytes.len() > n
                && bytes[..n].eq_ignore_ascii_case(scheme.as_bytes())
                && bytes[n] == b':'
        })
        .map(String::as_str)
}

fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}
