//! Sanitization pipeline for user-supplied form field text.
//!
//! This crate cleans what users type or paste into form fields before the
//! value is written back or submitted. It provides:
//! - **An ordered pipeline**: normalize, strip, decode, strip again, collapse
//!   whitespace, apply the field's policy, veto dangerous schemes
//! - **Field-kind policy**: email shape and charset rules, text charset rules
//! - **Never failing**: every input, however hostile, yields a value
//!
//! # Core Types
//!
//! - [`FieldSanitizer`]: the pipeline
//! - [`FieldContext`] / [`FieldKind`]: which policy applies
//! - [`FieldValue`]: text, boolean or number; only text is sanitized
//! - [`Tainted<T>`] / [`Cleaned<T>`]: raw input and pipeline output
//! - [`SanitizerConfig`]: email length cap and vetoed schemes
//! - [`FieldAttributes`]: recommended attributes per field kind
//! - [`form::FormGuard`]: applies the sanitizer on input, paste and submit
//!
//! # Examples
//!
//! ```
//! use field_sanitizer::{FieldContext, FieldSanitizer, FieldValue};
//!
//! let sanitizer = FieldSanitizer::new();
//!
//! // Markup is removed, whitespace collapsed
//! assert_eq!(
//!     sanitizer.sanitize("<b>Hello</b>\n\n  world", Some(&FieldContext::plain_text())),
//!     "Hello world",
//! );
//!
//! // Dangerous schemes discard the whole value
//! assert_eq!(sanitizer.sanitize("JavaScript:alert(1)", None), "");
//!
//! // Non-text values pass through
//! assert_eq!(
//!     sanitizer.sanitize_value(FieldValue::Bool(true), None),
//!     FieldValue::Bool(true),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cleaned;
mod config;
mod context;
mod error;
pub mod form;
mod hardening;
mod policy;
mod primitives;
mod sanitizer;
mod tainted;

#[cfg(test)]
mod test_utils;

pub use cleaned::Cleaned;
pub use config::{
    SanitizerConfig, SanitizerConfigBuilder, DEFAULT_EMAIL_MAX_LEN, DEFAULT_VETO_SCHEMES,
    MIN_EMAIL_MAX_LEN,
};
pub use context::{FieldContext, FieldKind, FieldValue, UnknownFieldKind};
pub use error::{ConfigError, ConfigErrorKind};
pub use hardening::{FieldAttributes, EMAIL_PATTERN, MULTILINE_TEXT_MAX_LEN, PLAIN_TEXT_MAX_LEN};
pub use policy::is_email_shaped;
pub use primitives::{
    AmmoniaStripper, EntityDecoder, HtmlEntityDecoder, MarkupStripper, NfkcNormalizer,
    UnicodeNormalizer,
};
pub use sanitizer::{FieldSanitizer, Sanitizer};
pub use tainted::Tainted;
