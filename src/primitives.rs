//! Text primitives the pipeline is built from.
//!
//! Each stage that is "somebody else's problem" (Unicode normalization,
//! markup stripping, entity decoding) sits behind a small trait so that a
//! caller can swap in a different implementation. The defaults are backed by
//! `unicode-normalization`, `ammonia` and `html-escape`.
//!
//! # Invariants
//!
//! Implementations MUST:
//! - Be pure: same input, same output, no shared mutable state
//! - Never panic on any input, including malformed markup
//! - Be `Send + Sync` so one sanitizer can serve every field

use std::collections::HashSet;

use ammonia::Builder;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes text to a single Unicode normal form.
pub trait UnicodeNormalizer: Send + Sync {
    /// Returns the normalized text.
    fn normalize(&self, input: &str) -> String;
}

/// Removes every markup tag and attribute, keeping text content.
///
/// The output must contain no tags. Characters that are significant to
/// markup (`&`, `<`, `>`) may be returned in escaped entity form.
pub trait MarkupStripper: Send + Sync {
    /// Returns the text content of `input`.
    fn strip(&self, input: &str) -> String;
}

/// Decodes character entities (`&lt;`, `&#60;`, `&#x3C;`) into literal characters.
pub trait EntityDecoder: Send + Sync {
    /// Returns `input` with entities decoded.
    fn decode(&self, input: &str) -> String;
}

/// NFKC (compatibility composition) normalizer.
///
/// Folds fullwidth forms, ligatures and other compatibility characters into
/// their canonical equivalents, e.g. `ｊａｖａｓｃｒｉｐｔ` becomes `javascript`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NfkcNormalizer;

impl UnicodeNormalizer for NfkcNormalizer {
    fn normalize(&self, input: &str) -> String {
        input.nfkc().collect()
    }
}

/// Allow-nothing markup stripper backed by `ammonia`.
///
/// No tags and no attributes survive. `script` and `style` elements are
/// dropped together with their content; every other element is unwrapped to
/// its text. Comments are removed.
pub struct AmmoniaStripper {
    builder: Builder<'static>,
}

impl AmmoniaStripper {
    /// Creates a stripper with the allow-nothing policy.
    pub fn new() -> Self {
        let mut builder = Builder::empty();
        builder
            .clean_content_tags(HashSet::from(["script", "style"]))
            .strip_comments(true);
        Self { builder }
    }
}

impl Default for AmmoniaStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AmmoniaStripper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmmoniaStripper").finish_non_exhaustive()
    }
}

impl MarkupStripper for AmmoniaStripper {
    fn strip(&self, input: &str) -> String {
        self.builder.clean(input).to_string()
    }
}

/// HTML entity decoder backed by `html-escape`.
///
/// Handles named, decimal and hexadecimal references. Unknown or malformed
/// references are left as literal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntityDecoder;

impl EntityDecoder for HtmlEntityDecoder {
    fn decode(&self, input: &str) -> String {
        html_escape::decode_html_entities(input).into_owned()
    }
}
