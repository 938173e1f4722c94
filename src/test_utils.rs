//! Shared proptest strategies.

use proptest::prelude::*;

use crate::context::{FieldContext, FieldKind};

/// Fragments that exercise every stage: markup, entities, schemes,
/// whitespace, fullwidth forms, control characters, conjoining jamo and
/// characters outside the text charset.
const HOSTILE_FRAGMENTS: &[&str] = &[
    "<b>",
    "</b>",
    "<script>",
    "</script>",
    "<img src=x onerror=alert(1)>",
    "<!--",
    "-->",
    "<",
    ">",
    "&",
    "&lt;",
    "&gt;",
    "&amp;",
    "&#60;",
    "&#x3E;",
    "javascript:",
    "JaVaScRiPt:",
    "data:",
    "vbscript:",
    " ",
    "   ",
    "\n",
    "\t",
    "a",
    "Z",
    "9",
    "@",
    ".",
    "-",
    "_",
    ":",
    "(",
    ")",
    "!",
    "\"",
    "'",
    "=",
    "/",
    "$",
    "~",
    "é",
    "東京",
    "\u{1100}",
    "\u{1161}",
    "\u{11A8}",
    "\u{7f}",
    "\u{1}",
    "ｊ",
    "＜",
    "hello",
    "user@example.com",
];

/// Text assembled from hostile fragments.
pub fn arb_hostile_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(HOSTILE_FRAGMENTS), 0..12)
        .prop_map(|parts| parts.concat())
}

/// Text that plain-text sanitization leaves unchanged: words of letters and
/// digits separated by single spaces.
pub fn arb_clean_plain_text(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9]{1,12}", 1..=max_words.max(1))
        .prop_map(|words| words.join(" "))
}

/// An optional field context of any kind.
pub fn arb_field_context() -> impl Strategy<Value = Option<FieldContext>> {
    prop::option::of(
        prop_oneof![
            Just(FieldKind::PlainText),
            Just(FieldKind::Email),
            Just(FieldKind::MultilineText),
            Just(FieldKind::Other),
        ]
        .prop_map(FieldContext::new),
    )
}
