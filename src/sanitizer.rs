use crate::config::SanitizerConfig;
use crate::context::{FieldContext, FieldValue};
use crate::policy::{apply_field_constraint, collapse_whitespace, dangerous_scheme};
use crate::primitives::{
    AmmoniaStripper, EntityDecoder, HtmlEntityDecoder, MarkupStripper, NfkcNormalizer,
    UnicodeNormalizer,
};
use crate::{Cleaned, Tainted};

/// Upper bound on decode/strip rounds for deeply nested entity encodings.
const MAX_DECODE_ROUNDS: usize = 32;

/// Trait for turning raw field input into cleaned values.
///
/// Unlike a validator, a sanitizer never rejects input: every value comes
/// back as *some* [`Cleaned<T>`], possibly empty.
///
/// # Invariants
///
/// Implementations MUST:
/// - Return a value for every input, never panic
/// - Only call `Cleaned::new_unchecked` on output of the full pipeline
/// - Not mutate shared state
///
/// # Examples
///
/// ```
/// use field_sanitizer::{FieldContext, FieldSanitizer, Sanitizer, Tainted};
///
/// let sanitizer = FieldSanitizer::new();
/// let raw = Tainted::new("<b>Ada</b>   Lovelace".to_string());
///
/// let cleaned = Sanitizer::sanitize(&sanitizer, raw, Some(&FieldContext::plain_text()));
/// assert_eq!(cleaned.as_str(), "Ada Lovelace");
/// ```
pub trait Sanitizer<T> {
    /// Sanitizes `input` for a field described by `context`.
    fn sanitize(&self, input: Tainted<T>, context: Option<&FieldContext>) -> Cleaned<T>;
}

/// The form field sanitization pipeline.
///
/// Text passes through these stages, in this order, with no stage skipped:
///
/// 1. Unicode NFKC normalization (defeats homoglyph bypass of later filters)
/// 2. Markup stripping, pass 1 (allow-nothing)
/// 3. Entity decoding, with decoded text normalized again
/// 4. Markup stripping, pass 2 (closes the decode-then-inject bypass);
///    stages 3 and 4 repeat while they still change the text
/// 5. Whitespace collapse and trim
/// 6. Field-specific constraint, only when a context is supplied, followed
///    by NFKC again so filtering cannot leave composable sequences behind
/// 7. Dangerous-scheme veto: `javascript:`, `data:`, `vbscript:` empty the value
///
/// The strip/decode/strip order is security relevant. A single strip pass
/// lets `&lt;script&gt;` come back as live markup after decoding.
///
/// `FieldSanitizer` is immutable after construction and can be shared
/// freely between threads and event handlers.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{FieldContext, FieldSanitizer};
///
/// let sanitizer = FieldSanitizer::new();
///
/// assert_eq!(sanitizer.sanitize("a   b\n\tc", None), "a b c");
/// assert_eq!(sanitizer.sanitize("JavaScript:alert(1)", None), "");
/// assert_eq!(
///     sanitizer.sanitize("&lt;script&gt;alert(1)&lt;/script&gt;", Some(&FieldContext::other())),
///     "",
/// );
/// ```
#[derive(Debug)]
pub struct FieldSanitizer<
    N = NfkcNormalizer,
    S = AmmoniaStripper,
    D = HtmlEntityDecoder,
> {
    normalizer: N,
    stripper: S,
    decoder: D,
    config: SanitizerConfig,
}

impl FieldSanitizer {
    /// Creates a sanitizer with the default primitives and configuration.
    pub fn new() -> Self {
        Self::with_config(SanitizerConfig::default())
    }

    /// Creates a sanitizer with the default primitives and `config`.
    pub fn with_config(config: SanitizerConfig) -> Self {
        Self::with_primitives(
            NfkcNormalizer,
            AmmoniaStripper::new(),
            HtmlEntityDecoder,
            config,
        )
    }
}

impl Default for FieldSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, S, D> FieldSanitizer<N, S, D>
where
    N: UnicodeNormalizer,
    S: MarkupStripper,
    D: EntityDecoder,
{
    /// Creates a sanitizer from custom primitives.
    pub fn with_primitives(normalizer: N, stripper: S, decoder: D, config: SanitizerConfig) -> Self {
        Self {
            normalizer,
            stripper,
            decoder,
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Runs the pipeline over `raw` and returns the cleaned text.
    ///
    /// Never fails: malformed Unicode sequences, unterminated markup and
    /// oversized input all produce some value, possibly empty.
    pub fn sanitize(&self, raw: &str, context: Option<&FieldContext>) -> String {
        let kind = context.map(|c| c.kind().as_str()).unwrap_or("none");

        let normalized = self.normalizer.normalize(raw);
        tracing::trace!(stage = "normalize", len = normalized.len());

        let stripped = self.stripper.strip(&normalized);
        tracing::trace!(stage = "strip", pass = 1, len = stripped.len());

        let restripped = self.decode_and_restrip(stripped);

        let mut cleaned = collapse_whitespace(&restripped);
        tracing::trace!(stage = "whitespace", len = cleaned.len());

        if let Some(ctx) = context {
            cleaned = apply_field_constraint(&cleaned, ctx.kind(), &self.config);
            // Dropping a character can put conjoining jamo next to each other
            cleaned = self.normalizer.normalize(&cleaned);
            tracing::trace!(stage = "field_constraint", len = cleaned.len());
        }

        if let Some(scheme) = dangerous_scheme(&cleaned, &self.config) {
            tracing::warn!(
                kind,
                scheme,
                input_len = raw.len(),
                "dangerous scheme prefix, value discarded"
            );
            cleaned.clear();
        }

        tracing::debug!(
            kind,
            input_len = raw.len(),
            output_len = cleaned.len(),
            changed = cleaned != raw,
            "field value sanitized"
        );
        cleaned
    }

    /// Decodes entities and strips markup again until the text stops changing.
    ///
    /// The first round always runs. Later rounds unwrap nested encodings such
    /// as `&amp;lt;b&amp;gt;`, which decode one level at a time.
    fn decode_and_restrip(&self, mut text: String) -> String {
        for round in 1..=MAX_DECODE_ROUNDS {
            let decoded = self.normalizer.normalize(&self.decoder.decode(&text));
            tracing::trace!(stage = "decode", round, len = decoded.len());

            let restripped = self.stripper.strip(&decoded);
            tracing::trace!(stage = "strip", pass = round + 1, len = restripped.len());

            if restripped == text {
                return restripped;
            }
            text = restripped;
        }
        tracing::debug!(rounds = MAX_DECODE_ROUNDS, "decode rounds exhausted");
        text
    }

    /// Sanitizes a field value. Non-text values are returned unchanged.
    pub fn sanitize_value(&self, value: FieldValue, context: Option<&FieldContext>) -> FieldValue {
        match value {
            FieldValue::Text(text) => FieldValue::Text(self.sanitize(&text, context)),
            other => other,
        }
    }

    /// Sanitizes tainted input into a [`Cleaned`] value.
    pub fn sanitize_tainted(
        &self,
        input: Tainted<String>,
        context: Option<&FieldContext>,
    ) -> Cleaned<String> {
        let raw = input.into_inner();
        Cleaned::new_unchecked(self.sanitize(&raw, context))
    }
}

impl<N, S, D> Sanitizer<String> for FieldSanitizer<N, S, D>
where
    N: UnicodeNormalizer,
    S: MarkupStripper,
    D: EntityDecoder,
{
    fn sanitize(&self, input: Tainted<String>, context: Option<&FieldContext>) -> Cleaned<String> {
        self.sanitize_tainted(input, context)
    }
}
