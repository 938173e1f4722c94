/// Text that has been through the full sanitization pipeline.
///
/// `Cleaned<T>` is the output side of [`Sanitizer`](crate::Sanitizer). Its
/// value contains no markup, no dangerous scheme prefix, collapsed
/// whitespace, and satisfies the charset/length rule of the field kind it
/// was cleaned for.
///
/// # Construction Invariants
///
/// There is no public constructor and no `From<T>`. Only crate code that
/// has just run the pipeline calls `new_unchecked`.
///
/// ```compile_fail
/// use field_sanitizer::Cleaned;
///
/// // This will not compile - no public constructor:
/// let cleaned = Cleaned::new("data".to_string());
/// ```
///
/// # Access
///
/// - [`AsRef::as_ref`]: borrow the cleaned value
/// - [`into_inner`](Self::into_inner): consume and extract it
///
/// ```
/// use field_sanitizer::{FieldSanitizer, Tainted};
///
/// let sanitizer = FieldSanitizer::new();
/// let cleaned = sanitizer.sanitize_tainted(Tainted::new("  hi   there ".to_string()), None);
///
/// assert_eq!(cleaned.as_str(), "hi there");
/// let value: String = cleaned.into_inner();
/// assert_eq!(value, "hi there");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned<T> {
    inner: T,
}

impl<T> Cleaned<T> {
    /// Wraps a value without running the pipeline.
    ///
    /// Callers must have sanitized `value` already. `pub(crate)` keeps
    /// arbitrary values from being passed off as cleaned.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the `Cleaned<T>` and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl Cleaned<String> {
    /// Borrows the cleaned text as `&str`.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns `true` when the pipeline reduced the value to empty text.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T> AsRef<T> for Cleaned<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
