use std::fmt;

/// A wrapper for raw field input that has not been through the sanitizer yet.
///
/// `Tainted<T>` marks text as it was typed or pasted by the user. The value
/// cannot be read back out by code outside this crate; the only way to get
/// at it is to run it through a [`Sanitizer`](crate::Sanitizer), which hands
/// back a [`Cleaned<T>`](crate::Cleaned).
///
/// # Security Properties
///
/// - Does NOT implement `Deref` or any implicit conversion traits
/// - Inner value is inaccessible outside the crate
/// - Prevents raw input from being written back into a field by accident
///
/// # Examples
///
/// ```
/// use field_sanitizer::Tainted;
///
/// let pasted = Tainted::new("<img src=x onerror=alert(1)>".to_string());
///
/// // Debug output shows it's tainted, never what it holds
/// assert_eq!(format!("{:?}", pasted), "Tainted([REDACTED])");
///
/// // But you CANNOT use the value directly:
/// // let html = format!("<p>{}</p>", pasted); // Won't compile!
/// ```
// Clone is needed: form glue keeps the raw value to compare against the cleaned one.
#[derive(Clone)]
pub struct Tainted<T> {
    // Must stay private. A public field bypasses the sanitizer entirely.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps a raw value in `Tainted`.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the raw value for sanitization.
    ///
    /// `pub(crate)` so that only sanitizer implementations inside this crate
    /// can unwrap raw input. Widening it to `pub` lets callers skip the
    /// pipeline and write unsanitized text back into a field.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

// Do NOT add Deref, AsRef, Borrow, From<T> or Into<T> here: each of them is a
// path for raw input to reach a field without sanitization.

impl<T> fmt::Debug for Tainted<T> {
    /// Always `Tainted([REDACTED])`. Raw field content must not reach logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tainted([REDACTED])")
    }
}
