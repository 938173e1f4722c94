//! Form integration surface.
//!
//! This module is the boundary between a UI toolkit and the sanitizer. It
//! handles:
//! - Describing a field without depending on any toolkit (`FormField`)
//! - Running the sanitizer on input, paste and submit events
//! - Writing the cleaned value back only when it differs
//!
//! # Design Principles
//!
//! 1. **No Toolkit Dependencies**: nothing here knows about a DOM, a
//!    widget set or an event loop. Toolkit glue implements [`FormField`].
//!
//! 2. **Sanitize Before Submit**: [`FormGuard::on_submit`] cleans every
//!    field before the application reads any of them.
//!
//! 3. **Explicit Context**: each field reports its own
//!    [`FieldContext`](crate::FieldContext); there is no ambient lookup.
//!
//! # Integration Flow
//!
//! ```text
//! toolkit event (input / paste / submit)
//!   ↓
//! glue maps it to FieldEvent and a &mut impl FormField
//!   ↓
//! FormGuard::on_event / on_submit
//!   ↓
//! FieldSanitizer::sanitize(value, field.context())
//!   ↓
//! write-back if the cleaned value differs
//! ```
//!
//! # Example
//!
//! ```
//! use field_sanitizer::form::{FieldEvent, FormGuard, TextField};
//! use field_sanitizer::FieldKind;
//!
//! let guard = FormGuard::new();
//! let mut name = TextField::new("name", FieldKind::PlainText, "<b>Ada</b>");
//!
//! assert!(guard.on_event(FieldEvent::Input, &mut name));
//! assert_eq!(name.text(), "Ada");
//! ```

mod field;
mod guard;

pub use field::{FormField, TextField};
pub use guard::{FieldEvent, FormGuard, SubmitReport};
