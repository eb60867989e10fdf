//! Form domain layer
//!
//! Field names, value objects and the contact form holder that owns the
//! live values and the most recent error map.

mod field;
mod form_state;

pub use field::{FieldKind, FieldName, FieldValue, QueryType};
pub use form_state::{ContactForm, Form, FormState, SubmitOutcome};
