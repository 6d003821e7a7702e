//! Controlled form state for the new product form.
//!
//! All three pieces that the browser form used to couple through string names
//! (values, error messages and change handlers) now share the `FieldKey` enum.

mod field;
mod snapshot;
pub mod store;
pub mod validation;

pub use field::FieldKey;
pub use snapshot::{ErrorMap, FieldSnapshot};
pub use store::FieldStore;
pub use validation::{validate, Rule, RuleSet};

use thiserror::Error;

/// Errors raised by the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A DOM event carried a field name that the form does not know.
    #[error("unknown form field `{0}`")]
    InvalidField(String),
}
