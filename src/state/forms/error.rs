//! Errors raised by the typed form API

use super::field::FieldName;
use thiserror::Error;

/// Misuse of the form API that the UI itself can never produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` expects a {expected} value")]
    ValueKind {
        field: FieldName,
        expected: &'static str,
    },

    #[error("country `{0}` is not offered")]
    UnknownCountry(String),

    #[error("city `{city}` is not offered for country `{country}`")]
    CityNotOffered { country: String, city: String },
}
