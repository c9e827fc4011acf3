//! Form domain layer
//!
//! Type-safe registration form handling: field values, validation rules,
//! the country/city lookup, and the snapshot produced on submit.

mod error;
mod field;
mod form_state;
mod locations;
mod registration;
mod validation;

pub use error::FormError;
pub use field::{FieldKind, FieldName, FieldValue};
pub use form_state::{Form, FormPhase, RegistrationForm};
pub use locations::{CountryCities, CountryCityTable};
pub use registration::{details_text, result_rows, RegistrationData, Submission};
