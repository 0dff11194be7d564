//! `domain` crate — person records, the JSON envelope shared by server and
//! client, and input validation.

pub mod models;
pub mod error;
pub mod validate;
pub mod envelope;

pub use models::{AgeInput, NewPerson, Person, PersonId, PersonInput};
pub use error::ValidationError;
pub use validate::{sanitize_age_input, validate_new_person};
pub use envelope::{Envelope, ErrorDetail, ErrorEnvelope, FailureEnvelope};
