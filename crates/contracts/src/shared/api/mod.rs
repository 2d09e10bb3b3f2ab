//! Wire shapes of the catalog REST API: the success envelope and the error
//! body with its string-or-field-map `message`.

pub mod envelope;
pub mod error_message;

pub use envelope::{ApiEnvelope, MutationAck};
pub use error_message::{ApiErrorBody, ErrorMessage, FieldErrors, TOKEN_EXPIRED_MESSAGE};
