use contracts::shared::api::{FieldErrors, TOKEN_EXPIRED_MESSAGE};

/// Fallback text when a failure carries no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Every way a service call can fail, already classified for the UI.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// The API rejected the bearer token (HTTP 401 or the expiry message).
    /// The local session has to be dropped.
    #[error("{}", TOKEN_EXPIRED_MESSAGE)]
    TokenExpired,

    /// Field-keyed validation messages
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Flat message from an error response
    #[error("{0}")]
    Api(String),

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Text suitable for a toast
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            text
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
