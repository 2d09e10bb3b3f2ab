use crate::shared::service::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
}

/// Side effects page logic asks the view layer to perform.
///
/// State transitions return these instead of touching toasts, cookies or
/// the router directly, so the transitions stay plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Notify(Notification),
    Navigate(String),
    /// Drop the bearer token
    ClearSession,
}

/// Route every expired session is sent to
pub const LOGIN_ROUTE: &str = "/";

/// Commands for a failed call: logout on token expiry, one toast per
/// invalid field (first message only), otherwise a single toast.
pub fn error_commands(error: &ServiceError) -> Vec<UiCommand> {
    match error {
        ServiceError::TokenExpired => expired_session_commands(),
        ServiceError::Validation(fields) => fields
            .first_messages()
            .map(|(_, message)| UiCommand::Notify(Notification::error(message)))
            .collect(),
        ServiceError::Api(_)
        | ServiceError::Network(_)
        | ServiceError::Encode(_)
        | ServiceError::Decode(_) => {
            vec![UiCommand::Notify(Notification::error(error.user_message()))]
        }
    }
}

pub fn expired_session_commands() -> Vec<UiCommand> {
    vec![
        UiCommand::ClearSession,
        UiCommand::Navigate(LOGIN_ROUTE.to_string()),
    ]
}
