//! Error taxonomy for backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure surfaced to the caller of any `net::api` request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 while a session token was stored; the token has been cleared.
    #[error("{0}")]
    SessionExpired(String),
    /// Non-2xx response; carries the backend `error` field or a fallback.
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for a toast: the backend text when there is one,
    /// otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::SessionExpired(message) | Self::Backend { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Expiry has already been surfaced by the client; callers skip their own
    /// failure toast.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired(_))
    }
}
