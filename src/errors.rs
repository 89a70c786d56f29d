//! Failure types for both legs of a fetch.
//!
//! `RelayError` covers the relay talking to the upstream word service; its
//! display text is what ends up in the `details` field of the relay's error
//! body. `FetchError` covers the client talking to the relay and knows how to
//! turn itself into the message shown to the user.

use thiserror::Error;

use crate::models::RelayErrorBody;

pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("This operation was aborted: upstream did not respond within {0} ms")]
    Timeout(u64),
    #[error("{0}")]
    Unavailable(String),
    #[error("External API error: {0}")]
    BadStatus(u16),
    #[error("{0}")]
    Decode(String),
    #[error("Invalid API response format")]
    InvalidShape,
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RelayError::Decode(err.to_string())
        } else {
            RelayError::Unavailable(err.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed with status {status}")]
    RelayStatus { status: u16, body: RelayErrorBody },
    #[error("Invalid data format received")]
    InvalidFormat,
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("Request cancelled")]
    Cancelled,
}

impl FetchError {
    /// Message shown to the user. For a failed relay status this prefers the
    /// body's `error`, then `details`, then the generic status text. Empty
    /// strings count as absent.
    pub fn user_message(&self) -> String {
        let message = match self {
            FetchError::RelayStatus { body, .. } => body
                .error
                .as_deref()
                .filter(|s| !s.is_empty())
                .or_else(|| body.details.as_deref().filter(|s| !s.is_empty()))
                .map(str::to_string)
                .unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        };

        if message.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
