//! Client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure outcome of a promotions request.
///
/// The [`Display`](std::fmt::Display) text is what the flash message shows.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the body's `message` field when present, else the status.
    #[error("{message}")]
    Server {
        /// Response status.
        status: StatusCode,

        /// Human readable error from the server.
        message: String,
    },

    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The list endpoint answered with something other than an array.
    #[error("expected a list of promotions")]
    NotAList,

    /// Details were deliberately discarded.
    #[error("Server error!")]
    Unspecified,
}

impl ClientError {
    /// Status code of a server-reported failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Http(error) => error.status(),
            ClientError::Decode(_) | ClientError::NotAList | ClientError::Unspecified => None,
        }
    }
}
