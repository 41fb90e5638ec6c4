//! Error taxonomy for Codebreaker service calls

use std::fmt::Display;

/// Errors surfaced by [`crate::deps::CodebreakerService`] and the game view model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service has no game or guess with the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// The service rejected the request (HTTP 400)
    #[error("Rejected by service: {0}")]
    BadRequest(String),

    /// Any other non-success HTTP status
    #[error("Service returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Context of the failed call
        message: String,
    },

    /// Connection, timeout or payload decoding failure
    #[error("Communication error: {0}")]
    Transport(String),

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A guess failed local validation and was not sent
    #[error("Invalid guess: {0}")]
    InvalidGuess(String),

    /// The operation needs a current game
    #[error("No game in progress")]
    NoActiveGame,

    /// The service was used after shutdown
    #[error("Service has been shut down")]
    ShutDown,
}

impl ServiceError {
    /// Classify an error returned by the generated client
    ///
    /// `context` names the failed operation, e.g. `"get game abc"`.
    pub fn from_api<E>(context: &str, error: progenitor_client::Error<E>) -> Self
    where
        progenitor_client::Error<E>: Display,
    {
        if let progenitor_client::Error::InvalidRequest(reason) = &error {
            return Self::InvalidRequest(format!("{context}: {reason}"));
        }

        match error.status().map(|status| status.as_u16()) {
            Some(404) => Self::NotFound(context.to_string()),
            Some(400) => Self::BadRequest(context.to_string()),
            Some(status) => Self::Status {
                status,
                message: context.to_string(),
            },
            None => Self::Transport(format!("{context}: {error}")),
        }
    }

    /// Whether the service reported the resource as missing
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
