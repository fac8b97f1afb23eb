//! Error types.
//!
//! Every failure is recoverable and ends up as a transient notice for the
//! user. Nothing here is retried.

use thiserror::Error;

/// Errors surfaced by deck operations and the backend client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// User input failed a precondition. No request was made.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The backend answered with `success: false`.
    #[error("Backend error: {0}")]
    Backend(String),

    /// The request failed or the response body could not be decoded.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The operation needs a current deck and none is set.
    #[error("No current deck")]
    NoCurrentDeck,
}

impl DeckError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_no_current_deck(&self) -> bool {
        matches!(self, Self::NoCurrentDeck)
    }

    /// Text for the notice shown to the user.
    ///
    /// Transport details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Backend(message) => message.clone(),
            Self::Transport(_) => "Request failed. Please try again.".to_string(),
            Self::NoCurrentDeck => "Please build a deck first!".to_string(),
        }
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("malformed response body: {}", err))
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for DeckError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result alias for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;
