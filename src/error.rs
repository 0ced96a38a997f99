use reqwest::StatusCode;
use thiserror::Error;

/// Message shown to the user whenever a search fails, whatever the cause.
pub const SEARCH_FAILED_MESSAGE: &str = "Error al realizar la búsqueda";

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search backend answered with status {0}")]
    Status(StatusCode),

    #[error("could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected backend response: {0}")]
    UnexpectedShape(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl FrontendError {
    /// The user never sees the underlying cause, only the fixed message.
    pub fn user_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }
}

pub type Result<T, E = FrontendError> = std::result::Result<T, E>;
