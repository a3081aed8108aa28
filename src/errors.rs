use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access Gemini API: {0}")]
    RemoteModelError(String),

    #[error("Gemini API did not respond within {0}s")]
    Timeout(u64),
}
