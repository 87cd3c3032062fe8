use thiserror::Error;

/// Error types for calls against the dashboard backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Type alias for Result with ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
