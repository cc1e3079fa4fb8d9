use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Unknown form field: '{0}'")]
    UnknownField(String),

    #[error("Field '{field}' does not accept {kind} input")]
    InputKindMismatch { field: &'static str, kind: &'static str },

    #[error("Invalid option '{value}' for field '{field}'. Expected one of: {expected}")]
    InvalidOption {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Failed to parse server response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Carries the server's `error` payload exactly as it was stringified.
    #[error("{0}")]
    ServerRejected(String),
}
