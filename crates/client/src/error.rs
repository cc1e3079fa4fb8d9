use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error(transparent)]
    Form(#[from] form::FormError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
