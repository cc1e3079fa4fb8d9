use crate::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const REGISTER_PATH: &str = "/register";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::ConfigError(format!(
                "base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        Ok(Self { base_url })
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), REGISTER_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
