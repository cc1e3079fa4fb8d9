use crate::Result;
use reqwest::StatusCode;

/// Raw answer to a registration request, before any interpretation.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }
}

#[async_trait::async_trait]
pub trait RegistrationTransport: Send + Sync {
    /// Sends one DSL payload to the registration endpoint.
    async fn post_dsl(&self, payload: String) -> Result<TransportResponse>;

    fn endpoint(&self) -> &str;
}
