use crate::{ClientConfig, Result, RegistrationTransport, TransportResponse};
use reqwest::header::CONTENT_TYPE;

/// Sends registration payloads to the server over HTTP.
///
/// No timeout is configured: a request resolves or fails whenever the
/// underlying connection does.
pub struct RegistrationClient {
    client: reqwest::Client,
    register_url: String,
}

impl RegistrationClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ciclista-register/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            register_url: config.register_url(),
        })
    }
}

#[async_trait::async_trait]
impl RegistrationTransport for RegistrationClient {
    async fn post_dsl(&self, payload: String) -> Result<TransportResponse> {
        tracing::debug!(
            "POST {} ({} bytes of payload)",
            self.register_url,
            payload.len()
        );

        let response = self
            .client
            .post(&self.register_url)
            .header(CONTENT_TYPE, "text/plain")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }

    fn endpoint(&self) -> &str {
        &self.register_url
    }
}
