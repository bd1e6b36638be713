use crate::config::ApiConfig;
use gloo_net::http::Request;
use shared::{ApiErrorBody, ClassifyRequest, ClassifyResponse, ImagePayload, SchemaError};
use thiserror::Error;
use web_sys::RequestCredentials;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to encode request: {0}")]
    Encode(#[source] gloo_net::Error),
    #[error("network error: {0}")]
    Network(#[source] gloo_net::Error),
    #[error("server error: {status} - {message}")]
    Status { status: u16, message: String },
    #[error("failed to read response body: {0}")]
    Body(#[source] gloo_net::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Thin wrapper around the `POST /classify` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyClient {
    endpoint: String,
}

impl ClassifyClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            endpoint: config.classify_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request with no retry and no client-side timeout.
    pub async fn classify(&self, payload: ImagePayload) -> Result<ClassifyResponse, ClassifyError> {
        let body = ClassifyRequest::from(payload);
        let request = Request::post(&self.endpoint)
            .credentials(RequestCredentials::Omit)
            .json(&body)
            .map_err(ClassifyError::Encode)?;

        let response = request.send().await.map_err(ClassifyError::Network)?;
        let status = response.status();
        let text = response.text().await.map_err(ClassifyError::Body)?;

        if !response.ok() {
            return Err(ClassifyError::Status {
                status,
                message: status_message(&text),
            });
        }

        Ok(shared::parse_classify_reply(&text)?)
    }
}

fn status_message(body: &str) -> String {
    ApiErrorBody::extract(body).unwrap_or_else(|| body.trim().to_string())
}
