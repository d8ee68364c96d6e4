use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::TranslationBackend;
use crate::errors::BackendError;

/// HTTP client for an NLLB-style inference server
///
/// Speaks a minimal JSON protocol: `POST {endpoint}/translate` with the
/// model id, text, and language pair, answered with the translated text.
#[derive(Debug)]
pub struct HttpBackend {
    /// Base URL of the inference server
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

/// Translation request body for the inference server
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    /// Model id to serve the request with
    model: &'a str,
    /// Text to translate
    text: &'a str,
    /// Source language code
    src: &'a str,
    /// Target language code
    tgt: &'a str,
}

/// Translation response body from the inference server
#[derive(Debug, Deserialize)]
struct InferenceResponse {
    /// Translated text
    translation: String,
}

impl HttpBackend {
    /// Create a new backend client for the given endpoint
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, BackendError> {
        let url = Url::parse(endpoint)
            .map_err(|e| BackendError::ConnectionError(format!("Invalid endpoint {}: {}", endpoint, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| BackendError::ConnectionError(e.to_string()))?;

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    async fn invoke(
        &self,
        model_id: &str,
        text: &str,
        src: &str,
        tgt: &str,
    ) -> Result<String, BackendError> {
        let url = format!("{}/translate", self.base_url);
        let body = InferenceRequest {
            model: model_id,
            text,
            src,
            tgt,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    BackendError::ConnectionError(e.to_string())
                } else {
                    BackendError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed: InferenceResponse = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;

        Ok(parsed.translation)
    }
}
