//! Gemini HTTP client

use super::types::{ApiError, GenerateContentRequest, GenerateContentResponse};
use crate::error::LlmResult;
use crate::providers::{
    invalid_api_key, invalid_response, rate_limited, request_failed, transport_failed,
};
use crate::{GenerationRequest, GenerationResponse, TextGenerator};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};

/// Provider name used in logs and errors.
pub const PROVIDER: &str = "gemini";

/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini API client.
///
/// Holds no credential; the key is supplied per request. No local timeout
/// is applied, the call completes or fails on the service's terms.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a client against the public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (proxies, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `models/{model}:generateContent`.
    pub async fn generate_content(
        &self,
        api_key: &SecretString,
        model: &str,
        body: &GenerateContentRequest,
    ) -> LlmResult<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        tracing::debug!(url = %url, model, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| transport_failed(PROVIDER, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let retry_after_ms = parse_retry_after_ms(response.headers()).unwrap_or(0);

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| invalid_response(PROVIDER, format!("Failed to parse response: {}", e)));
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let error_msg = match serde_json::from_str::<ApiError>(&error_text) {
            Ok(api_error) => api_error.error.message,
            Err(_) => error_text,
        };

        Err(match status {
            StatusCode::TOO_MANY_REQUESTS => rate_limited(PROVIDER, retry_after_ms),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => invalid_api_key(PROVIDER, error_msg),
            _ => request_failed(PROVIDER, status.as_u16(), error_msg),
        })
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn provider_name(&self) -> &str {
        PROVIDER
    }

    async fn generate(
        &self,
        api_key: &SecretString,
        request: &GenerationRequest,
    ) -> LlmResult<GenerationResponse> {
        let body = GenerateContentRequest::from_prompt(request.prompt.clone());
        let response = self.generate_content(api_key, &request.model, &body).await?;

        if let Some(usage) = &response.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "Gemini usage"
            );
        }

        Ok(GenerationResponse {
            text: response.text(),
        })
    }
}

fn parse_retry_after_ms(headers: &reqwest::header::HeaderMap) -> Option<i64> {
    headers
        .get("retry-after")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<f64>().ok())
        .map(|seconds| (seconds * 1000.0) as i64)
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
