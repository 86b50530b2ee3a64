//! Gemini provider implementation.
//!
//! Calls `models/{model}:generateContent` with the API key in the query
//! string. The body is parsed whatever the HTTP status, because Gemini
//! reports failures as `{error: {message}}` with a non-2xx code.

use super::{GenerativeProvider, Part, ProviderError};
use crate::config::GeminiSettings;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Option<Duration>,
}

impl From<&GeminiSettings> for GeminiConfig {
    fn from(settings: &GeminiSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base: settings.api_base.clone(),
            timeout: settings.timeout,
        }
    }
}

pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.api_base,
            self.config.model,
            method,
            self.config.api_key.expose_secret()
        )
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate(&self, parts: Vec<Part>) -> Result<String, ProviderError> {
        let part_count = parts.len();
        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        tracing::debug!(
            model = %self.config.model,
            part_count,
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url().to_string()))?;

        tracing::debug!(status = %status, body_len = body.len(), "Gemini API responded");

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(status = %status, error = %e, "Gemini response was not valid JSON");
            ProviderError::Malformed(format!("HTTP {}: {}", status, e))
        })?;

        parsed.into_text()
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    /// Outer `None`: key absent. Inner `None`: key present but `null`.
    #[serde(default, deserialize_with = "present_key")]
    candidates: Option<Option<Vec<Candidate>>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
}

/// Marks a field as present even when its value is `null`.
fn present_key<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl GenerateContentResponse {
    /// A missing `candidates` key means the upstream rejected the request;
    /// anything else that lacks the first text part is malformed.
    fn into_text(self) -> Result<String, ProviderError> {
        let Some(candidates) = self.candidates else {
            let message = self
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            return Err(ProviderError::Rejected(message));
        };

        let candidates = candidates
            .ok_or_else(|| ProviderError::Malformed("candidates is null".to_string()))?;

        candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                ProviderError::Malformed(
                    "missing candidates[0].content.parts[0].text".to_string(),
                )
            })
    }
}
