//! Generative model provider abstraction.
//!
//! The relay only ever needs "send these parts, give me the first text
//! back", so the trait is a single call. Gemini is the real backend; the
//! mock backs unit tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The HTTP exchange itself failed (connect, timeout, body read).
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The upstream answered with an error payload instead of candidates.
    #[error("{0}")]
    Rejected(String),

    /// The upstream answered with something we could not pull text out of.
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

/// One fragment of an upstream prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

/// Base64 media carried inline next to the text instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Encode `bytes` as standard base64 under the given mime type.
    pub fn inline(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: STANDARD.encode(bytes),
            },
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Part::Text { .. } => None,
            Part::InlineData { inline_data } => Some(&inline_data.mime_type),
        }
    }
}

/// A backend that turns a prompt into text.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Run one generation and return `candidates[0].content.parts[0].text`.
    async fn generate(&self, parts: Vec<Part>) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_part_round_trips_bytes() {
        let original: Vec<u8> = (0..=255u8).chain([0, 0, 255]).collect();
        let part = Part::inline("audio/wav", &original);

        let Part::InlineData { inline_data } = part else {
            panic!("expected inline data");
        };
        assert_eq!(inline_data.mime_type, "audio/wav");
        assert_eq!(STANDARD.decode(inline_data.data).unwrap(), original);
    }

    #[test]
    fn parts_serialize_with_snake_case_keys() {
        let parts = vec![Part::text("hi"), Part::inline("video/mp4", b"abc")];
        let json = serde_json::to_value(&parts).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                { "text": "hi" },
                { "inline_data": { "mime_type": "video/mp4", "data": "YWJj" } }
            ])
        );
    }

    #[test]
    fn rejected_displays_upstream_message_verbatim() {
        let err = ProviderError::Rejected("API key not valid".to_string());
        assert_eq!(err.to_string(), "API key not valid");
    }
}
