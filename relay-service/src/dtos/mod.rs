//! Wire shapes for the HTTP API.
//!
//! Upstream failures are folded into the text fields here, with a prefix
//! that tells the client which step failed. Responses are always 200.

use crate::services::providers::ProviderError;
use crate::services::AudioChatOutcome;
use serde::{Deserialize, Serialize};

pub const HEALTH_MESSAGE: &str = "DakshAI API is running";
pub const AUDIO_NOT_PROCESSED: &str = "Could not process audio";
pub const AUDIO_FAILED: &str = "An error occurred";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            message: HEALTH_MESSAGE.to_string(),
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

impl From<Result<String, ProviderError>> for ChatResponse {
    fn from(result: Result<String, ProviderError>) -> Self {
        let response = match result {
            Ok(text) => text,
            Err(ProviderError::Rejected(message)) => format!("Error: {}", message),
            Err(other) => format!("Error: {}", other),
        };
        Self { response }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioChatResponse {
    pub transcription: String,
    pub response: String,
}

impl From<AudioChatOutcome> for AudioChatResponse {
    fn from(outcome: AudioChatOutcome) -> Self {
        match outcome {
            AudioChatOutcome::Answered {
                transcription,
                response,
            } => Self {
                transcription,
                response,
            },
            AudioChatOutcome::TranscriptionFailed(ProviderError::Rejected(message)) => Self {
                transcription: format!("Transcription Error: {}", message),
                response: AUDIO_NOT_PROCESSED.to_string(),
            },
            AudioChatOutcome::TranscriptionFailed(other) => Self {
                transcription: format!("Error: {}", other),
                response: AUDIO_FAILED.to_string(),
            },
            AudioChatOutcome::ResponseFailed {
                transcription,
                error,
            } => Self {
                transcription,
                response: format!("Response Error: {}", error),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub description: String,
}

impl From<Result<String, ProviderError>> for AnalyzeResponse {
    fn from(result: Result<String, ProviderError>) -> Self {
        let description = match result {
            Ok(text) => text,
            Err(ProviderError::Rejected(message)) => format!("API Error: {}", message),
            Err(other) => format!("Error: {}", other),
        };
        Self { description }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(msg: &str) -> ProviderError {
        ProviderError::Rejected(msg.to_string())
    }

    #[test]
    fn health_body_is_exact() {
        assert_eq!(
            serde_json::to_value(HealthResponse::default()).unwrap(),
            serde_json::json!({ "message": "DakshAI API is running", "status": "ok" })
        );
    }

    #[test]
    fn chat_failures_use_error_prefix() {
        assert_eq!(
            ChatResponse::from(Err(rejected("quota"))).response,
            "Error: quota"
        );
        let transport = ChatResponse::from(Err(ProviderError::Transport("refused".into())));
        assert_eq!(transport.response, "Error: upstream request failed: refused");
    }

    #[test]
    fn analyze_rejection_uses_api_error_prefix() {
        assert_eq!(
            AnalyzeResponse::from(Err(rejected("too big"))).description,
            "API Error: too big"
        );
        let malformed = AnalyzeResponse::from(Err(ProviderError::Malformed("x".into())));
        assert!(malformed.description.starts_with("Error: "));
    }

    #[test]
    fn transcription_rejection_maps_to_could_not_process() {
        let body = AudioChatResponse::from(AudioChatOutcome::TranscriptionFailed(rejected("nope")));
        assert_eq!(body.transcription, "Transcription Error: nope");
        assert_eq!(body.response, "Could not process audio");
    }

    #[test]
    fn transcription_transport_failure_maps_to_generic_error() {
        let body = AudioChatResponse::from(AudioChatOutcome::TranscriptionFailed(
            ProviderError::Transport("timed out".into()),
        ));
        assert_eq!(body.transcription, "Error: upstream request failed: timed out");
        assert_eq!(body.response, "An error occurred");
    }

    #[test]
    fn reply_failure_keeps_real_transcription() {
        let body = AudioChatResponse::from(AudioChatOutcome::ResponseFailed {
            transcription: "hello there".to_string(),
            error: rejected("overloaded"),
        });
        assert_eq!(body.transcription, "hello there");
        assert_eq!(body.response, "Response Error: overloaded");
    }
}
