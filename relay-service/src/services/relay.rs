//! Relay operations.
//!
//! Each operation returns a tagged outcome. Conversion to the in-band
//! error strings the HTTP clients expect happens in `dtos`.

use crate::mime::{audio_mime_from_filename, VIDEO_MIME};
use crate::models::{IncomingMedia, PersonaContext};
use crate::prompts;
use crate::services::providers::{GenerativeProvider, Part, ProviderError};
use std::sync::Arc;

/// Result of the two-step audio pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioChatOutcome {
    Answered {
        transcription: String,
        response: String,
    },
    /// Step one failed; no reply was requested.
    TranscriptionFailed(ProviderError),
    /// Step one succeeded, step two failed.
    ResponseFailed {
        transcription: String,
        error: ProviderError,
    },
}

#[derive(Clone)]
pub struct RelayService {
    provider: Arc<dyn GenerativeProvider>,
    persona: PersonaContext,
}

impl RelayService {
    pub fn new(provider: Arc<dyn GenerativeProvider>, persona: PersonaContext) -> Self {
        Self { provider, persona }
    }

    /// Answer a typed question in persona.
    pub async fn chat(&self, message: &str) -> Result<String, ProviderError> {
        let prompt = prompts::chat(self.persona.as_str(), message);
        let result = self.provider.generate(vec![Part::text(prompt)]).await;
        log_failure("chat", &result);
        result
    }

    /// Transcribe an audio question, then answer it in persona.
    pub async fn audio_chat(&self, audio: &IncomingMedia) -> AudioChatOutcome {
        let mime_type = audio_mime_from_filename(&audio.filename);
        tracing::info!(
            filename = %audio.filename,
            size = audio.size(),
            mime_type,
            "Transcribing audio"
        );

        let transcription = match self.transcribe(audio, mime_type).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(error = %error, "Transcription failed; skipping reply");
                return AudioChatOutcome::TranscriptionFailed(error);
            }
        };

        tracing::debug!(transcription_len = transcription.len(), "Transcription complete");

        match self.reply_to_transcription(&transcription).await {
            Ok(response) => AudioChatOutcome::Answered {
                transcription,
                response,
            },
            Err(error) => {
                tracing::warn!(error = %error, "Reply generation failed");
                AudioChatOutcome::ResponseFailed {
                    transcription,
                    error,
                }
            }
        }
    }

    /// Describe an uploaded video. The upload is always tagged `video/mp4`.
    pub async fn analyze_video(&self, video: &IncomingMedia) -> Result<String, ProviderError> {
        tracing::info!(
            filename = %video.filename,
            size = video.size(),
            "Describing video"
        );

        let result = self
            .provider
            .generate(vec![
                Part::text(prompts::DESCRIBE_VIDEO),
                Part::inline(VIDEO_MIME, &video.data),
            ])
            .await;
        log_failure("analyze", &result);
        result
    }

    async fn transcribe(
        &self,
        audio: &IncomingMedia,
        mime_type: &str,
    ) -> Result<String, ProviderError> {
        self.provider
            .generate(vec![
                Part::text(prompts::TRANSCRIBE),
                Part::inline(mime_type, &audio.data),
            ])
            .await
    }

    async fn reply_to_transcription(&self, transcription: &str) -> Result<String, ProviderError> {
        let prompt = prompts::voice_reply(self.persona.as_str(), transcription);
        self.provider.generate(vec![Part::text(prompt)]).await
    }
}

fn log_failure(operation: &str, result: &Result<String, ProviderError>) {
    if let Err(error) = result {
        tracing::warn!(operation, error = %error, "Upstream generation failed");
    }
}
