use crate::dtos::{AnalyzeResponse, AudioChatResponse};
use crate::models::IncomingMedia;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use service_core::error::AppError;

/// Multipart field carrying the upload.
const FILE_FIELD: &str = "file";

pub async fn audio_chat(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AudioChatResponse>, AppError> {
    let audio = read_upload(multipart).await?;
    tracing::info!(filename = %audio.filename, size = audio.size(), "Received audio file");

    let outcome = state.relay.audio_chat(&audio).await;
    Ok(Json(AudioChatResponse::from(outcome)))
}

pub async fn analyze_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let video = read_upload(multipart).await?;
    tracing::info!(filename = %video.filename, size = video.size(), "Received video file");

    let result = state.relay.analyze_video(&video).await;
    Ok(Json(AnalyzeResponse::from(result)))
}

/// Pull the `file` field out of a multipart body, skipping any others.
async fn read_upload(mut multipart: Multipart) -> Result<IncomingMedia, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        return Ok(IncomingMedia::new(filename, data));
    }

    Err(AppError::Unprocessable(anyhow::anyhow!(
        "Missing multipart field '{}'",
        FILE_FIELD
    )))
}
