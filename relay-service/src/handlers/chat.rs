use crate::dtos::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};

pub async fn text_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    tracing::info!(message_len = request.message.len(), "Received chat message");

    let result = state.relay.chat(&request.message).await;
    Json(ChatResponse::from(result))
}
