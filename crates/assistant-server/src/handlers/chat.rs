//! Chat endpoint: validates the message and routes it through the
//! configured strategy.

use std::sync::Arc;

use assistant_core::{IncomingMessage, Reply};
use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::dto::ChatRequest;
use crate::error::AppError;
use crate::state::AppState;

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Reply>, AppError> {
    let message = IncomingMessage::new(&req.message, req.user_id.as_deref())?;

    info!(
        "Chat from {}: {}...",
        message.user_id(),
        message.text().get(..50).unwrap_or(message.text())
    );

    let response = state.responder.respond(&message).await?;
    Ok(Json(Reply::now(response, message.user_id())))
}
