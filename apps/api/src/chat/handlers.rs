//! Axum route handlers for free-form chat.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::chat::guard::{screen_input, screen_output};
use crate::chat::models::{ChatSession, Persona};
use crate::dialogue::transcript::{ChatTranscript, Speaker};
use crate::errors::AppError;
use crate::llm_client::ChatBackend;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateChatRequest {
    #[serde(default)]
    pub persona: Persona,
}

#[derive(Debug, Serialize)]
pub struct ChatSessionResponse {
    pub chat_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub persona: Persona,
    pub transcript: ChatTranscript,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub reply: String,
    /// Guard notices for the user, empty when nothing was flagged.
    pub warnings: Vec<&'static str>,
    pub output_filtered: bool,
}

fn backend(state: &AppState) -> Result<Arc<dyn ChatBackend>, AppError> {
    state.chat_backend.clone().ok_or_else(|| {
        AppError::ServiceUnavailable("Chat is disabled: OPENAI_API_KEY is not configured".to_string())
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
pub async fn handle_create_chat(
    State(state): State<AppState>,
    Json(request): Json<CreateChatRequest>,
) -> Result<(StatusCode, Json<ChatSessionResponse>), AppError> {
    let session = ChatSession::new(request.persona);
    let response = ChatSessionResponse {
        chat_id: session.id,
        created_at: session.created_at,
        persona: session.persona,
        transcript: session.transcript.clone(),
    };
    state.chats.insert(session.id, session).await?;
    info!(chat_id = %response.chat_id, persona = ?response.persona, "chat session created");
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/chat/:id
pub async fn handle_get_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSessionResponse>, AppError> {
    state
        .chats
        .read(id, |s| ChatSessionResponse {
            chat_id: s.id,
            created_at: s.created_at,
            persona: s.persona,
            transcript: s.transcript.clone(),
        })
        .await
        .map(Json)
        .ok_or_else(|| AppError::session_not_found(id))
}

/// DELETE /api/v1/chat/:id
pub async fn handle_delete_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .chats
        .remove(id)
        .await
        .ok_or_else(|| AppError::session_not_found(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/chat/:id/messages
///
/// Guards the input (guarded personas only), sends system prompt + history +
/// message to the model, guards the output, and records both turns.
/// The session lock is not held while the model is answering.
/// Concurrent messages to one chat each see the history as it was when they
/// started, so a reply never includes an exchange that finished meanwhile.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let backend = backend(&state)?;

    let (persona, history) = state
        .chats
        .read(id, |s| (s.persona, s.history()))
        .await
        .ok_or_else(|| AppError::session_not_found(id))?;

    let (message, warnings) = if persona.guarded() {
        let screened = screen_input(text);
        (screened.message, screened.warnings)
    } else {
        (text.to_string(), Vec::new())
    };

    let reply = backend
        .complete(persona.system_prompt(), &history, &message)
        .await?;

    let (reply, output_filtered) = if persona.guarded() {
        screen_output(&reply)
    } else {
        (reply, false)
    };

    state
        .chats
        .update(id, |s| {
            s.transcript.push(Speaker::User, message);
            s.transcript.push(Speaker::Assistant, reply.clone());
        })
        .await
        .ok_or_else(|| AppError::session_not_found(id))?;

    Ok(Json(SendMessageResponse {
        reply,
        warnings,
        output_filtered,
    }))
}
