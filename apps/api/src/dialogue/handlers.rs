//! Axum route handlers for the guided resume dialogue.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::dialogue::fields::DialogueCursor;
use crate::dialogue::profile::ResumeProfile;
use crate::dialogue::session::{DialogueSession, TurnReply};
use crate::dialogue::transcript::ChatTranscript;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub cursor: DialogueCursor,
    pub prompt: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SessionStateResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub cursor: DialogueCursor,
    pub complete: bool,
    pub prompt: &'static str,
    pub profile: ResumeProfile,
    pub transcript: ChatTranscript,
}

impl From<&DialogueSession> for SessionStateResponse {
    fn from(session: &DialogueSession) -> Self {
        Self {
            session_id: session.id,
            created_at: session.created_at,
            cursor: session.cursor(),
            complete: session.cursor().is_complete(),
            prompt: session.opening_prompt(),
            profile: session.profile().clone(),
            transcript: session.transcript().clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TurnRequest {
    pub text: String,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreatedResponse>), AppError> {
    let session = DialogueSession::new();
    let response = SessionCreatedResponse {
        session_id: session.id,
        cursor: session.cursor(),
        prompt: session.opening_prompt(),
    };
    state.dialogues.insert(session.id, session).await?;
    info!(session_id = %response.session_id, "dialogue session created");
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionStateResponse>, AppError> {
    state
        .dialogues
        .read(id, |s| SessionStateResponse::from(s))
        .await
        .map(Json)
        .ok_or_else(|| AppError::session_not_found(id))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .dialogues
        .remove(id)
        .await
        .ok_or_else(|| AppError::session_not_found(id))?;
    info!(session_id = %id, "dialogue session destroyed");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/turns
///
/// Submits one user answer. Rejected answers are not errors: the response
/// carries `accepted: false` and the field's re-prompt.
pub async fn handle_submit_turn(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnReply>, AppError> {
    state
        .dialogues
        .update(id, |s| s.submit(&request.text))
        .await
        .map(Json)
        .ok_or_else(|| AppError::session_not_found(id))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionStateResponse>, AppError> {
    let response = state
        .dialogues
        .update(id, |s| {
            s.reset();
            SessionStateResponse::from(&*s)
        })
        .await
        .ok_or_else(|| AppError::session_not_found(id))?;
    info!(session_id = %id, "dialogue session reset");
    Ok(Json(response))
}
