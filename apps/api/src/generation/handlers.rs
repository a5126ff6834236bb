//! Axum route handlers for the completed resume and its derived artifacts.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::dialogue::profile::CompletedProfile;
use crate::errors::AppError;
use crate::generation::composer::compose;
use crate::generation::interview;
use crate::generation::job_search::job_search_url;
use crate::generation::suggestions::suggest;
use crate::state::AppState;

pub const RESUME_FILENAME: &str = "resume.txt";

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub session_id: Uuid,
    pub document: String,
    pub suggestions: Vec<String>,
    pub interview: String,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub url: String,
}

/// Fetches the completed profile, or 404 / 409 for unknown / unfinished sessions.
async fn completed_profile(state: &AppState, id: Uuid) -> Result<CompletedProfile, AppError> {
    state
        .dialogues
        .read(id, |s| s.completed())
        .await
        .ok_or_else(|| AppError::session_not_found(id))?
        .ok_or_else(|| {
            AppError::Conflict(format!(
                "Session {id} has not finished collecting resume information"
            ))
        })
}

/// GET /api/v1/sessions/:id/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let profile = completed_profile(&state, id).await?;
    Ok(Json(ResumeResponse {
        session_id: id,
        document: compose(&profile),
        suggestions: suggest(profile.skill_list().as_slice(), &profile.interests),
        interview: interview::generate(&profile),
    }))
}

/// GET /api/v1/sessions/:id/resume/download
///
/// Plain-text attachment; the document is never rendered as HTML here.
pub async fn handle_download_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let profile = completed_profile(&state, id).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RESUME_FILENAME}\""),
            ),
        ],
        compose(&profile),
    ))
}

/// GET /api/v1/sessions/:id/job-search
pub async fn handle_job_search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let profile = completed_profile(&state, id).await?;
    Ok(Json(JobSearchResponse {
        url: job_search_url(&profile),
    }))
}
