pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::dialogue::handlers as dialogue;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Guided resume dialogue
        .route("/api/v1/sessions", post(dialogue::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(dialogue::handle_get_session).delete(dialogue::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/turns",
            post(dialogue::handle_submit_turn),
        )
        .route(
            "/api/v1/sessions/:id/reset",
            post(dialogue::handle_reset_session),
        )
        // Completed resume
        .route(
            "/api/v1/sessions/:id/resume",
            get(generation::handle_get_resume),
        )
        .route(
            "/api/v1/sessions/:id/resume/download",
            get(generation::handle_download_resume),
        )
        .route(
            "/api/v1/sessions/:id/job-search",
            get(generation::handle_job_search),
        )
        // Free-form chat
        .route("/api/v1/chat", post(chat::handle_create_chat))
        .route(
            "/api/v1/chat/:id",
            get(chat::handle_get_chat).delete(chat::handle_delete_chat),
        )
        .route("/api/v1/chat/:id/messages", post(chat::handle_send_message))
        .with_state(state)
}
