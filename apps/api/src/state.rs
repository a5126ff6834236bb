use std::sync::Arc;

use crate::chat::models::ChatSession;
use crate::config::Config;
use crate::dialogue::session::DialogueSession;
use crate::dialogue::store::SessionStore;
use crate::llm_client::ChatBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub dialogues: SessionStore<DialogueSession>,
    pub chats: SessionStore<ChatSession>,
    /// `None` when no API key is configured; chat endpoints then answer 503.
    pub chat_backend: Option<Arc<dyn ChatBackend>>,
}

impl AppState {
    pub fn new(config: &Config, chat_backend: Option<Arc<dyn ChatBackend>>) -> Self {
        Self {
            dialogues: SessionStore::with_limit(config.max_sessions),
            chats: SessionStore::with_limit(config.max_sessions),
            chat_backend,
        }
    }
}
