// Free-form chat with a hosted model, one persona per session.
// All model calls go through llm_client::ChatBackend.

pub mod guard;
pub mod handlers;
pub mod models;
pub mod prompts;
