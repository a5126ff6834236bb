use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::prompts::{CAREER_ASSISTANT_SYSTEM, STOCK_ADVISOR_SYSTEM};
use crate::dialogue::transcript::{ChatTranscript, Speaker};
use crate::llm_client::{ChatMessage, Role};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    #[default]
    StockAdvisor,
    CareerAssistant,
}

impl Persona {
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Persona::StockAdvisor => STOCK_ADVISOR_SYSTEM,
            Persona::CareerAssistant => CAREER_ASSISTANT_SYSTEM,
        }
    }

    /// Whether input and output pass through the prompt guard.
    pub fn guarded(&self) -> bool {
        matches!(self, Persona::StockAdvisor)
    }
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub persona: Persona,
    pub created_at: DateTime<Utc>,
    pub transcript: ChatTranscript,
}

impl ChatSession {
    pub fn new(persona: Persona) -> Self {
        Self {
            id: Uuid::new_v4(),
            persona,
            created_at: Utc::now(),
            transcript: ChatTranscript::default(),
        }
    }

    /// The transcript as completion-request history.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.transcript
            .turns()
            .iter()
            .map(|turn| {
                let role = match turn.speaker {
                    Speaker::User => Role::User,
                    Speaker::Assistant => Role::Assistant,
                };
                ChatMessage::new(role, turn.text.clone())
            })
            .collect()
    }
}
