use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Display-only, append-only record of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatTranscript {
    turns: Vec<ChatTurn>,
}

impl ChatTranscript {
    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.turns.push(ChatTurn {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut t = ChatTranscript::default();
        t.push(Speaker::User, "hi");
        t.push(Speaker::Assistant, "hello");
        assert_eq!(t.len(), 2);
        assert_eq!(t.turns()[0].speaker, Speaker::User);
        assert_eq!(t.turns()[1].text, "hello");
        assert!(t.turns()[0].timestamp <= t.turns()[1].timestamp);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut t = ChatTranscript::default();
        t.push(Speaker::Assistant, "hello");
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json[0]["speaker"], "assistant");
        assert_eq!(json[0]["text"], "hello");
    }
}
