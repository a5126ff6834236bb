use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::dialogue::fields::DialogueCursor;
use crate::dialogue::machine::advance;
use crate::dialogue::profile::{CompletedProfile, ResumeProfile};
use crate::dialogue::prompts::COMPLETION_PROMPT;
use crate::dialogue::transcript::{ChatTranscript, Speaker};
use crate::generation::composer::compose;

/// One user's guided resume dialogue. Owns profile, cursor and transcript;
/// the pure transition logic lives in `machine::advance`.
#[derive(Debug, Clone)]
pub struct DialogueSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    profile: ResumeProfile,
    cursor: DialogueCursor,
    transcript: ChatTranscript,
}

/// What the caller needs to render after one turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnReply {
    pub prompt: &'static str,
    pub accepted: bool,
    pub cursor: DialogueCursor,
    pub complete: bool,
}

impl Default for DialogueSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogueSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            profile: ResumeProfile::default(),
            cursor: DialogueCursor::default(),
            transcript: ChatTranscript::default(),
        }
    }

    pub fn profile(&self) -> &ResumeProfile {
        &self.profile
    }

    pub fn cursor(&self) -> DialogueCursor {
        self.cursor
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    /// The question the user should currently be answering.
    pub fn opening_prompt(&self) -> &'static str {
        match self.cursor {
            DialogueCursor::Awaiting(field) => field.prompt(),
            DialogueCursor::Complete => COMPLETION_PROMPT,
        }
    }

    /// Records the user's turn, applies it, and records the assistant's reply.
    pub fn submit(&mut self, user_text: &str) -> TurnReply {
        self.transcript.push(Speaker::User, user_text);

        let transition = advance(&self.profile, self.cursor, user_text);
        debug!(
            session_id = %self.id,
            from = self.cursor.as_str(),
            to = transition.cursor.as_str(),
            accepted = transition.accepted,
            "dialogue turn"
        );

        self.profile = transition.profile;
        self.cursor = transition.cursor;
        self.transcript.push(Speaker::Assistant, transition.prompt);

        TurnReply {
            prompt: transition.prompt,
            accepted: transition.accepted,
            cursor: self.cursor,
            complete: self.cursor.is_complete(),
        }
    }

    /// Start over: every field unset, cursor back at `name`, transcript cleared.
    pub fn reset(&mut self) {
        self.profile = ResumeProfile::default();
        self.cursor = DialogueCursor::default();
        self.transcript.clear();
    }

    pub fn completed(&self) -> Option<CompletedProfile> {
        if !self.cursor.is_complete() {
            return None;
        }
        self.profile.completed()
    }

    /// The composed resume, regenerated on every call.
    pub fn document(&self) -> Option<String> {
        self.completed().map(|p| compose(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::fields::Field;

    const JANE: [&str; 5] = ["Jane Doe", "Diploma in IT", "Python, SQL", "data science", "None"];

    #[test]
    fn test_end_to_end_scenario() {
        let mut session = DialogueSession::new();
        let mut last = None;
        for answer in JANE {
            last = Some(session.submit(answer));
        }

        let last = last.unwrap();
        assert!(last.complete);
        assert_eq!(session.cursor(), DialogueCursor::Complete);

        let doc = session.document().expect("document available once complete");
        assert!(doc.contains("Jane Doe"));
        assert!(doc.contains("Data Analyst"));
        assert!(doc.contains("Entry-level candidate or no prior work experience."));
    }

    #[test]
    fn test_transcript_records_both_speakers() {
        let mut session = DialogueSession::new();
        session.submit("Jane");
        let turns = session.transcript().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::User);
        assert_eq!(turns[0].text, "Jane");
        assert_eq!(turns[1].text, Field::Name.reprompt());
    }

    #[test]
    fn test_reset_after_completion() {
        let mut session = DialogueSession::new();
        for answer in JANE {
            session.submit(answer);
        }
        assert!(session.completed().is_some());

        session.reset();

        assert_eq!(session.profile(), &ResumeProfile::default());
        assert_eq!(session.cursor(), DialogueCursor::Awaiting(Field::Name));
        assert!(session.transcript().is_empty());
        assert!(session.document().is_none());
        assert_eq!(session.opening_prompt(), Field::Name.prompt());
    }

    #[test]
    fn test_document_absent_before_completion() {
        let mut session = DialogueSession::new();
        session.submit("Jane Doe");
        assert!(session.document().is_none());
    }

    #[test]
    fn test_document_is_regenerated_identically() {
        let mut session = DialogueSession::new();
        for answer in JANE {
            session.submit(answer);
        }
        assert_eq!(session.document(), session.document());
    }
}
