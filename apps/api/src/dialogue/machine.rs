//! Dialogue state machine: one pure transition per user turn.

use serde::Serialize;

use crate::dialogue::fields::DialogueCursor;
use crate::dialogue::profile::ResumeProfile;
use crate::dialogue::prompts::{ALREADY_COMPLETE_PROMPT, COMPLETION_PROMPT};
use crate::dialogue::validation::validate;

/// The outcome of applying one user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub profile: ResumeProfile,
    pub cursor: DialogueCursor,
    pub prompt: &'static str,
    /// False when the answer was rejected or the dialogue was already complete.
    pub accepted: bool,
}

/// Applies `user_text` to the field under `cursor`.
///
/// Accepted answers are stored trimmed and move the cursor one field forward.
/// Rejected answers leave both profile and cursor untouched and return the
/// field's re-prompt. Once `Complete`, every turn is a no-op.
pub fn advance(profile: &ResumeProfile, cursor: DialogueCursor, user_text: &str) -> Transition {
    debug_assert_eq!(profile.cursor(), cursor, "cursor must track the first unset field");

    let field = match cursor {
        DialogueCursor::Complete => {
            return Transition {
                profile: profile.clone(),
                cursor,
                prompt: ALREADY_COMPLETE_PROMPT,
                accepted: false,
            };
        }
        DialogueCursor::Awaiting(field) => field,
    };

    if !validate(field, user_text) {
        return Transition {
            profile: profile.clone(),
            cursor,
            prompt: field.reprompt(),
            accepted: false,
        };
    }

    let mut profile = profile.clone();
    profile.set(field, user_text.trim().to_string());

    let cursor = field.next();
    let prompt = match cursor {
        DialogueCursor::Awaiting(next) => next.prompt(),
        DialogueCursor::Complete => COMPLETION_PROMPT,
    };

    Transition {
        profile,
        cursor,
        prompt,
        accepted: true,
    }
}
