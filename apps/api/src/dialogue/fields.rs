//! The fixed, ordered field set and the cursor that walks it.

use serde::{Deserialize, Serialize};

use crate::dialogue::prompts::{
    EDUCATION_PROMPT, EDUCATION_REPROMPT, EXPERIENCE_PROMPT, EXPERIENCE_REPROMPT, INTERESTS_PROMPT,
    INTERESTS_REPROMPT, NAME_PROMPT, NAME_REPROMPT, SKILLS_PROMPT, SKILLS_REPROMPT,
};

/// One piece of information collected by the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Education,
    Skills,
    Interests,
    Experience,
}

impl Field {
    /// Collection order. The dialogue never deviates from it.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Education,
        Field::Skills,
        Field::Interests,
        Field::Experience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Education => "education",
            Field::Skills => "skills",
            Field::Interests => "interests",
            Field::Experience => "experience",
        }
    }

    /// The cursor position after this field has been accepted.
    pub fn next(&self) -> DialogueCursor {
        match self {
            Field::Name => DialogueCursor::Awaiting(Field::Education),
            Field::Education => DialogueCursor::Awaiting(Field::Skills),
            Field::Skills => DialogueCursor::Awaiting(Field::Interests),
            Field::Interests => DialogueCursor::Awaiting(Field::Experience),
            Field::Experience => DialogueCursor::Complete,
        }
    }

    /// Question asked when the dialogue first reaches this field.
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Name => NAME_PROMPT,
            Field::Education => EDUCATION_PROMPT,
            Field::Skills => SKILLS_PROMPT,
            Field::Interests => INTERESTS_PROMPT,
            Field::Experience => EXPERIENCE_PROMPT,
        }
    }

    /// Question repeated after a rejected answer. Never equal to `prompt()`.
    pub fn reprompt(&self) -> &'static str {
        match self {
            Field::Name => NAME_REPROMPT,
            Field::Education => EDUCATION_REPROMPT,
            Field::Skills => SKILLS_REPROMPT,
            Field::Interests => INTERESTS_REPROMPT,
            Field::Experience => EXPERIENCE_REPROMPT,
        }
    }
}

/// Where the dialogue currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogueCursor {
    Awaiting(Field),
    Complete,
}

impl Default for DialogueCursor {
    fn default() -> Self {
        DialogueCursor::Awaiting(Field::Name)
    }
}

impl DialogueCursor {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueCursor::Awaiting(field) => field.as_str(),
            DialogueCursor::Complete => "complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DialogueCursor::Complete)
    }
}

impl Serialize for DialogueCursor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_fixed_order() {
        let mut cursor = DialogueCursor::default();
        let mut visited = Vec::new();
        while let DialogueCursor::Awaiting(field) = cursor {
            visited.push(field);
            cursor = field.next();
        }
        assert_eq!(visited, Field::ALL.to_vec());
        assert!(cursor.is_complete());
    }

    #[test]
    fn test_prompt_differs_from_reprompt() {
        for field in Field::ALL {
            assert_ne!(field.prompt(), field.reprompt(), "{}", field.as_str());
        }
    }

    #[test]
    fn test_cursor_serializes_as_field_name() {
        let json = serde_json::to_string(&DialogueCursor::Awaiting(Field::Skills)).unwrap();
        assert_eq!(json, r#""skills""#);
        let json = serde_json::to_string(&DialogueCursor::Complete).unwrap();
        assert_eq!(json, r#""complete""#);
    }
}
