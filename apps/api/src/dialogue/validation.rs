//! Per-field acceptance rules for dialogue answers.
//!
//! Rejection is not an error: the machine simply re-asks the question.

use crate::dialogue::fields::Field;

/// Inputs that look like a greeting rather than a name.
const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Returns whether `text` is an acceptable answer for `field`.
pub fn validate(field: Field, text: &str) -> bool {
    match field {
        Field::Name => is_valid_name(text),
        Field::Education | Field::Interests => text.trim().chars().count() > 2,
        Field::Skills => text.contains(',') || text.split_whitespace().count() >= 2,
        Field::Experience => true,
    }
}

fn is_valid_name(text: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return false;
    }
    let normalized = tokens.join(" ").to_lowercase();
    !GREETINGS.contains(&normalized.as_str())
}
