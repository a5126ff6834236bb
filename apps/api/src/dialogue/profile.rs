use serde::Serialize;

use crate::dialogue::fields::{DialogueCursor, Field};

/// Answers collected so far. Every field starts unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeProfile {
    pub name: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<String>,
    pub experience: Option<String>,
}

impl ResumeProfile {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Education => self.education.as_deref(),
            Field::Skills => self.skills.as_deref(),
            Field::Interests => self.interests.as_deref(),
            Field::Experience => self.experience.as_deref(),
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Education => &mut self.education,
            Field::Skills => &mut self.skills,
            Field::Interests => &mut self.interests,
            Field::Experience => &mut self.experience,
        };
        *slot = Some(value);
    }

    /// The cursor this profile implies: the first unset field, or `Complete`.
    pub fn cursor(&self) -> DialogueCursor {
        Field::ALL
            .into_iter()
            .find(|f| self.get(*f).is_none())
            .map(DialogueCursor::Awaiting)
            .unwrap_or(DialogueCursor::Complete)
    }

    /// A fully populated view, or `None` while any field is still unset.
    ///
    /// Resume composition and interview generation only accept the returned
    /// `CompletedProfile`, so they can never run on a partial dialogue.
    pub fn completed(&self) -> Option<CompletedProfile> {
        Some(CompletedProfile {
            name: self.name.clone()?,
            education: self.education.clone()?,
            skills: self.skills.clone()?,
            interests: self.interests.clone()?,
            experience: self.experience.clone()?,
        })
    }
}

/// A profile whose five fields have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedProfile {
    pub name: String,
    pub education: String,
    pub skills: String,
    pub interests: String,
    pub experience: String,
}

impl CompletedProfile {
    /// Comma-split, trimmed, non-empty skill tokens in the order given.
    pub fn skill_list(&self) -> Vec<&str> {
        split_skills(&self.skills)
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Splits a free-text skills answer on commas, trimming and dropping blanks.
pub fn split_skills(skills: &str) -> Vec<&str> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
