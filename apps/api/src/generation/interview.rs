//! Interview practice: two fixed question/answer templates filled from the profile.

use crate::dialogue::profile::CompletedProfile;

/// Used when the skills answer yields no usable tokens.
const DEFAULT_STRENGTH: &str = "adaptability";

/// Renders the two practice questions with sample answers.
pub fn generate(profile: &CompletedProfile) -> String {
    let skills = profile.skill_list();

    let top_skills = if skills.is_empty() {
        DEFAULT_STRENGTH.to_string()
    } else {
        skills.iter().take(2).copied().collect::<Vec<_>>().join(" and ")
    };
    let key_strength = skills.first().copied().unwrap_or(DEFAULT_STRENGTH);

    format!(
        "Q1: Can you tell us about your background in {education} and why you chose it?\n\
         Sample answer: My name is {first_name}. I chose this path because I am passionate \
         about {interests}, and it has helped me build skills in {top_skills}.\n\
         \n\
         Q2: What would you say is your key strength?\n\
         Sample answer: My key strength is {key_strength}. I have developed it through my \
         studies and projects, and I am confident it will help me contribute to your team.",
        education = profile.education,
        first_name = profile.first_name(),
        interests = profile.interests,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &str) -> CompletedProfile {
        CompletedProfile {
            name: "Jane Doe".to_string(),
            education: "Diploma in IT".to_string(),
            skills: skills.to_string(),
            interests: "data science".to_string(),
            experience: "None".to_string(),
        }
    }

    #[test]
    fn test_two_pairs() {
        let text = generate(&profile("Python, SQL"));
        assert_eq!(text.matches("Q1:").count(), 1);
        assert_eq!(text.matches("Q2:").count(), 1);
        assert_eq!(text.matches("Sample answer:").count(), 2);
    }

    #[test]
    fn test_interpolates_first_name_education_interests() {
        let text = generate(&profile("Python, SQL"));
        assert!(text.contains("background in Diploma in IT"));
        assert!(text.contains("My name is Jane."));
        assert!(!text.contains("Jane Doe"));
        assert!(text.contains("passionate about data science"));
    }

    #[test]
    fn test_uses_only_first_two_skills() {
        let text = generate(&profile("Python, SQL, Excel"));
        assert!(text.contains("skills in Python and SQL."));
        assert!(!text.contains("Excel"));
        assert!(text.contains("My key strength is Python."));
    }

    #[test]
    fn test_single_skill() {
        let text = generate(&profile("good teamwork"));
        assert!(text.contains("skills in good teamwork."));
        assert!(text.contains("My key strength is good teamwork."));
    }

    #[test]
    fn test_empty_skills_fall_back_to_adaptability() {
        let text = generate(&profile(" , "));
        assert!(text.contains("My key strength is adaptability."));
    }
}
