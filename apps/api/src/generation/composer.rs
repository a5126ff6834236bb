//! Resume composer: renders a completed profile as a plain-text document.
//!
//! Output is plain data. Answers are interpolated verbatim with no escaping,
//! so any surface that renders this as HTML must escape it itself.

use crate::dialogue::profile::{split_skills, CompletedProfile};
use crate::generation::interview;
use crate::generation::suggestions::suggest;

pub const TITLE: &str = "PROFESSIONAL RESUME";
pub const SEPARATOR: &str = "----------------------------------------";
pub const NO_EXPERIENCE_LINE: &str = "Entry-level candidate or no prior work experience.";
pub const DISCLAIMER: &str = "Note: This resume was generated automatically from your answers. \
    Please review and personalise it before sending it to employers.";

/// Composes the full resume document. Pure: the same profile always yields
/// byte-identical output.
pub fn compose(profile: &CompletedProfile) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(TITLE.to_string());
    lines.push(format!("Name: {}", profile.name));
    lines.push(String::new());
    lines.push(summary_paragraph(profile));
    lines.push(String::new());

    lines.push("Education:".to_string());
    lines.push(bullet(&profile.education));
    lines.push(String::new());

    lines.push("Skills:".to_string());
    lines.extend(skills_section(&profile.skills));
    lines.push(String::new());

    lines.push("Interests:".to_string());
    lines.push(bullet(&profile.interests));
    lines.push(String::new());

    lines.push("Experience:".to_string());
    lines.push(experience_line(&profile.experience));
    lines.push(String::new());

    lines.push(SEPARATOR.to_string());
    lines.push("Career Suggestions:".to_string());
    lines.extend(suggest(profile.skill_list().as_slice(), &profile.interests));
    lines.push(SEPARATOR.to_string());

    lines.push("Interview Practice:".to_string());
    lines.push(interview::generate(profile));
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    lines.join("\n")
}

fn summary_paragraph(profile: &CompletedProfile) -> String {
    format!(
        "{} is a motivated individual with a background in {}, skilled in {}, \
         and passionate about {}.",
        profile.name, profile.education, profile.skills, profile.interests
    )
}

fn bullet(text: &str) -> String {
    format!("- {text}")
}

/// One bullet per comma-separated token, or the raw answer on a single line.
fn skills_section(skills: &str) -> Vec<String> {
    if !skills.contains(',') {
        return vec![skills.to_string()];
    }
    split_skills(skills).into_iter().map(bullet).collect()
}

fn experience_line(experience: &str) -> String {
    let trimmed = experience.trim();
    if trimmed.eq_ignore_ascii_case("none") || trimmed.chars().count() <= 2 {
        bullet(NO_EXPERIENCE_LINE)
    } else {
        bullet(experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &str, experience: &str) -> CompletedProfile {
        CompletedProfile {
            name: "Jane Doe".to_string(),
            education: "Diploma in IT".to_string(),
            skills: skills.to_string(),
            interests: "data science".to_string(),
            experience: experience.to_string(),
        }
    }

    #[test]
    fn test_compose_is_idempotent() {
        let p = profile("Python, SQL", "None");
        assert_eq!(compose(&p), compose(&p));
    }

    #[test]
    fn test_comma_skills_render_one_bullet_each_in_order() {
        let doc = compose(&profile("Python, SQL, Excel", "None"));
        let lines: Vec<&str> = doc.lines().collect();
        let start = lines.iter().position(|l| *l == "Skills:").unwrap();
        assert_eq!(&lines[start + 1..start + 4], &["- Python", "- SQL", "- Excel"]);
        assert_eq!(lines[start + 4], "");
    }

    #[test]
    fn test_skills_without_comma_render_raw_line() {
        let doc = compose(&profile("good teamwork", "None"));
        let lines: Vec<&str> = doc.lines().collect();
        let start = lines.iter().position(|l| *l == "Skills:").unwrap();
        assert_eq!(lines[start + 1], "good teamwork");
        assert_eq!(lines[start + 2], "");
    }

    #[test]
    fn test_skills_drop_empty_tokens() {
        assert_eq!(skills_section("Python,, SQL ,"), vec!["- Python", "- SQL"]);
    }

    #[test]
    fn test_skill_bullets_match_suggestion_tokens() {
        let p = profile(" Python , ,SQL,", "None");
        let bullets: Vec<String> = p.skill_list().into_iter().map(bullet).collect();
        assert_eq!(skills_section(&p.skills), bullets);
    }

    #[test]
    fn test_experience_none_and_short_are_entry_level() {
        for exp in ["None", " nOnE ", "", "ok"] {
            assert_eq!(experience_line(exp), format!("- {NO_EXPERIENCE_LINE}"), "{exp:?}");
        }
    }

    #[test]
    fn test_experience_text_rendered_verbatim() {
        let doc = compose(&profile("Python, SQL", "2 years as a lab technician"));
        assert!(doc.contains("- 2 years as a lab technician"));
        assert!(!doc.contains(NO_EXPERIENCE_LINE));
    }

    #[test]
    fn test_section_order() {
        let doc = compose(&profile("Python, SQL", "None"));
        let positions: Vec<usize> = [
            TITLE,
            "Name: Jane Doe",
            "Jane Doe is a motivated individual with a background in Diploma in IT, \
             skilled in Python, SQL, and passionate about data science.",
            "Education:",
            "Skills:",
            "Interests:",
            "Experience:",
            "Career Suggestions:",
            "Interview Practice:",
            DISCLAIMER,
        ]
        .iter()
        .map(|needle| doc.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_includes_suggestions_and_interview() {
        let doc = compose(&profile("Python, SQL", "None"));
        assert!(doc.contains("Data Analyst"));
        assert!(doc.contains("Q1:"));
        assert!(doc.contains("Q2:"));
        assert_eq!(doc.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn test_no_escaping_applied() {
        let mut p = profile("Python, SQL", "None");
        p.name = "<b>Jane</b> Doe".to_string();
        assert!(compose(&p).contains("Name: <b>Jane</b> Doe"));
    }
}
