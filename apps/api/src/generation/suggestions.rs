//! Career suggestions: a fixed keyword rule table over skills and interests.
//!
//! Rules are evaluated in declaration order, each contributing at most one
//! line. All matching is case-insensitive substring matching.

/// Upper bound on returned suggestions, regardless of how many rules match.
pub const MAX_SUGGESTIONS: usize = 3;

struct SuggestionRule {
    skill_keywords: &'static [&'static str],
    interest_keywords: &'static [&'static str],
    suggestion: &'static str,
}

const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        skill_keywords: &["data", "python"],
        interest_keywords: &["data"],
        suggestion: "1. Data Analyst - turn raw data into insights that guide business decisions.",
    },
    SuggestionRule {
        skill_keywords: &["web", "html", "javascript"],
        interest_keywords: &["web"],
        suggestion: "2. Web Developer - build and maintain websites and web applications.",
    },
    SuggestionRule {
        skill_keywords: &["network", "security"],
        interest_keywords: &["cyber"],
        suggestion: "3. IT Support / Cybersecurity Analyst - keep systems, networks and data secure.",
    },
];

/// Returned in full when no rule matches.
pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "1. Administrative Assistant - support daily office operations and coordination.",
    "2. Customer Service Representative - help customers and resolve their issues.",
    "3. Sales Associate - build client relationships and drive sales.",
];

impl SuggestionRule {
    fn matches(&self, skills: &[String], interests: &str) -> bool {
        skills
            .iter()
            .any(|s| self.skill_keywords.iter().any(|kw| s.contains(kw)))
            || self.interest_keywords.iter().any(|kw| interests.contains(kw))
    }
}

/// Suggests up to three job roles for the given skills and interests.
pub fn suggest<S: AsRef<str>>(skills: &[S], interests: &str) -> Vec<String> {
    let skills: Vec<String> = skills.iter().map(|s| s.as_ref().to_lowercase()).collect();
    let interests = interests.to_lowercase();

    let mut suggestions: Vec<String> = RULES
        .iter()
        .filter(|rule| rule.matches(&skills, &interests))
        .map(|rule| rule.suggestion.to_string())
        .collect();

    if suggestions.is_empty() {
        suggestions = FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
