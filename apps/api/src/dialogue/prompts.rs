// Fixed assistant lines for the guided resume dialogue.

pub const NAME_PROMPT: &str = "Hello! I'm your career assistant. Let's build your resume together. \
    What is your full name?";
pub const NAME_REPROMPT: &str =
    "Please enter your full name (first and last name) so I can put it on your resume.";

pub const EDUCATION_PROMPT: &str = "What is your highest diploma or education background?";
pub const EDUCATION_REPROMPT: &str =
    "Please tell me a bit more about your diploma or education background.";

pub const SKILLS_PROMPT: &str =
    "What are your top 2-3 skills? Separate them with commas (e.g. Python, SQL, Excel).";
pub const SKILLS_REPROMPT: &str =
    "Please list at least two skills, separated by commas (e.g. Communication, Excel).";

pub const INTERESTS_PROMPT: &str = "What are your career interests?";
pub const INTERESTS_REPROMPT: &str =
    "Please describe your career interests in a few words (e.g. data science, web design).";

pub const EXPERIENCE_PROMPT: &str =
    "Do you have any relevant work experience? If not, just type 'None'.";
// Unreachable in practice: experience accepts any answer.
pub const EXPERIENCE_REPROMPT: &str =
    "Please describe your work experience, or type 'None' if you have none.";

/// Returned on the turn that fills the last field.
pub const COMPLETION_PROMPT: &str =
    "Thank you! I have collected all your information. Your resume is ready.";

/// Returned for any turn submitted after completion.
pub const ALREADY_COMPLETE_PROMPT: &str = "All information has been collected. \
    Download your resume or start over to build a new one.";
