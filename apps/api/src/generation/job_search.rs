use std::sync::LazyLock;

use reqwest::Url;

use crate::dialogue::profile::CompletedProfile;

static JOB_SEARCH_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://www.google.com/search").expect("job search base URL must parse")
});

/// Builds a web search link for jobs matching the profile's skills and interests.
///
/// Query terms are whitespace-stripped and joined with `+`, e.g.
/// `...?q=jobs+Python+SQL+data+science`.
pub fn job_search_url(profile: &CompletedProfile) -> String {
    let terms: Vec<&str> = std::iter::once("jobs")
        .chain(
            profile
                .skill_list()
                .into_iter()
                .flat_map(str::split_whitespace),
        )
        .chain(profile.interests.split_whitespace())
        .collect();

    // form-urlencoding renders the separating spaces as `+`
    let mut url = JOB_SEARCH_BASE.clone();
    url.query_pairs_mut().append_pair("q", &terms.join(" "));
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &str, interests: &str) -> CompletedProfile {
        CompletedProfile {
            name: "Jane Doe".to_string(),
            education: "BSc".to_string(),
            skills: skills.to_string(),
            interests: interests.to_string(),
            experience: "None".to_string(),
        }
    }

    #[test]
    fn test_plus_joined_terms() {
        let url = job_search_url(&profile("Python, SQL", "data science"));
        assert_eq!(
            url,
            "https://www.google.com/search?q=jobs+Python+SQL+data+science"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        let url = job_search_url(&profile(" machine   learning ,", "  web  "));
        assert!(url.ends_with("q=jobs+machine+learning+web"));
    }

    #[test]
    fn test_special_characters_are_encoded() {
        let url = job_search_url(&profile("C++, C#", "games"));
        assert!(url.ends_with("q=jobs+C%2B%2B+C%23+games"));
    }

    #[test]
    fn test_repeated_calls_do_not_accumulate_query() {
        let p = profile("Python, SQL", "data science");
        assert_eq!(job_search_url(&p), job_search_url(&p));
        assert_eq!(job_search_url(&p).matches("q=").count(), 1);
    }
}
