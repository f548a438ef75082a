use crate::SITE_DOMAIN;
use crate::records::{StoryRecord, ValidationReport};
use regex::Regex;
use url::Url;

/// Extracts the first run of digits from score text like "123 points".
///
/// Returns `None` for empty input or text with no digit run at all; a story
/// with no visible score is absent, not zero.
pub fn parse_score(text: &str) -> Option<u32> {
    let digits = Regex::new(r"\d+").expect("digit pattern is valid");
    digits.find(text).and_then(|m| m.as_str().parse().ok())
}

/// True iff the URL points away from the site's own domain.
///
/// The site's own subdomains count as internal. Root-relative paths and
/// empty input are never external. Relative references that are not
/// root-relative count as external, matching the callers' use on
/// already-absolutized links.
pub fn is_external_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().is_some_and(|host| {
            host != SITE_DOMAIN && !host.ends_with(&format!(".{}", SITE_DOMAIN))
        }),
        Err(_) => !url.starts_with('/'),
    }
}

/// Resolves a listing href to an absolute URL.
///
/// Already-absolute hrefs pass through unchanged; relative item references
/// and root-relative paths are joined onto the site base. An unresolvable
/// href is returned as-is rather than dropped.
pub fn absolutize_link(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match Url::parse(base).and_then(|base| base.join(href)) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            log::warn!("Could not resolve href {} against {}: {}", href, base, e);
            href.to_string()
        }
    }
}

/// Checks a story record's shape.
///
/// Title and link are mandatory; score and author are optional. A present
/// score is numeric and non-negative by construction (`u32`), so no score
/// rule can fail here.
pub fn validate_story(story: &StoryRecord) -> ValidationReport {
    let mut errors = Vec::new();

    if story.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
        errors.push("story is missing a title".to_string());
    }

    if story.link.as_deref().is_none_or(|l| l.trim().is_empty()) {
        errors.push("story is missing a link".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// True if two title lists differ in length or at any position.
///
/// Order-sensitive on purpose: the caller wants to know whether pagination
/// actually advanced, not whether the two pages hold disjoint sets.
pub fn title_lists_differ(a: &[String], b: &[String]) -> bool {
    a.len() != b.len() || a.iter().zip(b).any(|(left, right)| left != right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        // Plain score text
        assert_eq!(parse_score("1234 points"), Some(1234));
        assert_eq!(parse_score("1 point"), Some(1));

        // Digits embedded mid-text
        assert_eq!(parse_score("score: 42"), Some(42));

        // No digits at all
        assert_eq!(parse_score("no score yet"), None);

        // Empty input
        assert_eq!(parse_score(""), None);
    }

    #[test]
    fn test_parse_score_takes_first_digit_run() {
        assert_eq!(parse_score("12 points by user99"), Some(12));
    }

    #[test]
    fn test_is_external_url() {
        // External domain
        assert!(is_external_url("https://example.com/x"));

        // Root-relative path stays internal
        assert!(!is_external_url("/item?id=1"));

        // Own domain, absolute form
        assert!(!is_external_url("https://news.ycombinator.com/item?id=1"));

        // Subdomains of the site stay internal
        assert!(!is_external_url("https://foo.news.ycombinator.com/x"));
        assert!(is_external_url("https://notnews.ycombinator.com.evil.com/x"));

        // Empty input is not external
        assert!(!is_external_url(""));
    }

    #[test]
    fn test_absolutize_link() {
        let base = "https://news.ycombinator.com";

        // Relative item reference gets the site base
        assert_eq!(
            absolutize_link(base, "item?id=123"),
            "https://news.ycombinator.com/item?id=123"
        );

        // Root-relative path gets the origin
        assert_eq!(
            absolutize_link(base, "/newest"),
            "https://news.ycombinator.com/newest"
        );

        // Absolute hrefs pass through untouched
        assert_eq!(
            absolutize_link(base, "https://example.com/post"),
            "https://example.com/post"
        );
    }

    #[test]
    fn test_validate_story_accepts_complete_record() {
        let story = StoryRecord {
            title: Some("T".to_string()),
            link: Some("http://x".to_string()),
            score: Some(5),
            author: None,
        };
        let report = validate_story(&story);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_validate_story_rejects_blank_title() {
        let story = StoryRecord {
            title: Some("".to_string()),
            link: Some("http://x".to_string()),
            score: None,
            author: None,
        };
        let report = validate_story(&story);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("title")));
    }

    #[test]
    fn test_validate_story_rejects_missing_link() {
        let story = StoryRecord {
            title: Some("T".to_string()),
            ..StoryRecord::default()
        };
        let report = validate_story(&story);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["story is missing a link".to_string()]);
    }

    #[test]
    fn test_validate_story_absent_score_is_fine() {
        let story = StoryRecord {
            title: Some("T".to_string()),
            link: Some("http://x".to_string()),
            score: None,
            author: Some("pg".to_string()),
        };
        assert!(validate_story(&story).is_valid);
    }

    #[test]
    fn test_title_lists_differ() {
        let a = vec!["a".to_string(), "b".to_string()];
        let same = vec!["a".to_string(), "b".to_string()];
        let swapped = vec!["b".to_string(), "a".to_string()];
        let longer = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        assert!(!title_lists_differ(&a, &same));
        assert!(title_lists_differ(&a, &swapped));
        assert!(title_lists_differ(&a, &longer));
        assert!(title_lists_differ(&a[..1].to_vec(), &a));
    }
}
