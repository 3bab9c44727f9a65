use once_cell::sync::Lazy;
use regex::Regex;

static REPOSITORY_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https://github\.com/)?(\S+?)/(\S+?)$").expect("valid pattern"));

/// Splits a "Repository URL" field value into `(owner, repository)`.
///
/// Accepts `owner/repo` with or without the `https://github.com/` prefix.
pub fn parse_repository_url(value: &str) -> Option<(String, String)> {
    let caps = REPOSITORY_URL.captures(value.trim())?;
    Some((caps[1].to_string(), caps[2].to_string()))
}
