//! URL helpers

use reqwest::Url;

/// Query parameters that never reach the logs
pub const SENSITIVE_PARAMS: &[&str] = &["login", "pass", "key"];

/// Remove sensitive query parameters from a URL before logging it
///
/// The `?` is dropped when no parameter survives. Input that does not parse
/// as a URL is returned unchanged. Anything else comes back in normalized
/// form: default ports are dropped, an empty path becomes `/` and surviving
/// query values are re-encoded (`%20` turns into `+`).
pub fn sanitize_url(url: &str, sensitive: &[&str]) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if parsed.query().is_none() {
        return url.to_string();
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !sensitive.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(kept);
    }
    parsed.to_string()
}

/// Percent-encode a single path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
