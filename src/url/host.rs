use tracing::debug;
use url::Url;

use crate::{UrlError, UrlResult};

/// Subdomain labels that carry no organizational meaning for display.
/// "mobile." is checked before "m." so the longer label wins.
const COMMON_PREFIXES: &[&str] = &["www.", "mobile.", "m."];

/// Extracts the host component of a URL string
///
/// # Arguments
///
/// * `input` - The URL string to parse
///
/// # Returns
///
/// * `Ok(String)` - The host component; empty if the URL has no host
///   (e.g. `data:` URLs)
/// * `Err(UrlError)` - The input could not be parsed as a URL
///
/// # Examples
///
/// ```
/// use urlpeel::host_from_url;
///
/// assert_eq!(host_from_url("https://example.com/path").unwrap(), "example.com");
/// assert!(host_from_url("not a url").is_err());
/// ```
pub fn host_from_url(input: &str) -> UrlResult<String> {
    let url = Url::parse(input).map_err(|e| UrlError::Parse(e.to_string()))?;
    Ok(url.host_str().unwrap_or_default().to_string())
}

/// Tries to extract the host from a URL string, falling back to the input
///
/// Best-effort normalization for display contexts: on any parse failure the
/// original string is returned unchanged, so callers cannot distinguish
/// "host is empty" from "wasn't a URL" without inspecting the input.
///
/// # Examples
///
/// ```
/// use urlpeel::try_get_host_from_url;
///
/// assert_eq!(try_get_host_from_url("https://example.com/path"), "example.com");
/// assert_eq!(try_get_host_from_url("not a url"), "not a url");
/// ```
pub fn try_get_host_from_url(input: &str) -> String {
    match host_from_url(input) {
        Ok(host) => host,
        Err(e) => {
            debug!(input, error = %e, "not a parseable URL, returning input unchanged");
            input.to_string()
        }
    }
}

/// Strips at most one common subdomain prefix (`www.`, `mobile.`, `m.`) from
/// a host
///
/// # Examples
///
/// ```
/// use urlpeel::host_without_common_prefixes;
///
/// assert_eq!(host_without_common_prefixes("www.example.com"), "example.com");
/// assert_eq!(host_without_common_prefixes("example.com"), "example.com");
/// ```
pub fn host_without_common_prefixes(host: &str) -> &str {
    for prefix in COMMON_PREFIXES {
        if let Some(trimmed) = host.strip_prefix(prefix) {
            return trimmed;
        }
    }
    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_from_simple_url() {
        assert_eq!(
            host_from_url("https://example.com/path").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_host_from_url_with_port() {
        assert_eq!(host_from_url("https://example.com:8080/").unwrap(), "example.com");
    }

    #[test]
    fn test_host_from_url_without_host() {
        assert_eq!(host_from_url("data:text/plain,hello").unwrap(), "");
    }

    #[test]
    fn test_host_from_malformed_url() {
        let result = host_from_url("not a url");
        assert!(matches!(result.unwrap_err(), UrlError::Parse(_)));
    }

    #[test]
    fn test_try_get_host_success() {
        assert_eq!(
            try_get_host_from_url("https://example.com/path"),
            "example.com"
        );
    }

    #[test]
    fn test_try_get_host_malformed_returns_input() {
        assert_eq!(try_get_host_from_url("not a url"), "not a url");
        assert_eq!(try_get_host_from_url(""), "");
    }

    #[test]
    fn test_try_get_host_missing_scheme_returns_input() {
        assert_eq!(try_get_host_from_url("example.com/path"), "example.com/path");
    }

    #[test]
    fn test_strip_www_prefix() {
        assert_eq!(host_without_common_prefixes("www.example.com"), "example.com");
    }

    #[test]
    fn test_strip_mobile_prefix() {
        assert_eq!(
            host_without_common_prefixes("mobile.example.com"),
            "example.com"
        );
    }

    #[test]
    fn test_strip_m_prefix() {
        assert_eq!(host_without_common_prefixes("m.example.com"), "example.com");
    }

    #[test]
    fn test_no_prefix_unchanged() {
        assert_eq!(host_without_common_prefixes("example.com"), "example.com");
    }

    #[test]
    fn test_prefix_must_match_whole_label() {
        // "media." starts with 'm' but is not the label "m."
        assert_eq!(
            host_without_common_prefixes("media.example.com"),
            "media.example.com"
        );
    }

    #[test]
    fn test_strips_at_most_one_prefix() {
        assert_eq!(
            host_without_common_prefixes("www.m.example.com"),
            "m.example.com"
        );
    }
}
