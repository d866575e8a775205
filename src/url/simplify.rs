/// Display prefixes peeled by [`simplified_url`], tried in this order
const DISPLAY_PREFIXES: &[&str] = &["www.", "m.", "mobile."];

/// Trims a URL string of its scheme and one common display prefix
///
/// Everything after the first `"://"` is kept (the whole string when no
/// `"://"` is present), then the first matching prefix of `www.`, `m.`,
/// `mobile.` is removed. Path, query, fragment, and any further subdomains
/// are left intact.
///
/// Unlike [`url_to_trimmed_host`](crate::url_to_trimmed_host) this performs
/// no URL parsing and no public-suffix lookup: it does not know where the
/// host ends, trading accuracy for a fast, deterministic lexical peel. The
/// result is a fixed point: applying the function to its own output changes
/// nothing.
///
/// # Examples
///
/// ```
/// use urlpeel::simplified_url;
///
/// assert_eq!(simplified_url("https://www.example.com/a?b=1"), "example.com/a?b=1");
/// assert_eq!(simplified_url("https://example.com"), "example.com");
/// assert_eq!(simplified_url("justtext"), "justtext");
/// ```
pub fn simplified_url(input: &str) -> String {
    let after_scheme = match input.find("://") {
        Some(idx) => &input[idx + 3..],
        None => input,
    };

    for prefix in DISPLAY_PREFIXES {
        if let Some(rest) = after_scheme.strip_prefix(prefix) {
            return rest.to_string();
        }
    }

    after_scheme.to_string()
}
