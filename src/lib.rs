//! Urlpeel: display-oriented string and URL trimming helpers
//!
//! This crate implements the small normalization passes a browser-style
//! application applies before showing a URL to the user: keyed substring
//! replacement, best-effort host extraction, common-prefix and public-suffix
//! stripping, and a purely lexical "simplified URL" form.
//!
//! The display-facing surface is uniformly fail-open: when an input cannot be
//! parsed as a URL, the original string is returned unchanged rather than an
//! error. Strict `Result`-returning variants exist for callers that need to
//! distinguish failure.

pub mod replace;
pub mod suffix;
pub mod url;

use thiserror::Error;

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used functions
pub use replace::replace_each;
pub use suffix::{PslResolver, PublicSuffixResolver};
pub use url::{
    host_from_url, host_without_common_prefixes, simplified_url, try_get_host_from_url,
    url_to_trimmed_host, url_to_trimmed_host_blocking,
};
