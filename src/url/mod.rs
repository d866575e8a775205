//! URL trimming module for Urlpeel
//!
//! This module provides host extraction, common-prefix stripping, trimmed
//! host resolution, and lexical URL simplification.

mod host;
mod simplify;
mod trim;

// Re-export main functions
pub use host::{host_from_url, host_without_common_prefixes, try_get_host_from_url};
pub use simplify::simplified_url;
pub use trim::{url_to_trimmed_host, url_to_trimmed_host_blocking};
