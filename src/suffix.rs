//! Public-suffix resolution
//!
//! This module defines the resolver capability used by host trimming and a
//! default implementation backed by the compiled-in Public Suffix List.

use std::future::Future;

use psl::{List, Psl};

/// Capability for stripping the public suffix from a host
///
/// Implementations must be deterministic and best-effort: given a host such
/// as `"bbc.co.uk"` they return the host with its public suffix (and the
/// separating dot) removed, or the host unchanged when no suffix rule
/// applies. Timeout, retry, and cancellation policy belong entirely to the
/// implementation; callers await the lookup with no timeout of their own.
///
/// # Examples
///
/// ```
/// use urlpeel::PublicSuffixResolver;
///
/// struct FixedResolver;
///
/// impl PublicSuffixResolver for FixedResolver {
///     async fn strip_public_suffix(&self, host: &str) -> String {
///         host.strip_suffix(".com").unwrap_or(host).to_string()
///     }
/// }
/// ```
pub trait PublicSuffixResolver {
    /// Returns `host` with its public suffix stripped, or `host` unchanged
    /// if no suffix rule matches
    fn strip_public_suffix(&self, host: &str) -> impl Future<Output = String> + Send;
}

/// Resolver backed by the `psl` crate's compiled-in Public Suffix List
///
/// The lookup is purely in-memory, so the async contract is satisfied
/// trivially. Unlisted TLDs fall under the list's prevailing `*` rule, so the
/// last label of an unknown host still counts as its suffix.
///
/// Hosts that *are* a public suffix (`"com"`, `"co.uk"`) are returned
/// unchanged: an empty string is useless in a display context.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslResolver;

impl PslResolver {
    pub fn new() -> Self {
        Self
    }

    fn strip(host: &str) -> String {
        let suffix = match List.suffix(host.as_bytes()) {
            Some(suffix) => suffix,
            None => return host.to_string(),
        };
        let suffix = match std::str::from_utf8(suffix.as_bytes()) {
            Ok(suffix) => suffix,
            Err(_) => return host.to_string(),
        };

        let rest = host
            .strip_suffix(suffix)
            .map(|rest| rest.strip_suffix('.').unwrap_or(rest))
            .unwrap_or(host);

        if rest.is_empty() {
            host.to_string()
        } else {
            rest.to_string()
        }
    }
}

impl PublicSuffixResolver for PslResolver {
    async fn strip_public_suffix(&self, host: &str) -> String {
        Self::strip(host)
    }
}
