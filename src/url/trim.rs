use tracing::debug;
use url::Url;

use crate::suffix::PublicSuffixResolver;
use crate::url::host::host_without_common_prefixes;
use crate::{UrlError, UrlResult};

/// Parses the input and returns its host with common prefixes stripped
fn prefix_stripped_host(input: &str) -> UrlResult<String> {
    let url = Url::parse(input).map_err(|e| UrlError::Parse(e.to_string()))?;
    let host = url.host_str().ok_or(UrlError::MissingHost)?;
    Ok(host_without_common_prefixes(host).to_string())
}

/// Trims a URL down to its host without common prefixes or public suffix
///
/// # Trimming Steps
///
/// 1. Parse `input` as a URL and take its host
/// 2. Strip one common subdomain prefix (`www.`, `mobile.`, `m.`)
/// 3. Await the resolver's public-suffix stripping on the result
///
/// Fail-open: if `input` cannot be parsed or has no host, it is returned
/// unchanged. The resolver call is awaited with no timeout at this layer;
/// timeout policy belongs to the resolver.
///
/// # Arguments
///
/// * `input` - The URL string to trim
/// * `resolver` - The public-suffix resolver to strip the suffix with
///
/// # Examples
///
/// ```
/// use urlpeel::{url_to_trimmed_host, PslResolver};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let trimmed = url_to_trimmed_host("https://www.bbc.co.uk/news", &PslResolver).await;
/// assert_eq!(trimmed, "bbc");
/// # });
/// ```
pub async fn url_to_trimmed_host<R>(input: &str, resolver: &R) -> String
where
    R: PublicSuffixResolver,
{
    match prefix_stripped_host(input) {
        Ok(host) => resolver.strip_public_suffix(&host).await,
        Err(e) => {
            debug!(input, error = %e, "could not extract host, returning input unchanged");
            input.to_string()
        }
    }
}

/// Blocking adapter for [`url_to_trimmed_host`]
///
/// For call sites that cannot be made asynchronous. Blocks the calling
/// thread on a freshly built current-thread runtime until the resolver
/// responds, with no timeout. Must not be called from within an async
/// context: entering a nested runtime panics.
pub fn url_to_trimmed_host_blocking<R>(input: &str, resolver: &R) -> String
where
    R: PublicSuffixResolver,
{
    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            debug!(input, error = %e, "failed to build runtime, returning input unchanged");
            return input.to_string();
        }
    };
    runtime.block_on(url_to_trimmed_host(input, resolver))
}
