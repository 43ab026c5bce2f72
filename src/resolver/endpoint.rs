//! HTTP-backed resolver.

use std::net::Ipv4Addr;

use url::Url;

use crate::transport::{HttpClient, HttpRequest};

use super::{Extractor, ResolveError, Resolver, ResolverOptions};

/// Resolves the external address by fetching a document over HTTP and
/// extracting an IPv4 literal from it.
///
/// Every stage is a hard gate:
/// 1. `GET` the endpoint; transport failures propagate unchanged.
/// 2. Require exactly `200 OK`.
/// 3. Read the full body.
/// 4. Extract a candidate with the configured pattern.
/// 5. Parse the candidate as IPv4. IPv6 literals are rejected.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use checkip_agent::transport::ReqwestClient;
/// use checkip_agent::resolver::{HttpResolver, ResolverOptions};
///
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10)).unwrap();
/// let resolver = HttpResolver::new(client, ResolverOptions::default());
/// assert_eq!(resolver.url().as_str(), "https://checkip.amazonaws.com/");
/// ```
#[derive(Debug)]
pub struct HttpResolver<H> {
    client: H,
    url: Url,
    extractor: Extractor,
}

impl<H> HttpResolver<H> {
    /// Creates a resolver that uses `client` as its transport.
    #[must_use]
    pub fn new(client: H, options: ResolverOptions) -> Self {
        let (url, extractor) = options.into_parts();
        Self {
            client,
            url,
            extractor,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the extractor applied to response bodies.
    #[must_use]
    pub const fn extractor(&self) -> &Extractor {
        &self.extractor
    }
}

impl<H: HttpClient> HttpResolver<H> {
    async fn fetch(&self) -> Result<Vec<u8>, ResolveError> {
        let response = self.client.request(HttpRequest::get(self.url.clone())).await?;

        if response.status != http::StatusCode::OK {
            return Err(ResolveError::Status {
                status: response.status,
                reason: response.reason(),
            });
        }

        Ok(response.body)
    }
}

/// Accepts dotted-quad text only; `::ffff:a.b.c.d` is rejected rather than unmapped.
fn parse_ipv4(candidate: String) -> Result<Ipv4Addr, ResolveError> {
    candidate
        .parse::<Ipv4Addr>()
        .map_err(|_| ResolveError::Parse { candidate })
}

impl<H: HttpClient> Resolver for HttpResolver<H> {
    async fn resolve(&self) -> Result<Ipv4Addr, ResolveError> {
        let body = self.fetch().await?;
        let candidate = self.extractor.extract(&body);
        parse_ipv4(candidate)
    }
}
