//! Public IPv4 discovery.
//!
//! This module provides:
//! - Candidate extraction from arbitrary documents ([`Extractor`], [`PatternKind`])
//! - The resolution abstraction used by the agent ([`Resolver`])
//! - Eagerly validated resolver configuration ([`ResolverOptions`])
//! - An HTTP implementation backed by any [`HttpClient`](crate::transport::HttpClient) ([`HttpResolver`])

mod endpoint;
mod error;
mod extractor;
mod options;


use std::net::Ipv4Addr;

pub use endpoint::HttpResolver;
pub use error::{BuildError, ResolveError};
pub use extractor::{Extractor, PatternKind};
pub use options::{DEFAULT_PATTERN, DEFAULT_URL, ResolverOptions};

/// Trait for determining the current external IPv4 address.
///
/// Implementations either return a real address or fail; they never
/// return a placeholder such as `0.0.0.0` to signal failure.
pub trait Resolver: Send + Sync {
    /// Resolves the current external IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when any stage of the resolution fails.
    fn resolve(&self) -> impl std::future::Future<Output = Result<Ipv4Addr, ResolveError>> + Send;
}
