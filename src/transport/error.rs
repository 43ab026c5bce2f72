use thiserror::Error;

/// Boxed source error carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why one request/response exchange did not produce a buffered response.
///
/// The split that matters to callers is whether the response head arrived:
/// [`HttpError::Body`] is the only variant raised after it did.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No response head: DNS, connect, TLS or protocol failure.
    #[error("request failed: {0}")]
    Connect(#[source] BoxError),

    /// The response head did not arrive within the client timeout.
    #[error("request timed out")]
    Timeout,

    /// The request could not be built from the given parts.
    #[error("invalid request: {0}")]
    Request(String),

    /// The response head arrived but the body did not, including when the
    /// client timeout fires mid-body.
    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),
}

impl HttpError {
    /// True when the status line and headers were received.
    #[must_use]
    pub const fn is_body(&self) -> bool {
        matches!(self, Self::Body(_))
    }
}
