//! Error types for building and running resolvers.

use thiserror::Error;

use crate::transport::HttpError;

/// Error raised while validating resolver configuration.
///
/// A resolver is never constructed from options that produced one of these.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The endpoint is not a well-formed absolute URL.
    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        /// The rejected URL text
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The extraction pattern does not compile.
    #[error("invalid regexp `{pattern}`: {source}")]
    InvalidPattern {
        /// The rejected pattern text
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// Error raised by a single resolution attempt.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The request could not be completed.
    #[error(transparent)]
    Transport(HttpError),

    /// The endpoint answered with something other than `200 OK`.
    #[error("invalid http client response: {} - {reason}", .status.as_u16())]
    Status {
        /// Status code received
        status: http::StatusCode,
        /// Reason phrase for the status
        reason: &'static str,
    },

    /// The response body could not be read.
    #[error(transparent)]
    Read(HttpError),

    /// The extracted candidate is not an IPv4 literal.
    #[error("failed to parse IPv4 `{candidate}`")]
    Parse {
        /// Raw candidate text as extracted from the document
        candidate: String,
    },
}

impl From<HttpError> for ResolveError {
    fn from(e: HttpError) -> Self {
        if e.is_body() {
            Self::Read(e)
        } else {
            Self::Transport(e)
        }
    }
}
