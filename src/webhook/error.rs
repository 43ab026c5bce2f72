//! Error types for webhook delivery.

use thiserror::Error;

use crate::transport::HttpError;

/// Error returned when a change could not be delivered.
///
/// Delivery is attempted once; the agent's next run is the retry.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request could not be completed.
    #[error("Webhook request failed: {0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Webhook returned {status}{}", .body.as_deref().map(|b| format!(": {b}")).unwrap_or_default())]
    NonSuccessStatus {
        /// Status code received
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8 and non-empty
        body: Option<String>,
    },

    /// The body template failed to render.
    #[error("Failed to render body template: {0}")]
    Template(String),
}
