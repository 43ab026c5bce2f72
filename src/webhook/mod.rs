//! Notification sinks for detected address changes.
//!
//! This module provides:
//! - An HTTP webhook sink with optional Handlebars body ([`HttpWebhook`])
//! - A sink that accepts every change without sending anything ([`DryRunHandler`])
//! - Delivery errors ([`WebhookError`])

mod dry_run;
mod error;
mod sender;


pub use dry_run::DryRunHandler;
pub use error::WebhookError;
pub use sender::HttpWebhook;
