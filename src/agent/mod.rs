//! Change detection between successive resolutions.
//!
//! This module provides:
//! - The detected transition value ([`ChangeEvent`])
//! - The notification sink abstraction ([`ChangeHandler`])
//! - The agent that ties a resolver to a sink ([`Agent`], [`AgentError`])

mod detector;
mod event;
mod handler;


pub use detector::{Agent, AgentError};
pub use event::{ChangeEvent, UNSET};
pub use handler::ChangeHandler;
