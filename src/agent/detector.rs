//! The change-detection agent.

use std::net::Ipv4Addr;

use thiserror::Error;

use crate::resolver::{ResolveError, Resolver};

use super::{ChangeEvent, ChangeHandler, UNSET};

/// Error returned by [`Agent::run`].
#[derive(Debug, Error)]
pub enum AgentError<E>
where
    E: std::error::Error + 'static,
{
    /// The current address could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The sink rejected the change; the stored address was not updated.
    #[error(transparent)]
    Notify(E),
}

/// Tracks the last committed address and notifies a sink when it changes.
///
/// The agent starts out holding [`UNSET`]. The stored address is replaced
/// only after the sink accepts the corresponding [`ChangeEvent`], so a
/// failed delivery is detected and attempted again by the next run, and a
/// delivered change is never reported twice.
///
/// `run` takes `&mut self`; serial polling is the only supported mode.
#[derive(Debug)]
pub struct Agent<R, H> {
    resolver: R,
    handler: H,
    current: Ipv4Addr,
}

impl<R, H> Agent<R, H> {
    /// Creates an agent that has not observed any address yet.
    #[must_use]
    pub const fn new(resolver: R, handler: H) -> Self {
        Self {
            resolver,
            handler,
            current: UNSET,
        }
    }

    /// Returns the last committed address, or [`UNSET`].
    #[must_use]
    pub const fn current_address(&self) -> Ipv4Addr {
        self.current
    }

    /// Returns true once a change has been committed.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.current != UNSET
    }

    /// Returns the resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns the sink.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }
}

impl<R: Resolver, H: ChangeHandler> Agent<R, H> {
    /// Resolves the current address and notifies the sink if it changed.
    ///
    /// Returns the committed event, or `None` when the address is unchanged.
    ///
    /// # Errors
    ///
    /// - [`AgentError::Resolve`] if resolution fails; the sink is not called.
    /// - [`AgentError::Notify`] if the sink fails; the stored address is kept.
    pub async fn run(&mut self) -> Result<Option<ChangeEvent>, AgentError<H::Error>> {
        let resolved = self.resolver.resolve().await?;

        if resolved == self.current {
            return Ok(None);
        }

        let event = ChangeEvent::new(resolved, self.current);
        self.handler
            .handle(&event)
            .await
            .map_err(AgentError::Notify)?;

        self.current = resolved;
        Ok(Some(event))
    }
}
