//! Sink that accepts changes without delivering them.

use std::convert::Infallible;

use crate::agent::{ChangeEvent, ChangeHandler};

/// Accepts every change so the agent commits it, without contacting anything.
///
/// Used by `--dry-run` to observe detection on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunHandler;

impl ChangeHandler for DryRunHandler {
    type Error = Infallible;

    async fn handle(&self, _event: &ChangeEvent) -> Result<(), Self::Error> {
        Ok(())
    }
}
