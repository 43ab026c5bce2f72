//! Notification sink trait.

use super::ChangeEvent;

/// Trait for delivering a detected change to the outside world.
///
/// In a typical deployment this upserts a DNS record; the agent treats
/// it as opaque. Delivery is awaited before the agent commits the new
/// address, so an `Err` leaves the change pending for the next run.
///
/// # Example
///
/// ```
/// use checkip_agent::agent::{ChangeEvent, ChangeHandler};
///
/// struct Print;
///
/// impl ChangeHandler for Print {
///     type Error = std::convert::Infallible;
///
///     async fn handle(&self, event: &ChangeEvent) -> Result<(), Self::Error> {
///         println!("{event}");
///         Ok(())
///     }
/// }
/// ```
pub trait ChangeHandler: Send + Sync {
    /// Failure reported by the sink.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Delivers one change event.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the change could not be delivered.
    fn handle(
        &self,
        event: &ChangeEvent,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}
