//! Address transition events.

use std::fmt;
use std::net::Ipv4Addr;

/// Address held by an agent before its first committed change.
pub const UNSET: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// One detected address transition.
///
/// Created by [`Agent::run`](super::Agent::run) when the resolved address
/// differs from the stored one, and handed to the sink once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    new: Ipv4Addr,
    old: Ipv4Addr,
}

impl ChangeEvent {
    /// Creates an event for a transition from `old` to `new`.
    #[must_use]
    pub const fn new(new: Ipv4Addr, old: Ipv4Addr) -> Self {
        Self { new, old }
    }

    /// The freshly resolved address.
    #[must_use]
    pub const fn new_address(&self) -> Ipv4Addr {
        self.new
    }

    /// The previously stored address, [`UNSET`] on the first change.
    #[must_use]
    pub const fn old_address(&self) -> Ipv4Addr {
        self.old
    }

    /// Returns true if no address had been committed before this event.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.old == UNSET
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.old, self.new)
    }
}
