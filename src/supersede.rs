//! Most-recent-request-wins bookkeeping.
//!
//! When renders are re-triggered faster than they finish (a slider being
//! dragged, a file being re-saved), only the newest request's result should
//! be shown. Work is never cancelled; results from superseded requests are
//! simply dropped when they arrive.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one request. Obtained from [`Supersede::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    /// Sequence number, starting at 1.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Tracks which request is currently authoritative.
#[derive(Debug, Default)]
pub struct Supersede {
    latest: AtomicU64,
}

impl Supersede {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True if no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Keep `value` only if it was produced for the current request.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(&ticket) {
            Some(value)
        } else {
            log::debug!(
                "Discarding result for request {} (latest is {})",
                ticket.0,
                self.latest.load(Ordering::Acquire)
            );
            None
        }
    }
}
