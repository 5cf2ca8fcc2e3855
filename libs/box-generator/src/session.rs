//! # Generation Session
//!
//! Guards against stale results when generation runs off the UI thread.
//! Each submission takes a [`Ticket`]; only the newest ticket's result is
//! accepted, so a slow pass for old input can never replace the result of
//! a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one submitted generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Sequence number, starting at 1.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Ticket {
    fn from(value: u64) -> Self {
        Ticket(value)
    }
}

/// Issues tickets for one UI session.
///
/// # Example
///
/// ```rust
/// use box_generator::GenerationSession;
///
/// let session = GenerationSession::new();
/// let old = session.begin();
/// let new = session.begin();
/// assert_eq!(session.accept(old, "stale"), None);
/// assert_eq!(session.accept(new, "fresh"), Some("fresh"));
/// ```
#[derive(Debug, Default)]
pub struct GenerationSession {
    latest: AtomicU64,
}

impl GenerationSession {
    /// Session with no submissions yet.
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Registers a new submission, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True if no newer submission has been made since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Passes `result` through only if `ticket` is still current.
    pub fn accept<T>(&self, ticket: Ticket, result: T) -> Option<T> {
        self.is_current(ticket).then_some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_tickets_increase() {
        let session = GenerationSession::new();
        let first = session.begin();
        let second = session.begin();
        assert_eq!(first.value(), 1);
        assert!(second > first);
    }

    #[test]
    fn test_only_latest_is_current() {
        let session = GenerationSession::new();
        let first = session.begin();
        assert!(session.is_current(first));
        let second = session.begin();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }

    #[test]
    fn test_stale_result_is_dropped_even_if_it_finishes_last() {
        let session = GenerationSession::new();
        let slow = session.begin();
        let fast = session.begin();
        assert_eq!(session.accept(fast, 2), Some(2));
        assert_eq!(session.accept(slow, 1), None);
    }

    #[test]
    fn test_concurrent_submissions_yield_one_current_ticket() {
        let session = Arc::new(GenerationSession::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let session = Arc::clone(&session);
                thread::spawn(move || session.begin())
            })
            .collect();
        let tickets: Vec<Ticket> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(tickets.iter().filter(|t| session.is_current(**t)).count(), 1);
        assert_eq!(tickets.iter().max().map(|t| t.value()), Some(8));
    }
}
