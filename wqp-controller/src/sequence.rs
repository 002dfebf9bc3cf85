use std::cell::Cell;

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic counter deciding which in-flight response may still render.
///
/// Only the most recently issued ticket is current. Invalidating issues a
/// ticket nobody holds, which orphans every fetch still in flight.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: Cell<u64>,
}

impl FetchSequence {
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn invalidate(&self) {
        self.issue();
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest.get()
    }
}
