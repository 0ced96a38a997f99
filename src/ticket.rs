use std::sync::atomic::{AtomicU64, Ordering};

/// Tag handed out when a backend fetch begins. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonically increasing source of tickets.
#[derive(Debug, Default)]
pub struct TicketSequence {
    next: AtomicU64,
}

impl TicketSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[test]
fn test_tickets_increase() {
    let seq = TicketSequence::new();
    let a = seq.issue();
    let b = seq.issue();
    assert!(b > a);
    assert_eq!(b.value(), a.value() + 1);
}
