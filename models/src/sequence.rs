/// Orders responses on a single polling stream.
///
/// Each request takes a [`Ticket`] when it is issued. Requests may overlap on
/// a slow network, so a response is only applied when its ticket is newer than
/// the last one applied; a response overtaken by a later one is dropped.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
    applied: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn number(self) -> u64 {
        self.0
    }
}

impl RequestSequencer {
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Returns `true` and marks the ticket applied if nothing newer has landed.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_responses_apply() {
        let mut seq = RequestSequencer::default();
        let a = seq.issue();
        assert!(seq.accept(a));
        let b = seq.issue();
        assert!(seq.accept(b));
    }

    #[test]
    fn overtaken_response_is_dropped() {
        let mut seq = RequestSequencer::default();
        let slow = seq.issue();
        let fast = seq.issue();

        assert!(seq.accept(fast));
        assert!(!seq.accept(slow));
    }

    #[test]
    fn ticket_applies_once() {
        let mut seq = RequestSequencer::default();
        let t = seq.issue();
        assert!(seq.accept(t));
        assert!(!seq.accept(t));
    }

    #[test]
    fn tickets_increase() {
        let mut seq = RequestSequencer::default();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert_eq!(b.number(), a.number() + 1);
    }
}
