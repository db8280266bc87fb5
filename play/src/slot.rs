use crossbeam::queue::ArrayQueue;

/// Single-slot mailbox for the current best move. Publishing overwrites any
/// value the reader has not taken yet, so `latest` always observes the most
/// recent publication or nothing at all.
pub struct MoveSlot<A> {
    slot: ArrayQueue<A>,
}

impl<A> MoveSlot<A> {
    pub fn new() -> Self {
        Self {
            slot: ArrayQueue::new(1),
        }
    }

    pub fn publish(&self, action: A) {
        self.slot.force_push(action);
    }

    /// Takes the most recently published action, leaving the slot empty.
    pub fn latest(&self) -> Option<A> {
        self.slot.pop()
    }
}

impl<A> Default for MoveSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}
