//! Deferred one-shot tasks.
//!
//! Query-parameter effects must run "after current render settle, before
//! user interaction". Core never reads a wall clock for this: the host (or a
//! test) reports elapsed time through [`crate::Controller::advance`] and due
//! messages fire in schedule order. A deferred effect always reads controller
//! state at fire time, never at schedule time.

use std::time::Duration;

use crate::controller::Message;

/// Settle delay applied to query-parameter effects.
pub const QUERY_EFFECT_SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug)]
struct PendingTask {
    remaining: Duration,
    message: Message,
}

/// FIFO queue of delayed messages.
#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: Vec<PendingTask>,
}

impl TaskQueue {
    pub fn schedule(&mut self, delay: Duration, message: Message) {
        self.pending.push(PendingTask {
            remaining: delay,
            message,
        });
    }

    /// Retire `elapsed` time and return the messages that became due, in
    /// schedule order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Message> {
        for task in &mut self.pending {
            task.remaining = task.remaining.saturating_sub(elapsed);
        }
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|task| task.remaining.is_zero());
        self.pending = pending;
        due.into_iter().map(|task| task.message).collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
