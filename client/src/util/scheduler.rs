//! Delayed task queue on a simulated millisecond clock.
//!
//! DESIGN
//! ======
//! Every timed widget owns one `Scheduler` and reacts to its events through
//! the `Sequencer` trait. Sequences arm their next step from inside the
//! handler of the previous one, so steps fire strictly in scripted order.
//! The clock only moves when someone calls `advance`: the browser driver
//! feeds it real elapsed time, tests fast-forward it directly.
//!
//! Dropping the owner drops every pending event, which is how an unmounted
//! widget stops writing state.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

/// Handle returned by `Scheduler::schedule`, used to cancel a pending event.
pub type TimerId = u64;

#[derive(Clone, Debug)]
struct Pending<E> {
    id: TimerId,
    due_ms: u64,
    event: E,
}

/// One-shot deferred events ordered by due time, then by scheduling order.
#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_id: TimerId,
    pending: Vec<Pending<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    #[must_use]
    pub fn new() -> Self {
        Self { now_ms: 0, next_id: 0, pending: Vec::new() }
    }

    /// Current simulated time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Arm `event` to fire `delay_ms` after the current simulated time.
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        let due_ms = self.now_ms.saturating_add(delay_ms);
        // Insert after every entry due at the same time so ties keep FIFO order.
        let at = self.pending.partition_point(|p| p.due_ms <= due_ms);
        self.pending.insert(at, Pending { id, due_ms, event });
        id
    }

    /// Drop a pending event. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Absolute simulated time of the earliest pending event.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.first().map(|p| p.due_ms)
    }

    /// Milliseconds from now until the earliest pending event.
    #[must_use]
    pub fn until_next_ms(&self) -> Option<u64> {
        self.next_due_ms().map(|due| due.saturating_sub(self.now_ms))
    }

    /// Remove the earliest event due at or before `deadline_ms` and move the
    /// clock to its due time.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<E> {
        if self.pending.first()?.due_ms > deadline_ms {
            return None;
        }
        let next = self.pending.remove(0);
        self.now_ms = self.now_ms.max(next.due_ms);
        Some(next.event)
    }

    /// Move the clock forward without firing anything. Never moves it back.
    fn settle(&mut self, at_ms: u64) {
        self.now_ms = self.now_ms.max(at_ms);
    }
}

/// A state machine driven by its own `Scheduler`.
pub trait Sequencer {
    type Event;

    fn scheduler(&self) -> &Scheduler<Self::Event>;

    fn scheduler_mut(&mut self) -> &mut Scheduler<Self::Event>;

    /// Apply one fired event. May arm follow-up events.
    fn on_event(&mut self, event: Self::Event);

    /// Fast-forward the clock by `ms`, firing every event that falls due in
    /// the window (including ones armed by handlers along the way).
    /// Returns the number of events fired.
    fn advance(&mut self, ms: u64) -> usize {
        let deadline = self.scheduler().now_ms().saturating_add(ms);
        let mut fired = 0;
        while let Some(event) = self.scheduler_mut().pop_due(deadline) {
            self.on_event(event);
            fired += 1;
        }
        self.scheduler_mut().settle(deadline);
        fired
    }

    /// Fast-forward until nothing is pending or `max_ms` has elapsed.
    /// Returns the number of events fired.
    fn run_until_idle(&mut self, max_ms: u64) -> usize {
        let deadline = self.scheduler().now_ms().saturating_add(max_ms);
        let mut fired = 0;
        while let Some(due) = self.scheduler().next_due_ms() {
            if due > deadline {
                break;
            }
            let step = due - self.scheduler().now_ms();
            fired += self.advance(step);
        }
        fired
    }
}
