//! Deadline queue backing the `Scheduler` port

use super::traits::{Scheduler, TimerHandle};
use crate::state::FormTimer;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Pending one-shot timers, ordered by deadline.
///
/// The queue keeps its own notion of "now". `pop_due` advances it to the
/// deadline of each timer it hands out, so a timer scheduled while handling
/// a firing is measured from when that firing was due, not from when the
/// loop got around to it.
#[derive(Debug)]
pub struct TimerQueue {
    now: Instant,
    next_id: u64,
    pending: BTreeMap<TimerHandle, (Instant, FormTimer)>,
}

impl TimerQueue {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Remove and return the earliest timer due at or before `until`.
    /// Returns `None` once nothing more is due, leaving the clock at `until`.
    pub fn pop_due(&mut self, until: Instant) -> Option<(TimerHandle, FormTimer)> {
        let next = self
            .pending
            .iter()
            .filter(|(_, (deadline, _))| *deadline <= until)
            .min_by_key(|(handle, (deadline, _))| (*deadline, **handle))
            .map(|(handle, _)| *handle);

        match next.and_then(|handle| self.pending.remove(&handle).map(|t| (handle, t))) {
            Some((handle, (deadline, event))) => {
                self.now = self.now.max(deadline);
                Some((handle, event))
            }
            None => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    /// Time left until the earliest pending deadline, if any
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.pending
            .values()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
            .min()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, event: FormTimer) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        tracing::debug!("Scheduled {event:?} in {}ms as {handle:?}", delay.as_millis());
        self.pending.insert(handle, (self.now + delay, event));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some((_, event)) = self.pending.remove(&handle) {
            tracing::debug!("Cancelled {event:?} ({handle:?})");
        }
    }
}
