//! Port traits for host capabilities, mockable in tests

use super::haptics::HapticPattern;
use crate::state::FormTimer;
use std::time::Duration;

/// Identifies one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Cooperative one-shot timer scheduling.
///
/// Nothing fires on its own: the owner of the scheduler drains due timers
/// from its event loop and hands each `(handle, event)` back to the form.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler {
    /// Schedule `event` to fire once after `delay`
    fn schedule(&mut self, delay: Duration, event: FormTimer) -> TimerHandle;

    /// Cancel a pending timer. Cancelling a fired or unknown handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Vibration-style feedback, which the host may not support
#[cfg_attr(test, mockall::automock)]
pub trait Haptics {
    /// Whether pulses can be delivered at all
    fn is_supported(&self) -> bool;

    /// Deliver a pulse pattern
    fn pulse(&self, pattern: HapticPattern);
}

impl<H: Haptics + ?Sized> Haptics for Box<H> {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn pulse(&self, pattern: HapticPattern) {
        (**self).pulse(pattern)
    }
}
