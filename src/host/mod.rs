//! Host capabilities the form core calls through: timers and haptics

mod haptics;
mod timers;
mod traits;

pub use haptics::{HapticPattern, NoHaptics, TerminalBell};
pub use timers::TimerQueue;
pub use traits::{Haptics, Scheduler, TimerHandle};

#[cfg(test)]
pub use traits::{MockHaptics, MockScheduler};
