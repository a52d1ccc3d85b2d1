//! Haptic feedback patterns and terminal implementations

use super::traits::Haptics;
use std::io::{self, Write};

/// Feedback pulses emitted by the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    /// A single field failed validation
    FieldError,
    /// A submit attempt was rejected
    SubmitError,
    /// The message was sent
    Success,
}

impl HapticPattern {
    /// Alternating vibrate/pause durations in milliseconds
    pub fn durations_ms(&self) -> &'static [u64] {
        match self {
            Self::FieldError => &[50],
            Self::SubmitError => &[100, 50, 100],
            Self::Success => &[50, 100, 50],
        }
    }
}

/// Rings the terminal bell in place of vibration
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn is_supported(&self) -> bool {
        true
    }

    fn pulse(&self, pattern: HapticPattern) {
        // Terminals have no pause between bells, so a pattern is one ring.
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::warn!("Failed to ring terminal bell for {pattern:?}: {e}");
        } else {
            tracing::debug!("Haptic pulse {:?}", pattern.durations_ms());
        }
    }
}

/// Host without haptic support
#[derive(Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn is_supported(&self) -> bool {
        false
    }

    fn pulse(&self, _pattern: HapticPattern) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_durations() {
        assert_eq!(HapticPattern::FieldError.durations_ms(), &[50]);
        assert_eq!(HapticPattern::SubmitError.durations_ms(), &[100, 50, 100]);
        assert_eq!(HapticPattern::Success.durations_ms(), &[50, 100, 50]);
    }

    #[test]
    fn test_no_haptics_is_unsupported() {
        assert!(!NoHaptics.is_supported());
    }

    #[test]
    fn test_terminal_bell_is_supported() {
        assert!(TerminalBell.is_supported());
    }
}
