//! Typewriter effect for the hero subtitle

use std::time::{Duration, Instant};

/// Typewriter animation state
///
/// Fully determined by the start time, so rendering just asks what is
/// visible at a given instant.
#[derive(Debug, Clone)]
pub struct TypewriterState {
    text: String,
    char_count: usize,
    started: Instant,
    char_interval: Duration,
}

impl TypewriterState {
    /// Wait before the first character appears
    const INITIAL_DELAY: Duration = Duration::from_millis(500);
    /// Cursor lingers this long after typing finishes
    const CURSOR_LINGER: Duration = Duration::from_millis(1000);
    const WIDE_INTERVAL: Duration = Duration::from_millis(60);
    const NARROW_INTERVAL: Duration = Duration::from_millis(80);

    pub fn new(text: &str, started: Instant, narrow: bool) -> Self {
        Self {
            text: text.to_string(),
            char_count: text.chars().count(),
            started,
            char_interval: if narrow {
                Self::NARROW_INTERVAL
            } else {
                Self::WIDE_INTERVAL
            },
        }
    }

    /// Number of characters typed by `now`
    pub fn visible_chars(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < Self::INITIAL_DELAY {
            return 0;
        }
        let ticks = (elapsed - Self::INITIAL_DELAY).as_millis() / self.char_interval.as_millis();
        (ticks as usize + 1).min(self.char_count)
    }

    pub fn visible_text(&self, now: Instant) -> &str {
        let n = self.visible_chars(now);
        match self.text.char_indices().nth(n) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    #[cfg(test)]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.visible_chars(now) == self.char_count
    }

    /// The cursor shows while typing and briefly afterwards
    pub fn cursor_visible(&self, now: Instant) -> bool {
        let hide_at = Self::INITIAL_DELAY
            + self.char_interval * self.char_count as u32
            + Self::CURSOR_LINGER;
        now.saturating_duration_since(self.started) < hide_at
    }
}
