//! Fade-in of sections the first time they scroll into view

use super::navigation::Section;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const SECTION_STAGGER: Duration = Duration::from_millis(100);
const FADE_DURATION: Duration = Duration::from_millis(800);
const TAG_STAGGER: Duration = Duration::from_millis(30);
const TAG_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed_at: HashMap<Section, Instant>,
}

impl RevealState {
    /// Mark a section visible. Only the first call per section counts;
    /// returns whether this call revealed it.
    pub fn reveal(&mut self, section: Section, now: Instant) -> bool {
        if self.revealed_at.contains_key(&section) {
            return false;
        }
        tracing::debug!("Revealing {section:?}");
        self.revealed_at.insert(section, now);
        true
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed_at.contains_key(&section)
    }

    /// Fade progress from 0.0 (hidden) to 1.0 (fully shown)
    pub fn progress(&self, section: Section, now: Instant) -> f32 {
        let Some(&at) = self.revealed_at.get(&section) else {
            return 0.0;
        };
        let delay = SECTION_STAGGER * section.index() as u32;
        let elapsed = now.saturating_duration_since(at);
        if elapsed <= delay {
            return 0.0;
        }
        ((elapsed - delay).as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0)
    }

    /// Whether the skill tag at `index` has popped in yet
    pub fn skill_tag_visible(&self, index: usize, now: Instant) -> bool {
        self.revealed_at
            .get(&Section::Skills)
            .is_some_and(|&at| {
                now.saturating_duration_since(at) >= TAG_STAGGER * index as u32 + TAG_DELAY
            })
    }
}
