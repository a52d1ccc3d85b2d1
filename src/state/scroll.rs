//! Page scroll offset with eased scrolling to anchors

use std::time::{Duration, Instant};

/// Pixels one terminal row stands for when sizing scroll animations
const PIXELS_PER_ROW: f32 = 20.0;
/// Animation time per pixel of distance
const MS_PER_PIXEL: f32 = 0.8;
const MAX_SCROLL_DURATION: Duration = Duration::from_millis(800);

/// An in-flight eased scroll
#[derive(Debug, Clone, Copy, PartialEq)]
struct SmoothScroll {
    from: u16,
    to: u16,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    fn offset_at(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = simple_easing::quad_in_out(progress);
        let distance = self.to as f32 - self.from as f32;
        (self.from as f32 + distance * eased).round().max(0.0) as u16
    }
}

/// Vertical scroll position of the page
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    offset: u16,
    animation: Option<SmoothScroll>,
}

impl PageScroll {
    /// Duration of a smooth scroll covering `rows`
    pub fn duration_for(rows: u16) -> Duration {
        let ms = rows as f32 * PIXELS_PER_ROW * MS_PER_PIXEL;
        Duration::from_millis(ms as u64).min(MAX_SCROLL_DURATION)
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start an eased scroll towards `target`, clamped to `max`
    pub fn scroll_to(&mut self, target: u16, max: u16, now: Instant) {
        let target = target.min(max);
        let duration = Self::duration_for(self.offset.abs_diff(target));
        if duration.is_zero() {
            self.offset = target;
            self.animation = None;
            return;
        }
        self.animation = Some(SmoothScroll {
            from: self.offset,
            to: target,
            started: now,
            duration,
        });
    }

    /// Scroll immediately by `delta` rows, cancelling any animation
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        self.animation = None;
        let next = (self.offset as i32 + delta).clamp(0, max as i32);
        self.offset = next as u16;
    }

    /// Jump without animation
    pub fn jump_to(&mut self, target: u16, max: u16) {
        self.animation = None;
        self.offset = target.min(max);
    }

    /// Re-clamp after the viewport changed size
    pub fn clamp(&mut self, max: u16) {
        if self.offset > max {
            self.offset = max;
        }
        if let Some(animation) = &mut self.animation {
            animation.to = animation.to.min(max);
        }
    }

    /// Advance the animation to `now`, returning the current offset
    pub fn update(&mut self, now: Instant) -> u16 {
        if let Some(animation) = self.animation {
            self.offset = animation.offset_at(now);
            if self.offset == animation.to {
                self.animation = None;
            }
        }
        self.offset
    }
}
