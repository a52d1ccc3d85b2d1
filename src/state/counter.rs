//! Count-up animation for the hero statistics

use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const WIDE_STEPS: u32 = 60;
const NARROW_STEPS: u32 = 40;

/// Parsed form of a stat such as `"50+"` or `"98%"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    pub is_percent: bool,
    pub is_plus: bool,
}

impl CounterTarget {
    /// Parse the digits and dots out of `text`, reading the longest leading
    /// number among them (`"1.2.3"` is 1.2); `None` when there is no number
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let mut seen_dot = false;
        let end = digits
            .char_indices()
            .find(|&(_, c)| {
                if c != '.' {
                    return false;
                }
                std::mem::replace(&mut seen_dot, true)
            })
            .map_or(digits.len(), |(i, _)| i);
        let value = digits[..end].parse::<f64>().ok()?;
        Some(Self {
            value,
            is_percent: text.contains('%'),
            is_plus: text.contains('+'),
        })
    }

    /// Render an intermediate value: one decimal below 10, whole numbers above
    pub fn format(&self, current: f64) -> String {
        let shown = if self.value >= 10.0 {
            current.floor()
        } else {
            (current * 10.0).floor() / 10.0
        };
        let mut out = if shown.fract() == 0.0 {
            format!("{}", shown as i64)
        } else {
            format!("{shown:.1}")
        };
        if self.is_percent {
            out.push('%');
        }
        if self.is_plus {
            out.push('+');
        }
        out
    }
}

/// One animated statistic
#[derive(Debug, Clone)]
pub struct StatCounter {
    text: String,
    target: Option<CounterTarget>,
    steps: u32,
    started: Option<Instant>,
}

impl StatCounter {
    pub fn new(text: &str, narrow: bool) -> Self {
        Self {
            text: text.to_string(),
            target: CounterTarget::parse(text),
            steps: if narrow { NARROW_STEPS } else { WIDE_STEPS },
            started: None,
        }
    }

    /// Begin counting; later calls are ignored
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    #[cfg(test)]
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    pub fn is_done(&self, now: Instant) -> bool {
        match (self.target, self.started) {
            (Some(_), Some(started)) => self.frames(started, now) >= self.steps,
            _ => true,
        }
    }

    fn frames(&self, started: Instant, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_millis() / FRAME.as_millis()).min(u32::MAX as u128) as u32
    }

    /// Text to show at `now`. Before the count starts, and for stats that
    /// carry no number, this is the text as written.
    pub fn display(&self, now: Instant) -> String {
        let (Some(target), Some(started)) = (self.target, self.started) else {
            return self.text.clone();
        };
        let frames = self.frames(started, now);
        let current = if frames >= self.steps {
            target.value
        } else {
            (target.value / self.steps as f64 * frames as f64).min(target.value)
        };
        target.format(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    mod counter_target {
        use super::*;

        #[test]
        fn test_parse_suffixes() {
            let plus = CounterTarget::parse("50+").unwrap();
            assert_eq!(plus.value, 50.0);
            assert!(plus.is_plus);
            assert!(!plus.is_percent);

            let percent = CounterTarget::parse("98%").unwrap();
            assert_eq!(percent.value, 98.0);
            assert!(percent.is_percent);
        }

        #[test]
        fn test_parse_decimal() {
            assert_eq!(CounterTarget::parse("4.9").unwrap().value, 4.9);
        }

        #[test]
        fn test_parse_without_number() {
            assert!(CounterTarget::parse("N/A").is_none());
        }

        #[test]
        fn test_parse_stops_at_second_dot() {
            assert_eq!(CounterTarget::parse("1.2.3").unwrap().value, 1.2);
            assert_eq!(CounterTarget::parse("v2.0.1+").unwrap().value, 2.0);
            assert_eq!(CounterTarget::parse(".5").unwrap().value, 0.5);
            assert!(CounterTarget::parse("..").is_none());
        }

        #[test]
        fn test_format_small_values_keep_one_decimal() {
            let target = CounterTarget::parse("4.9").unwrap();
            assert_eq!(target.format(2.45), "2.4");
            assert_eq!(target.format(3.0), "3");
            assert_eq!(target.format(4.9), "4.9");
        }

        #[test]
        fn test_format_large_values_are_whole() {
            let target = CounterTarget::parse("98%").unwrap();
            assert_eq!(target.format(47.9), "47%");
            let target = CounterTarget::parse("50+").unwrap();
            assert_eq!(target.format(50.0), "50+");
        }
    }

    mod stat_counter {
        use super::*;

        #[test]
        fn test_shows_written_text_before_start() {
            let counter = StatCounter::new("50+", false);
            assert_eq!(counter.display(Instant::now()), "50+");
            assert!(!counter.is_started());
        }

        #[test]
        fn test_starts_from_zero() {
            let start = Instant::now();
            let mut counter = StatCounter::new("50+", false);
            counter.start(start);
            assert_eq!(counter.display(start), "0+");
        }

        #[test]
        fn test_counts_up_per_frame() {
            let start = Instant::now();
            let mut counter = StatCounter::new("60", false);
            counter.start(start);
            // 60 steps of 1 each, one per 16ms frame
            assert_eq!(counter.display(start + ms(16 * 30)), "30");
            assert!(!counter.is_done(start + ms(16 * 59)));
        }

        #[test]
        fn test_lands_exactly_on_target() {
            let start = Instant::now();
            let mut counter = StatCounter::new("4.9", false);
            counter.start(start);
            assert_eq!(counter.display(start + ms(16 * 60)), "4.9");
            assert!(counter.is_done(start + ms(16 * 60)));
            assert_eq!(counter.display(start + ms(60_000)), "4.9");
        }

        #[test]
        fn test_narrow_finishes_in_fewer_steps() {
            let start = Instant::now();
            let mut counter = StatCounter::new("98%", true);
            counter.start(start);
            assert!(counter.is_done(start + ms(16 * 40)));
            assert_eq!(counter.display(start + ms(16 * 40)), "98%");
        }

        #[test]
        fn test_second_start_is_ignored() {
            let start = Instant::now();
            let mut counter = StatCounter::new("60", false);
            counter.start(start);
            counter.start(start + ms(10_000));
            assert_eq!(counter.display(start + ms(16 * 30)), "30");
        }

        #[test]
        fn test_non_numeric_stat_is_static() {
            let start = Instant::now();
            let mut counter = StatCounter::new("N/A", false);
            counter.start(start);
            assert_eq!(counter.display(start + ms(100)), "N/A");
            assert!(counter.is_done(start));
        }
    }
}
