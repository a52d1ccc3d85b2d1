//! Application state definitions

use super::content::PortfolioContent;
use super::counter::StatCounter;
use super::navigation::{NavState, PageLayout, Section};
use super::reveal::RevealState;
use super::scroll::PageScroll;
use super::typewriter::TypewriterState;
use std::time::Instant;

/// Rows above the page used by the header/nav bar
pub const HEADER_HEIGHT: u16 = 3;
/// Rows below the page used by the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// What keyboard input is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    /// Scrolling and navigating the page
    #[default]
    Browse,
    /// Typing into the contact form
    Form,
}

/// Presentation state of the scrolling page
#[derive(Debug)]
pub struct AppState {
    pub content: PortfolioContent,
    pub layout: PageLayout,
    pub nav: NavState,
    pub scroll: PageScroll,
    pub reveal: RevealState,
    pub typewriter: TypewriterState,
    pub counters: Vec<StatCounter>,
    pub mode: PageMode,
    /// Section explicitly navigated to; holds the highlight until the user
    /// scrolls by hand
    pinned: Option<Section>,
    /// Terminal size (height, width)
    terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(content: PortfolioContent, terminal_size: (u16, u16), now: Instant) -> Self {
        let narrow = NavState::is_narrow(terminal_size.1);
        let layout = PageLayout::compute(&content, terminal_size.1);
        let typewriter = TypewriterState::new(&content.subtitle, now, narrow);
        let counters = content
            .stats
            .iter()
            .map(|stat| StatCounter::new(&stat.value, narrow))
            .collect();

        let mut state = Self {
            content,
            layout,
            nav: NavState::default(),
            scroll: PageScroll::default(),
            reveal: RevealState::default(),
            typewriter,
            counters,
            mode: PageMode::Browse,
            pinned: None,
            terminal_size,
        };
        state.update(now);
        state
    }

    pub fn is_narrow(&self) -> bool {
        NavState::is_narrow(self.terminal_size.1)
    }

    /// Rows available to the page between header and status bar
    pub fn viewport_height(&self) -> u16 {
        self.terminal_size
            .0
            .saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT)
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.viewport_height())
    }

    pub fn resize(&mut self, height: u16, width: u16) {
        self.terminal_size = (height, width);
        self.layout = PageLayout::compute(&self.content, width);
        self.nav.on_resize(width);
        let max = self.max_scroll();
        self.scroll.clamp(max);
    }

    /// Smooth-scroll to a section and highlight it
    pub fn navigate_to(&mut self, section: Section, now: Instant) {
        tracing::debug!("Navigating to {section:?}");
        self.nav.select(section);
        self.pinned = Some(section);
        let max = self.max_scroll();
        self.scroll
            .scroll_to(self.layout.span(section).top, max, now);
    }

    /// Scroll by hand. Ignored while the menu is open.
    pub fn scroll_by(&mut self, delta: i32) {
        if self.nav.menu_open {
            return;
        }
        self.pinned = None;
        let max = self.max_scroll();
        self.scroll.scroll_by(delta, max);
    }

    pub fn scroll_to_top(&mut self) {
        self.pinned = None;
        let max = self.max_scroll();
        self.scroll.jump_to(0, max);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.pinned = None;
        let max = self.max_scroll();
        self.scroll.jump_to(max, max);
    }

    /// Advance scroll animation, active link, reveals and counters to `now`
    pub fn update(&mut self, now: Instant) {
        let offset = self.scroll.update(now);

        match self.pinned {
            Some(section) => self.nav.active = section,
            None => self.nav.update_from_scroll(&self.layout, offset),
        }

        for section in self.layout.visible_sections(offset, self.viewport_height()) {
            if self.reveal.reveal(section, now) && section == Section::Home {
                for counter in &mut self.counters {
                    counter.start(now);
                }
            }
        }
    }

    /// Whether anything on screen is still moving
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.is_animating()
            || self.typewriter.cursor_visible(now)
            || self.counters.iter().any(|c| !c.is_done(now))
            || Section::ALL
                .iter()
                .any(|&s| self.reveal.is_revealed(s) && self.reveal.progress(s, now) < 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn state_at(start: Instant) -> AppState {
        AppState::new(PortfolioContent::default(), (24, 100), start)
    }

    #[test]
    fn test_new_reveals_home_and_starts_counters() {
        let start = Instant::now();
        let state = state_at(start);
        assert!(state.reveal.is_revealed(Section::Home));
        assert!(state.counters.iter().all(|c| c.is_started()));
        assert_eq!(state.nav.active, Section::Home);
        assert_eq!(state.mode, PageMode::Browse);
    }

    #[test]
    fn test_viewport_excludes_header_and_status_bar() {
        let state = state_at(Instant::now());
        assert_eq!(state.viewport_height(), 20);
    }

    #[test]
    fn test_navigate_to_scrolls_and_pins_active() {
        let start = Instant::now();
        let mut state = state_at(start);
        state.navigate_to(Section::Contact, start);
        assert_eq!(state.nav.active, Section::Contact);

        state.update(start + ms(800));
        assert_eq!(state.scroll.offset(), state.layout.span(Section::Contact).top);
        assert_eq!(state.nav.active, Section::Contact);
        assert!(state.reveal.is_revealed(Section::Contact));
    }

    #[test]
    fn test_pinned_section_survives_clamped_scroll() {
        let start = Instant::now();
        // Tall terminal: the page can barely scroll, Contact never reaches the top
        let mut state = AppState::new(PortfolioContent::default(), (64, 100), start);
        state.navigate_to(Section::Contact, start);
        state.update(start + ms(800));
        assert_eq!(state.scroll.offset(), state.max_scroll());
        assert_eq!(state.nav.active, Section::Contact);
    }

    #[test]
    fn test_manual_scroll_unpins() {
        let start = Instant::now();
        let mut state = state_at(start);
        state.navigate_to(Section::Contact, start);
        state.update(start + ms(800));

        state.scroll_to_top();
        state.update(start + ms(900));
        assert_eq!(state.nav.active, Section::Home);
    }

    #[test]
    fn test_scroll_ignored_while_menu_open() {
        let mut state = state_at(Instant::now());
        state.nav.toggle_menu();
        state.scroll_by(5);
        assert_eq!(state.scroll.offset(), 0);
        state.nav.close_menu();
        state.scroll_by(5);
        assert_eq!(state.scroll.offset(), 5);
    }

    #[test]
    fn test_scrolling_reveals_sections_once() {
        let start = Instant::now();
        let mut state = state_at(start);
        assert!(!state.reveal.is_revealed(Section::Skills));

        let skills_top = state.layout.span(Section::Skills).top;
        state.scroll_by(skills_top as i32);
        state.update(start + ms(10));
        assert!(state.reveal.is_revealed(Section::Skills));
        assert_eq!(state.nav.active, Section::Skills);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut state = state_at(Instant::now());
        state.scroll_to_bottom();
        let before = state.scroll.offset();
        state.resize(60, 100);
        assert!(state.scroll.offset() < before);
        assert_eq!(state.scroll.offset(), state.max_scroll());
    }

    #[test]
    fn test_resize_relayouts_for_width() {
        let mut state = state_at(Instant::now());
        let wide_about = state.layout.span(Section::About).height;
        state.resize(24, 30);
        assert!(state.layout.span(Section::About).height > wide_about);
        assert_eq!(state.layout, PageLayout::compute(&state.content, 30));
    }

    #[test]
    fn test_animation_settles() {
        let start = Instant::now();
        let state = state_at(start);
        assert!(state.is_animating(start));
        assert!(!state.is_animating(start + ms(60_000)));
    }
}
