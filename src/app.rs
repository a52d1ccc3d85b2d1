//! Application state and core logic

use crate::config::FolioConfig;
use crate::host::{Haptics, NoHaptics, TerminalBell, TimerQueue};
use crate::platform::SEND_MODIFIER;
use crate::state::{
    AppState, ContactController, ContactForm, FormTimings, PageMode, Section, SubmitOutcome,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

/// Poll interval while something on screen is moving (~60fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll interval when the page is still
const IDLE_INTERVAL: Duration = Duration::from_millis(100);
/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

/// Contact form wired to the terminal host
pub type Contact = ContactController<TimerQueue, Box<dyn Haptics>>;

/// Main application struct
pub struct App {
    /// Page presentation state
    pub state: AppState,
    /// Contact form and its submission lifecycle
    pub contact: Contact,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FolioConfig, terminal_size: (u16, u16), now: Instant) -> Self {
        let haptics: Box<dyn Haptics> = if config.haptics_enabled() {
            Box::new(TerminalBell)
        } else {
            tracing::info!("Haptic feedback disabled by config");
            Box::new(NoHaptics)
        };
        Self::with_haptics(config, terminal_size, now, haptics)
    }

    pub fn with_haptics(
        config: &FolioConfig,
        terminal_size: (u16, u16),
        now: Instant,
        haptics: Box<dyn Haptics>,
    ) -> Self {
        let contact = ContactController::new(
            FormTimings::from_config(config),
            TimerQueue::new(now),
            haptics,
        );
        Self {
            state: AppState::new(config.content(), terminal_size, now),
            contact,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Fire due timers and advance animations to `now`
    pub fn tick(&mut self, now: Instant) {
        self.contact.run_due_timers(now);
        if let Some(field) = self.contact.take_focus_request() {
            tracing::debug!("Bringing {field} into view");
            self.state.mode = PageMode::Form;
            self.state.navigate_to(Section::Contact, now);
        }
        self.state.update(now);
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let base = if self.state.is_animating(now) {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        match self.contact.scheduler().time_until_next(now) {
            Some(next) => base.min(next),
            None => base,
        }
    }

    pub fn resize(&mut self, height: u16, width: u16) {
        tracing::debug!("Terminal resized to {width}x{height}");
        self.state.resize(height, width);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Timers due before this key must land first
        self.contact.run_due_timers(now);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match self.state.mode {
            PageMode::Browse if self.state.nav.menu_open => self.handle_menu_key(key, now),
            PageMode::Browse => self.handle_browse_key(key, now),
            PageMode::Form => self.handle_form_key(key, now),
        }
    }

    /// Handle a mouse event; only the wheel does anything
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.state.scroll_by(-WHEEL_ROWS),
            _ => {}
        }
    }

    /// Handle bracketed paste; only the form accepts text
    pub fn handle_paste(&mut self, text: &str, now: Instant) {
        self.contact.run_due_timers(now);
        if self.state.mode == PageMode::Form {
            self.contact.paste(text);
        }
    }

    fn page_step(&self) -> i32 {
        self.state.viewport_height().saturating_sub(1).max(1) as i32
    }

    fn handle_browse_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_by(-1),
            KeyCode::PageDown => self.state.scroll_by(self.page_step()),
            KeyCode::PageUp => self.state.scroll_by(-self.page_step()),
            KeyCode::Home => self.state.scroll_to_top(),
            KeyCode::End => self.state.scroll_to_bottom(),
            KeyCode::Char('m') if self.state.is_narrow() => self.state.nav.toggle_menu(),
            KeyCode::Tab | KeyCode::Char('c') => self.enter_form(now),
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_key(c) {
                    self.state.navigate_to(section, now);
                }
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.nav.menu_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.nav.menu_prev(),
            KeyCode::Enter => {
                let section = self.state.nav.menu_selection();
                self.state.navigate_to(section, now);
            }
            KeyCode::Esc | KeyCode::Char('m') => self.state.nav.close_menu(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_key(c) {
                    self.state.navigate_to(section, now);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        let send_chord = key.modifiers.contains(SEND_MODIFIER);
        match key.code {
            KeyCode::Esc => {
                self.contact.leave();
                self.state.mode = PageMode::Browse;
            }
            KeyCode::Tab => self.contact.focus_next(),
            KeyCode::BackTab => self.contact.focus_prev(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(now)
            }
            KeyCode::Enter if send_chord => self.submit(now),
            KeyCode::Enter => {
                let form = self.contact.form();
                if form.is_button_active() {
                    self.submit(now);
                } else if form
                    .active_field_name()
                    .is_some_and(|name| form.field(name).is_multiline)
                {
                    self.contact.input_char('\n');
                } else {
                    self.contact.focus_next();
                }
            }
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.contact.input_char(c)
            }
            _ => {}
        }
    }

    fn enter_form(&mut self, now: Instant) {
        tracing::debug!("Entering contact form");
        self.state.mode = PageMode::Form;
        self.state.navigate_to(Section::Contact, now);
    }

    fn submit(&mut self, now: Instant) {
        match self.contact.submit() {
            SubmitOutcome::Accepted => {
                // Keep the status line in view while sending
                self.state.navigate_to(Section::Contact, now);
            }
            SubmitOutcome::Rejected { first_invalid } => {
                tracing::debug!("Submit rejected, {first_invalid} will be focused");
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Whether the focused control is the submit button
    pub fn is_button_focused(&self) -> bool {
        self.state.mode == PageMode::Form
            && self.contact.form().active_field_index == ContactForm::BUTTON_INDEX
    }
}
