//! Page sections, their vertical layout and the navigation menu

use super::content::PortfolioContent;
use ratatui::{
    text::Line,
    widgets::{Paragraph, Wrap},
};

/// Rows between the viewport top and the probe that decides the active section
const ACTIVE_PROBE_OFFSET: u16 = 2;
/// Scroll offset past which the header switches to its scrolled style
const HEADER_SCROLL_THRESHOLD: u16 = 5;
/// Terminals this wide or narrower collapse the nav links behind a toggle
pub const NARROW_WIDTH: u16 = 80;

/// Rows used by a section's border
const BORDER_ROWS: u16 = 2;
/// Columns used by a section's border
const BORDER_COLS: u16 = 2;
/// Hero inner rows: blank, name, blank, subtitle, blank, stats (3), blank, hint
pub const HOME_INNER_ROWS: u16 = 10;
/// Contact form rows: three single-line fields, the message, button, status
pub const FIELD_ROWS: u16 = 3;
pub const MESSAGE_ROWS: u16 = 6;
pub const BUTTON_ROWS: u16 = 3;
pub const STATUS_ROWS: u16 = 1;
pub const CONTACT_FORM_ROWS: u16 = FIELD_ROWS * 3 + MESSAGE_ROWS + BUTTON_ROWS + STATUS_ROWS;

/// In-page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Skills => 2,
            Self::Projects => 3,
            Self::Contact => 4,
        }
    }

    /// Section bound to a number key (`'1'` = Home)
    pub fn from_key(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

/// Vertical extent of one section within the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }

    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// Row positions of every section in the scrolling page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
}

impl PageLayout {
    /// Lay the sections out for a page `width` columns wide. Text sections
    /// are as tall as their content once word-wrapped inside the border.
    pub fn compute(content: &PortfolioContent, width: u16) -> Self {
        let text_width = width.saturating_sub(BORDER_COLS);
        let inner = |section: Section| match section {
            Section::Home => HOME_INNER_ROWS,
            Section::About => wrapped_rows(&content.about_lines(), text_width),
            Section::Skills => wrapped_rows(&content.skill_lines(), text_width),
            Section::Projects => wrapped_rows(&content.project_lines(), text_width),
            Section::Contact => content.contact.len() as u16 + 1 + CONTACT_FORM_ROWS,
        };

        let mut top = 0;
        let spans = Section::ALL
            .iter()
            .map(|&section| {
                let height = BORDER_ROWS + inner(section).max(1);
                let span = SectionSpan {
                    section,
                    top,
                    height,
                };
                top += height;
                span
            })
            .collect();
        Self { spans }
    }

    #[cfg(test)]
    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, section: Section) -> SectionSpan {
        self.spans[section.index()]
    }

    pub fn total_height(&self) -> u16 {
        self.spans.last().map(|s| s.bottom()).unwrap_or(0)
    }

    /// Largest scroll offset that still fills a viewport of `viewport` rows
    pub fn max_scroll(&self, viewport: u16) -> u16 {
        self.total_height().saturating_sub(viewport)
    }

    pub fn section_at(&self, row: u16) -> Option<Section> {
        self.spans.iter().find(|s| s.contains(row)).map(|s| s.section)
    }

    /// Sections overlapping the viewport
    pub fn visible_sections(&self, scroll: u16, viewport: u16) -> Vec<Section> {
        let end = scroll.saturating_add(viewport);
        self.spans
            .iter()
            .filter(|s| s.top < end && s.bottom() > scroll)
            .map(|s| s.section)
            .collect()
    }
}

/// Rows `lines` take once word-wrapped to `width` columns
fn wrapped_rows(lines: &[String], width: u16) -> u16 {
    let text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
    let rows = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Navigation bar state
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub active: Section,
    /// Collapsed menu opened on a narrow terminal
    pub menu_open: bool,
    /// Highlighted entry while the menu is open
    pub menu_index: usize,
}

impl NavState {
    pub fn is_narrow(width: u16) -> bool {
        width <= NARROW_WIDTH
    }

    pub fn header_scrolled(scroll: u16) -> bool {
        scroll > HEADER_SCROLL_THRESHOLD
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_index = self.active.index();
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % Section::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        let count = Section::ALL.len();
        self.menu_index = (self.menu_index + count - 1) % count;
    }

    pub fn menu_selection(&self) -> Section {
        Section::ALL[self.menu_index.min(Section::ALL.len() - 1)]
    }

    /// Jump to a section from a link; closes the menu
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.close_menu();
    }

    /// Track the section under the probe row
    pub fn update_from_scroll(&mut self, layout: &PageLayout, scroll: u16) {
        if let Some(section) = layout.section_at(scroll.saturating_add(ACTIVE_PROBE_OFFSET)) {
            self.active = section;
        }
    }

    pub fn on_resize(&mut self, width: u16) {
        if !Self::is_narrow(width) && self.menu_open {
            tracing::debug!("Terminal widened to {width}, closing menu");
            self.close_menu();
        }
    }
}
