//! Layout components (header, navigation menu, status bar)

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::platform::{SEND_ENTER_SHORTCUT, SEND_SHORTCUT};
use crate::state::{
    NavState, PageMode, Section, SubmissionPhase, HEADER_HEIGHT, STATUS_BAR_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 20;

/// Split the screen into header, page and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),     // Header / nav
            Constraint::Min(0),                    // Page
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the name and section links
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let scrolled = NavState::header_scrolled(state.scroll.offset());

    // Past the top of the page the header gets a solid accent border
    let border_style = if scrolled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.content.name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if state.is_narrow() {
        let toggle = if state.nav.menu_open { "✕" } else { "☰" };
        spans.push(Span::styled(
            format!("{toggle} Menu (m)"),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            state.nav.active.label(),
            Style::default().fg(Color::Cyan),
        ));
    } else {
        for section in Section::ALL {
            let style = if section == state.nav.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(
                format!(" {} {} ", section.index() + 1, section.label()),
                style,
            ));
            spans.push(Span::raw(" "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the collapsed navigation menu under the header, if open
pub fn draw_menu(frame: &mut Frame, header_area: Rect, app: &App) {
    let nav = &app.state.nav;
    if !nav.menu_open {
        return;
    }

    let screen = frame.area();
    let height = (Section::ALL.len() as u16 + 2).min(screen.height.saturating_sub(header_area.bottom()));
    let width = MENU_WIDTH.min(screen.width);
    let area = Rect {
        x: screen.width.saturating_sub(width),
        y: header_area.bottom(),
        width,
        height,
    };

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            let marker = if *section == nav.active { "•" } else { " " };
            ListItem::new(format!("{marker} {} {}", section.index() + 1, section.label()))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Go to ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(Clear, area);
    render_scrollable_list(frame, area, list, nav.menu_index);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let mut spans = vec![];

    let (mode, mode_color) = match state.mode {
        PageMode::Browse => (" PAGE ", Color::Blue),
        // Red while any field still shows an error
        PageMode::Form if !app.contact.form().is_valid() => (" FORM ", Color::Red),
        PageMode::Form => (" FORM ", Color::Magenta),
    };
    spans.push(Span::styled(
        mode,
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(" "));

    if let Some((label, color)) = phase_label(app.contact.phase()) {
        spans.push(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    let hints = get_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Scroll position on the right
    let position = format!(
        " {}/{} ",
        state.scroll.offset(),
        state.max_scroll()
    );
    let width = (position.len() as u16).min(area.width);
    let position_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: area.height,
    };
    let position_widget =
        Paragraph::new(position).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(position_widget, position_area);
}

/// Submission progress shown next to the mode
fn phase_label(phase: SubmissionPhase) -> Option<(&'static str, Color)> {
    match phase {
        SubmissionPhase::Idle => None,
        SubmissionPhase::Submitting => Some(("sending…", Color::Yellow)),
        SubmissionPhase::Success => Some(("sent ✓", Color::Green)),
        SubmissionPhase::Failed => Some(("fix errors", Color::Red)),
    }
}

/// Key hints for the current input mode
fn get_hints(app: &App) -> String {
    let state = &app.state;
    match state.mode {
        PageMode::Browse if state.nav.menu_open => "↑↓:select  Enter:go  Esc:close".to_string(),
        PageMode::Browse => {
            let menu = if state.is_narrow() { "  m:menu" } else { "" };
            format!("↑↓:scroll  1-5:jump  c:contact{menu}  q:quit")
        }
        PageMode::Form if app.is_button_focused() => {
            format!("Enter:send  {SEND_SHORTCUT}:send  S-Tab:back  Esc:leave")
        }
        PageMode::Form => format!(
            "Tab:next  S-Tab:prev  {SEND_SHORTCUT}/{SEND_ENTER_SHORTCUT}:send  Esc:leave"
        ),
    }
}
