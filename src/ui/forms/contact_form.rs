//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::Contact;
use crate::state::{
    FieldName, StatusKind, BUTTON_ROWS, FIELD_ROWS, MESSAGE_ROWS, STATUS_ROWS,
};
use crate::ui::components::render_button;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const BUTTON_WIDTH: u16 = 22;

/// Draw the four fields, the send button and the status line.
/// `in_form` is false while the page is being browsed, so nothing shows focus.
pub fn draw_contact_form(buf: &mut Buffer, area: Rect, contact: &Contact, in_form: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_ROWS),   // Name
            Constraint::Length(FIELD_ROWS),   // Email
            Constraint::Length(FIELD_ROWS),   // Subject
            Constraint::Length(MESSAGE_ROWS), // Message
            Constraint::Length(BUTTON_ROWS),  // Send
            Constraint::Length(STATUS_ROWS),  // Status
        ])
        .split(area);

    let form = contact.form();
    for name in FieldName::ALL {
        let is_active = in_form && form.active_field_index == name.index();
        draw_field(buf, chunks[name.index()], form.field(name), is_active);
    }

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BUTTON_WIDTH), Constraint::Min(0)])
        .split(chunks[4])[0];
    render_button(
        buf,
        button_area,
        contact.submit_label(),
        in_form && form.is_button_active(),
        !contact.is_busy(),
    );

    draw_status(buf, chunks[5], contact);
}

fn draw_status(buf: &mut Buffer, area: Rect, contact: &Contact) {
    let status = contact.status();
    if !status.is_visible() {
        return;
    }
    let (icon, style) = match status.kind {
        StatusKind::Success if status.fading => (
            "✓",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ),
        StatusKind::Success => (
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        StatusKind::Error | StatusKind::None => ("✗", Style::default().fg(Color::Red)),
    };

    Paragraph::new(Line::from(vec![
        Span::styled(format!("{icon} "), style),
        Span::styled(status.message.as_str(), style),
    ]))
    .wrap(Wrap { trim: true })
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Haptics, NoHaptics, TimerQueue};
    use crate::state::{ContactController, FormTimings, CONTACT_FORM_ROWS};
    use std::time::{Duration, Instant};

    fn contact(now: Instant) -> Contact {
        let haptics: Box<dyn Haptics> = Box::new(NoHaptics);
        ContactController::new(FormTimings::default(), TimerQueue::new(now), haptics)
    }

    fn render(contact: &Contact, in_form: bool) -> Buffer {
        let area = Rect::new(0, 0, 70, CONTACT_FORM_ROWS);
        let mut buf = Buffer::empty(area);
        draw_contact_form(&mut buf, area, contact, in_form);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn page_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_idle_form_layout() {
        let contact = contact(Instant::now());
        let buf = render(&contact, false);

        assert!(row_text(&buf, 0).contains(" Name "));
        assert!(row_text(&buf, 3).contains(" Email "));
        assert!(row_text(&buf, 6).contains(" Subject "));
        assert!(row_text(&buf, 9).contains(" Message "));
        assert!(row_text(&buf, 16).contains("Send Message"));
        assert_eq!(row_text(&buf, 18).trim(), "");
    }

    #[test]
    fn test_rejected_submit_shows_errors_and_status() {
        let mut contact = contact(Instant::now());
        contact.submit();
        let buf = render(&contact, true);
        let text = page_text(&buf);

        assert!(text.contains("Name is required"));
        assert!(text.contains("Email is required"));
        assert!(row_text(&buf, 18).contains("Please correct the errors above and try again."));
    }

    #[test]
    fn test_sending_label_while_busy() {
        let now = Instant::now();
        let mut contact = contact(now);
        contact.edit_field(FieldName::Name, "Ada Lovelace".to_string());
        contact.edit_field(FieldName::Email, "ada@example.com".to_string());
        contact.edit_field(FieldName::Subject, "Analytical engines".to_string());
        contact.edit_field(
            FieldName::Message,
            "Hello there, I enjoyed your notes on the engine.".to_string(),
        );
        contact.submit();

        let buf = render(&contact, true);
        assert!(row_text(&buf, 16).contains("Sending..."));

        contact.run_due_timers(now + Duration::from_millis(1000));
        let buf = render(&contact, true);
        assert!(row_text(&buf, 18).contains("Thank you for your message!"));
        assert!(row_text(&buf, 16).contains("Send Message"));
    }
}
