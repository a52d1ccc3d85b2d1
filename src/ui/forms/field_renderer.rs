//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Draw a form field. A field with an error gets a red border and its
/// message in the bottom edge.
pub fn draw_field(buf: &mut Buffer, area: Rect, field: &FormField, is_active: bool) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = match (field.error().is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let display_value = field.display_value();
    let placeholder = display_value.is_empty() && !is_active;
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if placeholder {
        Paragraph::new(Line::from(Span::styled(
            format!("Your {}", field.name.identifier()),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        // Keep the line being typed in view
        let inner_rows = area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(inner_rows);
        Paragraph::new(lines.split_off(skip))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            cursor,
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if field.error().is_some() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", field.error_message()),
            Style::default().fg(Color::Red),
        )));
    }

    content
        .wrap(Wrap { trim: false })
        .block(block)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_error_shows_in_bottom_border() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        let mut field = FormField::text(FieldName::Name, "Name", false);
        field.validate();

        draw_field(&mut buf, area, &field, false);

        assert!(row_text(&buf, 0).contains(" Name "));
        assert!(row_text(&buf, 2).contains("Name is required"));
        assert_eq!(buf.cell((0, 0)).unwrap().fg, Color::Red);
    }

    #[test]
    fn test_active_field_shows_value_and_cursor() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        let field =
            FormField::text_with_value(FieldName::Email, "Email", "a@b.co".to_string(), false);

        draw_field(&mut buf, area, &field, true);

        assert!(row_text(&buf, 1).contains("a@b.co▌"));
        assert_eq!(buf.cell((0, 0)).unwrap().fg, Color::Cyan);
    }

    #[test]
    fn test_empty_inactive_field_shows_placeholder() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        let field = FormField::text(FieldName::Subject, "Subject", false);

        draw_field(&mut buf, area, &field, false);

        assert!(row_text(&buf, 1).contains("Your subject"));
    }

    #[test]
    fn test_long_message_keeps_last_lines_visible() {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let field = FormField::text_with_value(
            FieldName::Message,
            "Message",
            "one\ntwo\nthree".to_string(),
            true,
        );

        draw_field(&mut buf, area, &field, true);

        assert!(row_text(&buf, 1).contains("two"));
        assert!(row_text(&buf, 2).contains("three▌"));
    }
}
