//! Scrolling page compositor
//!
//! The whole page is laid out in an off-screen buffer as tall as every
//! section stacked together. Only the rows under the scroll offset are
//! copied into the frame.

use super::sections::draw_section;
use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use std::time::Instant;

/// Draw the visible window of the page into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let state = &app.state;
    let offset = state.scroll.offset();
    let mut page = Buffer::empty(Rect::new(0, 0, area.width, state.layout.total_height()));

    for section in state.layout.visible_sections(offset, area.height) {
        let span = state.layout.span(section);
        let rect = Rect::new(0, span.top, area.width, span.height);
        draw_section(&mut page, rect, section, app, now);
        apply_reveal(&mut page, rect, state.reveal.progress(section, now));
    }

    blit(&page, frame.buffer_mut(), area, offset);
}

/// Fade a section in: hidden, then dim, then normal
fn apply_reveal(page: &mut Buffer, rect: Rect, progress: f32) {
    if progress >= 1.0 {
        return;
    }
    let style = if progress < 0.5 {
        Style::default()
            .fg(Color::DarkGray)
            .bg(Color::Reset)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    page.set_style(rect, style);
}

/// Copy rows `offset..offset + area.height` of `page` into `target` at `area`
fn blit(page: &Buffer, target: &mut Buffer, area: Rect, offset: u16) {
    for row in 0..area.height {
        let src_y = offset.saturating_add(row);
        if src_y >= page.area.height {
            break;
        }
        for col in 0..area.width.min(page.area.width) {
            if let (Some(src), Some(dst)) = (
                page.cell((col, src_y)),
                target.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;
    use ratatui::widgets::{Paragraph, Widget};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn numbered_page(rows: u16) -> Buffer {
        let area = Rect::new(0, 0, 8, rows);
        let mut page = Buffer::empty(area);
        let lines: Vec<Line> = (0..rows).map(|i| Line::from(format!("row {i}"))).collect();
        Paragraph::new(lines).render(area, &mut page);
        page
    }

    #[test]
    fn test_blit_copies_window_at_offset() {
        let page = numbered_page(10);
        let area = Rect::new(0, 1, 8, 3);
        let mut target = Buffer::empty(Rect::new(0, 0, 8, 5));

        blit(&page, &mut target, area, 4);

        assert_eq!(row_text(&target, 0).trim(), "");
        assert_eq!(row_text(&target, 1).trim(), "row 4");
        assert_eq!(row_text(&target, 3).trim(), "row 6");
        assert_eq!(row_text(&target, 4).trim(), "");
    }

    #[test]
    fn test_blit_stops_at_page_end() {
        let page = numbered_page(3);
        let area = Rect::new(0, 0, 8, 5);
        let mut target = Buffer::empty(area);

        blit(&page, &mut target, area, 1);

        assert_eq!(row_text(&target, 1).trim(), "row 2");
        assert_eq!(row_text(&target, 2).trim(), "");
    }

    #[test]
    fn test_reveal_dims_until_complete() {
        let area = Rect::new(0, 0, 4, 1);
        let mut page = Buffer::empty(area);
        apply_reveal(&mut page, area, 0.0);
        assert_eq!(page.cell((0, 0)).unwrap().fg, Color::DarkGray);

        let mut page = Buffer::empty(area);
        apply_reveal(&mut page, area, 1.0);
        assert_eq!(page.cell((0, 0)).unwrap().fg, Color::Reset);
    }
}
