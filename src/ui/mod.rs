//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod page;
mod sections;
mod widgets;

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    let (header_area, page_area, status_area) = layout::create_layout(area);

    // Page first so the header and menu overlay sit on top of it
    page::draw(frame, page_area, app, now);
    layout::draw_header(frame, header_area, app);
    layout::draw_status_bar(frame, status_area, app);
    layout::draw_menu(frame, header_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use crate::host::NoHaptics;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn screen_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &App, now: Instant, size: (u16, u16)) -> String {
        let backend = TestBackend::new(size.1, size.0);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app, now)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn test_first_screen_shows_header_hero_and_status() {
        let start = Instant::now();
        let app = App::with_haptics(&FolioConfig::default(), (24, 100), start, Box::new(NoHaptics));
        let out = render(&app, start, (24, 100));

        assert!(out.contains(" 1 Home "));
        assert!(out.contains(" 5 Contact "));
        assert!(out.contains("Press c to get in touch"));
        assert!(out.contains(" PAGE "));
    }

    #[test]
    fn test_narrow_screen_collapses_links_into_menu() {
        let start = Instant::now();
        let mut app =
            App::with_haptics(&FolioConfig::default(), (24, 60), start, Box::new(NoHaptics));
        let closed = render(&app, start, (24, 60));
        assert!(closed.contains("Menu (m)"));
        assert!(!closed.contains(" Go to "));

        app.state.nav.toggle_menu();
        let open = render(&app, start, (24, 60));
        assert!(open.contains(" Go to "));
        assert!(open.contains("3 Skills"));
    }
}
