//! Page sections, each drawn into its own slice of the page buffer

use super::forms::draw_contact_form;
use crate::app::App;
use crate::state::{tag_chip, InfoItem, PageMode, Section, CONTACT_FORM_ROWS, TAG_SPACE};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use std::time::Instant;

/// Draw one bordered section into `rect` of the page buffer
pub fn draw_section(buf: &mut Buffer, rect: Rect, section: Section, app: &App, now: Instant) {
    let border_color = if app.state.nav.active == section {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", section.index() + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{} ", section.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(rect);
    block.render(rect, buf);

    match section {
        Section::Home => draw_home(buf, inner, app, now),
        Section::About => draw_about(buf, inner, app),
        Section::Skills => draw_skills(buf, inner, app, now),
        Section::Projects => draw_projects(buf, inner, app),
        Section::Contact => draw_contact(buf, inner, app),
    }
}

fn draw_home(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
    let content = &app.state.content;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Stats
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hint
        ])
        .split(area);

    Paragraph::new(Span::styled(
        content.name.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    let typewriter = &app.state.typewriter;
    let mut subtitle = vec![Span::raw(typewriter.visible_text(now))];
    if typewriter.cursor_visible(now) {
        subtitle.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    Paragraph::new(Line::from(subtitle))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

    draw_stats(buf, chunks[5], app, now);

    Paragraph::new(Span::styled(
        "Press c to get in touch",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[7], buf);
}

fn draw_stats(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
    let stats = &app.state.content.stats;
    if stats.is_empty() {
        return;
    }
    let count = stats.len() as u32;
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(stats.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for ((stat, counter), rect) in stats.iter().zip(&app.state.counters).zip(boxes.iter()) {
        Paragraph::new(Line::from(vec![
            Span::styled(
                counter.display(now),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(stat.label.as_str(), Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(*rect, buf);
    }
}

fn info_line(item: &InfoItem) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", item.label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(item.value.as_str()),
    ])
}

fn draw_about(buf: &mut Buffer, area: Rect, app: &App) {
    let content = &app.state.content;
    let mut lines: Vec<Line> = content
        .about
        .iter()
        .map(|p| Line::from(p.as_str()))
        .collect();
    lines.push(Line::default());
    lines.extend(content.info.iter().map(info_line));
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn draw_skills(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
    let reveal = &app.state.reveal;
    let mut lines = Vec::new();
    let mut tag_index = 0;

    for (i, category) in app.state.content.skills.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            category.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let mut tags = Vec::new();
        for (j, tag) in category.tags.iter().enumerate() {
            if j > 0 {
                tags.push(Span::raw(" "));
            }
            // Tags pop in one after another; hidden ones keep their space
            let chip = tag_chip(tag);
            if reveal.skill_tag_visible(tag_index, now) {
                tags.push(Span::styled(
                    chip,
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ));
            } else {
                tags.push(Span::raw(TAG_SPACE.to_string().repeat(chip.chars().count())));
            }
            tag_index += 1;
        }
        lines.push(Line::from(tags));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn draw_projects(buf: &mut Buffer, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for (i, project) in app.state.content.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            project.name.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(project.description.as_str()));
        lines.push(Line::from(Span::styled(
            project.tech.join(" · "),
            Style::default().fg(Color::DarkGray),
        )));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn draw_contact(buf: &mut Buffer, area: Rect, app: &App) {
    let info_rows = app.state.content.contact.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(info_rows),
            Constraint::Length(1),
            Constraint::Length(CONTACT_FORM_ROWS),
        ])
        .split(area);

    let lines: Vec<Line> = app.state.content.contact.iter().map(info_line).collect();
    Paragraph::new(lines).render(chunks[0], buf);

    draw_contact_form(
        buf,
        chunks[2],
        &app.contact,
        app.state.mode == PageMode::Form,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use crate::host::NoHaptics;
    use std::time::Duration;

    fn app_at(start: Instant) -> App {
        app_sized(start, 100)
    }

    fn app_sized(start: Instant, width: u16) -> App {
        App::with_haptics(&FolioConfig::default(), (24, width), start, Box::new(NoHaptics))
    }

    fn render(app: &App, section: Section, now: Instant) -> Buffer {
        render_width(app, section, now, 100)
    }

    fn render_width(app: &App, section: Section, now: Instant, width: u16) -> Buffer {
        let span = app.state.layout.span(section);
        let rect = Rect::new(0, 0, width, span.height);
        let mut buf = Buffer::empty(rect);
        draw_section(&mut buf, rect, section, app, now);
        buf
    }

    fn text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_home_shows_name_and_counted_stats() {
        let start = Instant::now();
        let app = app_at(start);
        let buf = render(&app, Section::Home, start + Duration::from_secs(10));
        let out = text(&buf);

        assert!(out.contains("1 Home"));
        assert!(out.contains(&app.state.content.name));
        assert!(out.contains(&app.state.content.subtitle));
        assert!(out.contains("50+"));
    }

    #[test]
    fn test_home_subtitle_is_typed_out() {
        let start = Instant::now();
        let app = app_at(start);
        let early = text(&render(&app, Section::Home, start));
        assert!(!early.contains(&app.state.content.subtitle));
    }

    #[test]
    fn test_skill_tags_hidden_until_revealed() {
        let start = Instant::now();
        let app = app_at(start);
        let first_tag = app.state.content.skills[0].tags[0].clone();

        // Skills is off screen at start, so its tags have not popped in
        let before = text(&render(&app, Section::Skills, start));
        assert!(before.contains(&app.state.content.skills[0].name));
        assert!(!before.contains(&first_tag));
    }

    #[test]
    fn test_contact_lists_info_and_form() {
        let start = Instant::now();
        let app = app_at(start);
        let out = text(&render(&app, Section::Contact, start));

        for item in &app.state.content.contact {
            assert!(out.contains(&item.value));
        }
        assert!(out.contains("Send Message"));
    }

    #[test]
    fn test_narrow_about_wraps_without_losing_text() {
        let start = Instant::now();
        let app = app_sized(start, 30);
        let out = text(&render_width(&app, Section::About, start, 30));

        // Last info item still lands inside the section
        assert!(out.contains("Availability:"));
        assert!(out.contains("projects"));
        assert!(out.contains("maintainable"));
    }

    #[test]
    fn test_narrow_skill_tags_wrap_whole() {
        let start = Instant::now();
        let app = app_sized(start, 30);
        let late = start + Duration::from_secs(60);
        let out = text(&render_width(&app, Section::Skills, late, 30));
        assert!(!out.contains(&app.state.content.skills[0].tags[0]));

        let mut app = app_sized(start, 30);
        let skills_top = app.state.layout.span(Section::Skills).top;
        app.state.scroll_by(skills_top as i32);
        app.tick(start);
        let out = text(&render_width(&app, Section::Skills, late, 30));
        for category in &app.state.content.skills {
            for tag in &category.tags {
                assert!(out.contains(tag.as_str()), "{tag} missing");
            }
        }
    }
}
