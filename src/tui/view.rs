//! Session rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::{Mode, ScrollMarker, Session};
use super::keys::{Binding, FULL_HELP, SHORT_HELP};
use crate::domain::{Note, Priority, State};

/// Rows taken by the help footer.
pub fn help_height(show_help: bool) -> u16 {
    if show_help { FULL_HELP.len() as u16 } else { 1 }
}

/// Rows left for the note list on a terminal `total` rows tall.
pub fn list_height(total: u16, show_help: bool) -> usize {
    total.saturating_sub(help_height(show_help)) as usize
}

pub fn render(f: &mut Frame<'_>, session: &Session) {
    let area = f.size();

    if session.mode() == Mode::Add {
        render_prompt(f, session, area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(help_height(session.show_help())),
        ])
        .split(area);

    render_list(f, session, layout[0]);
    render_help(f, session.show_help(), layout[1]);
}

fn render_prompt(f: &mut Frame<'_>, session: &Session, area: Rect) {
    let line = if session.input().is_empty() {
        Line::from(vec![
            Span::raw("> "),
            Span::styled("Task", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw("> "), Span::raw(session.input().to_string())])
    };
    f.render_widget(Paragraph::new(line), area);

    let typed = session.input().chars().count() as u16;
    f.set_cursor(area.x + 2 + typed, area.y);
}

fn render_list(f: &mut Frame<'_>, session: &Session, area: Rect) {
    let overflowing = session.overflowing();
    let lines: Vec<Line> = session
        .visible()
        .map(|(index, note)| {
            let mut spans = Vec::new();
            if overflowing {
                spans.push(Span::raw(format!("{} \u{2502} ", marker(session.scroll_marker(index)))));
            }
            let cursor = if index == session.cursor() { ">" } else { " " };
            spans.push(Span::raw(format!("{cursor} ")));
            spans.extend(note_spans(note));
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn marker(marker: ScrollMarker) -> char {
    match marker {
        ScrollMarker::None => ' ',
        ScrollMarker::Above => '\u{2191}',
        ScrollMarker::Below => '\u{2193}',
        ScrollMarker::Both => '\u{2195}',
    }
}

fn note_spans(note: &Note) -> Vec<Span<'_>> {
    let glyph = match note.priority() {
        Priority::Low => Span::styled("\u{2193}", Style::default().fg(Color::Blue)),
        Priority::Medium => Span::raw("-"),
        Priority::High => Span::styled("\u{2191}", Style::default().fg(Color::Red)),
    };
    let contents_style = match note.state() {
        State::None => Style::default(),
        State::Todo => Style::default().fg(Color::LightRed),
        State::InProgress => Style::default().fg(Color::LightYellow),
        State::Complete => Style::default().fg(Color::LightGreen),
    };

    vec![
        Span::raw("("),
        glyph,
        Span::raw(") - "),
        Span::styled(note.contents(), contents_style),
    ]
}

fn render_help(f: &mut Frame<'_>, show_help: bool, area: Rect) {
    let lines: Vec<Line> = if show_help {
        FULL_HELP.iter().map(|row| help_line(row)).collect()
    } else {
        vec![help_line(SHORT_HELP)]
    };
    f.render_widget(Paragraph::new(lines), area);
}

fn help_line(bindings: &[Binding]) -> Line<'static> {
    let key_style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", desc_style));
        }
        spans.push(Span::styled(binding.keys, key_style));
        spans.push(Span::styled(format!(" {}", binding.description), desc_style));
    }
    Line::from(spans)
}
