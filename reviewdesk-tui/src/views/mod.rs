//! View rendering dispatch.

pub mod form;
pub mod notes;
pub mod report;

use crate::nav::Focus;
use crate::state::App;
use crate::theme::{notification_color, report_state_color};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let area = f.size();
    f.render_widget(Block::default().style(Style::default().bg(app.theme.bg)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(f, app, layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[1]);

    form::render(f, app, columns[0]);

    if app.report_visible() {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(columns[1]);
        notes::render(f, app, right[0]);
        report::render(f, app, right[1]);
    } else {
        notes::render(f, app, columns[1]);
    }

    render_footer(f, app, layout[2]);
}

/// Bordered block whose border lights up when the pane has focus.
pub(crate) fn pane_block<'a>(app: &App, title: &'a str, pane: Focus) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_for(app.focus == pane)))
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let count = app.store.len();
    let noun = if count == 1 { "note" } else { "notes" };
    let line = Line::from(vec![
        Span::styled(
            "Business Review Notes",
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" | {} {} captured", count, noun),
            Style::default().fg(app.theme.text_dim),
        ),
        Span::raw(" | "),
        Span::styled(
            app.report.label(),
            Style::default().fg(report_state_color(&app.report, &app.theme)),
        ),
    ]);
    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (text, style) = match app.notifications.last() {
        Some(note) => (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ),
        None => (
            app.focus.help().to_string(),
            Style::default().fg(app.theme.text_dim),
        ),
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
