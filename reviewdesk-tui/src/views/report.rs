//! Report view.

use crate::nav::Focus;
use crate::state::App;
use crate::widgets::StatusIndicator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    StatusIndicator::for_report(&app.report, &app.theme).render(f, chunks[0]);

    let body = if let Some(content) = app.report.content() {
        markdown_text(content, app)
    } else if let Some(message) = app.report.error() {
        Text::from(Line::from(Span::styled(
            message,
            Style::default().fg(app.theme.error),
        )))
    } else if app.report.is_generating() {
        Text::from(Line::from(Span::styled(
            "Synthesizing notes into a report...",
            Style::default().fg(app.theme.tertiary),
        )))
    } else {
        Text::default()
    };

    let paragraph = Paragraph::new(body)
        .block(super::pane_block(app, "Generated Report", Focus::Report))
        .wrap(Wrap { trim: false })
        .scroll((app.report_scroll, 0));
    f.render_widget(paragraph, chunks[1]);
}

/// Light styling for Markdown headings; everything else is shown verbatim.
fn markdown_text<'a>(content: &'a str, app: &App) -> Text<'a> {
    let heading = Style::default()
        .fg(app.theme.primary)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = content
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                Line::from(Span::styled(line, heading))
            } else {
                Line::from(line)
            }
        })
        .collect();
    Text::from(lines)
}
