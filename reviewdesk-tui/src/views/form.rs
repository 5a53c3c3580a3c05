//! Note capture form view.

use crate::nav::Focus;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use reviewdesk_core::NoteField;

const CURSOR: char = '▏';

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let outer = super::pane_block(app, "New Note", Focus::Form);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let suggestions = if app.focus == Focus::Form {
        app.form.suggestions(&app.store)
    } else {
        Vec::new()
    };
    let suggestion_rows = if suggestions.is_empty() {
        0
    } else {
        suggestions.len().min(5) as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(suggestion_rows),
        ])
        .split(inner);

    for (field, chunk) in NoteField::ALL.iter().zip(chunks.iter()) {
        render_field(f, app, *field, *chunk);
    }

    if !suggestions.is_empty() {
        render_suggestions(f, app, &suggestions, chunks[5]);
    }
}

fn render_field(f: &mut Frame<'_>, app: &App, field: NoteField, area: Rect) {
    let active = app.focus == Focus::Form && app.form.active == field;
    let title = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let mut value = app.form.value(field).to_string();
    if active {
        value.push(CURSOR);
    }

    let border = if active {
        app.theme.border_focus
    } else {
        app.theme.border
    };
    let paragraph = Paragraph::new(value)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame<'_>, app: &App, suggestions: &[String], area: Rect) {
    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|s| ListItem::new(s.as_str()))
        .collect();
    let mut state = ListState::default();
    state.select(app.form.suggestion);

    let list = List::new(items)
        .block(
            Block::default()
                .title("Suggestions (↑/↓, Enter)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.primary_dim)),
        )
        .highlight_style(
            Style::default()
                .fg(app.theme.secondary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, area, &mut state);
}
