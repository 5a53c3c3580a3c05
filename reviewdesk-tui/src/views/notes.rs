//! Captured notes view.

use crate::nav::Focus;
use crate::state::App;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let notes = app.store.list_notes();

    if notes.is_empty() {
        let empty = Paragraph::new("No notes yet. Fill in the form and press Ctrl-S.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(super::pane_block(app, "Notes", Focus::Notes))
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = notes
        .iter()
        .map(|note| ListItem::new(format!("{} [{} / {}]", note.title, note.category, note.owner)))
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = app.selected {
        state.select(notes.iter().position(|n| n.note_id == selected));
    }

    let list = List::new(items)
        .block(super::pane_block(app, "Notes", Focus::Notes))
        .highlight_style(Style::default().fg(app.theme.primary).bg(app.theme.bg_highlight))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[0], &mut state);

    let Some(note) = app.selected_note() else {
        return;
    };

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(chunks[1]);

    DetailPanel::new("Details", Style::default().fg(app.theme.secondary))
        .field("Function", note.category.clone())
        .field("Owner", note.owner.clone())
        .optional_field("Description", &note.description)
        .field("Captured", note.created_at.format("%Y-%m-%d %H:%M").to_string())
        .border_style(Style::default().fg(app.theme.border))
        .render(f, right[0]);

    let content = Paragraph::new(note.content.clone())
        .block(Block::default().title("Content").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(content, right[1]);
}
