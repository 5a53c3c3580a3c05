//! Keybinding definitions for the TUI.
//!
//! Mapping depends on focus: the form consumes printable keys as text, the
//! list and report panes use single-letter commands.

use crate::nav::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Save the current draft as a note
    Submit,
    GenerateReport,
    ExportReport,
    /// Close the report pane
    DismissReport,
    /// Move focus to the next pane
    SwitchPane,
    NextField,
    PrevField,
    Insert(char),
    Backspace,
    ClearField,
    /// Enter in the form: accept suggestion, newline, or advance
    Confirm,
    SuggestionNext,
    SuggestionPrev,
    MoveUp,
    MoveDown,
    DeleteSelected,
}

pub fn map_key(event: KeyEvent, focus: Focus) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::Submit),
            KeyCode::Char('g') => Some(Action::GenerateReport),
            KeyCode::Char('e') => Some(Action::ExportReport),
            KeyCode::Char('u') if focus == Focus::Form => Some(Action::ClearField),
            _ => None,
        };
    }

    if code == KeyCode::Esc {
        return Some(Action::SwitchPane);
    }

    match focus {
        Focus::Form => match code {
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PrevField),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Down => Some(Action::SuggestionNext),
            KeyCode::Up => Some(Action::SuggestionPrev),
            KeyCode::Char(c) => Some(Action::Insert(c)),
            _ => None,
        },
        Focus::Notes => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('g') => Some(Action::GenerateReport),
            KeyCode::Char('e') => Some(Action::ExportReport),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Tab => Some(Action::SwitchPane),
            _ => None,
        },
        Focus::Report => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('e') => Some(Action::ExportReport),
            KeyCode::Char('x') => Some(Action::DismissReport),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Tab => Some(Action::SwitchPane),
            _ => None,
        },
    }
}
