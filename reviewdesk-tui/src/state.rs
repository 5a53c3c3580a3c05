//! Application state container.
//!
//! [`App`] owns the note store, the capture form and the report status.
//! Rendering only reads it; the methods below are the only write path.

use crate::config::TuiConfig;
use crate::events::TuiEvent;
use crate::export::{self, ExportError};
use crate::form::NoteForm;
use crate::keys::{map_key, Action};
use crate::nav::Focus;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::SynthBruteTheme;
use chrono::{DateTime, Local, NaiveDate, Utc};
use reviewdesk_core::{CoreResult, Note, NoteId, NoteStore, ReportState};
use reviewdesk_llm::{ReportError, ReportJob, ReportSlot};
use std::path::PathBuf;

/// What the event loop should do after an event has been applied.
#[derive(Debug)]
pub enum Flow {
    Continue,
    Quit,
    /// A report request was claimed and must be run off the loop.
    Generate(ReportJob),
}

pub struct App {
    pub config: TuiConfig,
    pub theme: SynthBruteTheme,
    pub store: NoteStore,
    pub form: NoteForm,
    pub focus: Focus,
    pub selected: Option<NoteId>,
    pub report: ReportState,
    pub report_scroll: u16,
    pub slot: ReportSlot,
    pub notifications: Vec<Notification>,
    pub last_export: Option<PathBuf>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            config,
            theme: SynthBruteTheme::synthbrute(),
            store: NoteStore::new(),
            form: NoteForm::new(),
            focus: Focus::Form,
            selected: None,
            report: ReportState::Idle,
            report_scroll: 0,
            slot: ReportSlot::new(),
            notifications: Vec::new(),
            last_export: None,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn report_visible(&self) -> bool {
        !self.report.is_idle()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.and_then(|id| self.store.get(id))
    }

    // ------------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------------

    /// Save the form draft. On rejection the store and draft are untouched.
    pub fn submit_note(&mut self) -> CoreResult<()> {
        match self.store.add_note(&self.form.draft) {
            Ok(()) => {
                self.form.reset_after_submit();
                self.selected = self.store.list_notes().first().map(|n| n.note_id);
                tracing::debug!(count = self.store.len(), "Note added");
                self.notify(NotificationLevel::Success, "Note added");
                Ok(())
            }
            Err(err) => {
                self.notify(NotificationLevel::Warning, err.to_string());
                Err(err)
            }
        }
    }

    /// Delete the highlighted note, keeping the cursor at the same position.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let index = self
            .store
            .list_notes()
            .iter()
            .position(|n| n.note_id == id);
        let removed = self.store.delete_note(id);

        let notes = self.store.list_notes();
        self.selected = match index {
            Some(i) if !notes.is_empty() => Some(notes[i.min(notes.len() - 1)].note_id),
            _ => None,
        };
        if removed {
            tracing::debug!(count = self.store.len(), "Note deleted");
            self.notify(NotificationLevel::Info, "Note deleted");
        }
        removed
    }

    pub fn select_next(&mut self) {
        select_next_id(self.store.list_notes(), &mut self.selected);
    }

    pub fn select_previous(&mut self) {
        select_prev_id(self.store.list_notes(), &mut self.selected);
    }

    // ------------------------------------------------------------------------
    // Report
    // ------------------------------------------------------------------------

    /// Claim the report slot over a snapshot of the current notes.
    /// Rejected (with a notification) while a request is outstanding.
    pub fn begin_report(&mut self) -> Option<ReportJob> {
        // The slot frees as soon as the call settles; the state flips only
        // when the outcome event arrives.
        if self.report.is_generating() {
            self.notify(NotificationLevel::Warning, ReportError::Busy.to_string());
            return None;
        }
        match self.slot.begin(self.store.snapshot()) {
            Ok(job) => {
                tracing::info!(notes = job.notes().len(), "Report requested");
                self.report = ReportState::Generating;
                self.report_scroll = 0;
                self.focus = Focus::Report;
                Some(job)
            }
            Err(err) => {
                self.notify(NotificationLevel::Warning, err.to_string());
                None
            }
        }
    }

    pub fn complete_report(&mut self, outcome: Result<String, ReportError>) {
        if !self.report.is_generating() {
            tracing::warn!("Report outcome arrived with no request outstanding");
            return;
        }
        self.report = match outcome {
            Ok(text) => {
                self.notify(NotificationLevel::Success, "Report ready");
                ReportState::Succeeded(text)
            }
            Err(err) => {
                let message = err.to_string();
                self.notify(NotificationLevel::Error, message.clone());
                ReportState::Failed(message)
            }
        };
    }

    /// Close the report pane. Not possible while generating.
    pub fn dismiss_report(&mut self) -> bool {
        if self.report.is_generating() {
            self.notify(NotificationLevel::Info, "Report is still being generated");
            return false;
        }
        self.report = ReportState::Idle;
        self.report_scroll = 0;
        if self.focus == Focus::Report {
            self.focus = Focus::Form;
        }
        true
    }

    pub fn export_report(&mut self, date: NaiveDate) -> Result<PathBuf, ExportError> {
        let result = match self.report.content() {
            Some(content) => export::export_report(&self.config.export.dir, content, date),
            None => Err(ExportError::NothingToExport),
        };
        match &result {
            Ok(path) => {
                self.notify(
                    NotificationLevel::Success,
                    format!("Report saved to {}", path.display()),
                );
                self.last_export = Some(path.clone());
            }
            Err(err) => {
                tracing::error!(error = %err, "Report export failed");
                self.notify(NotificationLevel::Error, err.to_string());
            }
        }
        result
    }

    // ------------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------------

    pub fn on_tick(&mut self, now: DateTime<Utc>) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn handle_event(&mut self, event: TuiEvent) -> Flow {
        match event {
            TuiEvent::Input(key) => match map_key(key, self.focus) {
                Some(action) => self.handle_action(action),
                None => Flow::Continue,
            },
            TuiEvent::Tick => {
                self.on_tick(Utc::now());
                Flow::Continue
            }
            TuiEvent::Resize { .. } => Flow::Continue,
            TuiEvent::ReportFinished(outcome) => {
                self.complete_report(outcome);
                Flow::Continue
            }
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Submit => {
                let _ = self.submit_note();
            }
            Action::GenerateReport => {
                if let Some(job) = self.begin_report() {
                    return Flow::Generate(job);
                }
            }
            Action::ExportReport => {
                let _ = self.export_report(Local::now().date_naive());
            }
            Action::DismissReport => {
                self.dismiss_report();
            }
            Action::SwitchPane => {
                self.focus = self.focus.next(self.report_visible());
                if self.focus == Focus::Notes && self.selected.is_none() {
                    self.select_next();
                }
            }
            Action::NextField => self.form.next_field(),
            Action::PrevField => self.form.prev_field(),
            Action::Insert(c) => self.form.insert(c),
            Action::Backspace => self.form.backspace(),
            Action::ClearField => self.form.clear_field(),
            Action::Confirm => self.form.confirm(&self.store),
            Action::SuggestionNext => self.form.suggestion_next(&self.store),
            Action::SuggestionPrev => self.form.suggestion_prev(&self.store),
            Action::MoveDown => match self.focus {
                Focus::Report => self.report_scroll = self.report_scroll.saturating_add(1),
                _ => self.select_next(),
            },
            Action::MoveUp => match self.focus {
                Focus::Report => self.report_scroll = self.report_scroll.saturating_sub(1),
                _ => self.select_previous(),
            },
            Action::DeleteSelected => {
                self.delete_selected();
            }
        }
        Flow::Continue
    }
}

fn select_next_id(items: &[Note], selected: &mut Option<NoteId>) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let next = match selected.and_then(|id| items.iter().position(|n| n.note_id == id)) {
        Some(index) => (index + 1) % items.len(),
        None => 0,
    };
    *selected = Some(items[next].note_id);
}

fn select_prev_id(items: &[Note], selected: &mut Option<NoteId>) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .and_then(|id| items.iter().position(|n| n.note_id == id))
        .unwrap_or(0);
    let prev = if index == 0 { items.len() - 1 } else { index - 1 };
    *selected = Some(items[prev].note_id);
}
