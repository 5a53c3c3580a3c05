//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;
use reviewdesk_llm::{ReportError, ReportGenerator, ReportJob};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    /// Outcome of the in-flight report request.
    ReportFinished(Result<String, ReportError>),
}

/// Run a claimed report job off the UI loop and post the outcome back.
///
/// The slot claim travels with the job and is released when the request
/// settles, before the outcome event is delivered.
pub fn spawn_report_job(
    job: ReportJob,
    generator: ReportGenerator,
    sender: mpsc::Sender<TuiEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = job.run(&generator).await;
        if sender.send(TuiEvent::ReportFinished(outcome)).await.is_err() {
            tracing::warn!("Event loop closed before report outcome was delivered");
        }
    })
}
