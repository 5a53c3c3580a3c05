//! reviewdesk TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use reviewdesk_llm::{ConfiguredCredential, GeminiClient, ReportGenerator};
use reviewdesk_tui::config::TuiConfig;
use reviewdesk_tui::error::TuiError;
use reviewdesk_tui::events::{spawn_report_job, TuiEvent};
use reviewdesk_tui::logging::init_logging;
use reviewdesk_tui::state::{App, Flow};
use reviewdesk_tui::views::render_view;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config.logging)?;

    let generator = build_generator(&config);
    tracing::info!(
        model = generator.model(),
        base_url = %config.llm.base_url,
        "Starting reviewdesk"
    );

    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        let event = tokio::select! {
            _ = ticker.tick() => TuiEvent::Tick,
            Some(event) = event_rx.recv() => event,
        };

        match app.handle_event(event) {
            Flow::Continue => {}
            Flow::Quit => break,
            Flow::Generate(job) => {
                spawn_report_job(job, generator.clone(), event_tx.clone());
            }
        }
    }

    tracing::info!(notes = app.store.len(), "Exiting reviewdesk");
    Ok(())
}

fn build_generator(config: &TuiConfig) -> ReportGenerator {
    let transport = GeminiClient::with_base_url(config.llm.base_url.clone());
    let credential =
        ConfiguredCredential::new(config.llm.api_key.clone(), config.llm.api_key_env.clone());
    ReportGenerator::new(
        Arc::new(transport),
        Arc::new(credential),
        config.llm.model.clone(),
    )
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) => sender.blocking_send(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}
