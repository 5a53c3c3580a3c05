//! Status indicator widget.

use crate::theme::{report_state_color, SynthBruteTheme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use reviewdesk_core::ReportState;

pub struct StatusIndicator {
    pub title: String,
    pub status: String,
    pub style: Style,
}

impl StatusIndicator {
    /// Indicator for the report request, colored by state.
    pub fn for_report(state: &ReportState, theme: &SynthBruteTheme) -> Self {
        Self {
            title: "Report".to_string(),
            status: state.label().to_string(),
            style: Style::default()
                .fg(report_state_color(state, theme))
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let paragraph = Paragraph::new(self.status.clone()).style(self.style).block(
            Block::default()
                .title(self.title.as_str())
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }
}
