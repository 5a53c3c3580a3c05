//! Focus navigation between panes.

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The note capture form
    #[default]
    Form,
    /// The captured notes list
    Notes,
    /// The report pane (only reachable while a report is shown)
    Report,
}

impl Focus {
    /// Cycle to the next pane. The report pane is skipped when hidden.
    pub fn next(&self, report_visible: bool) -> Self {
        match self {
            Focus::Form => Focus::Notes,
            Focus::Notes if report_visible => Focus::Report,
            Focus::Notes | Focus::Report => Focus::Form,
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Focus::Form => {
                "Tab/Shift-Tab field • ↑/↓ suggestion • Enter accept • Ctrl-S save • Ctrl-G report • Esc notes • Ctrl-Q quit"
            }
            Focus::Notes => {
                "j/k move • d delete • g report • e export • Esc pane • q quit"
            }
            Focus::Report => "j/k scroll • e export • x close • Esc pane • q quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_skips_hidden_report() {
        assert_eq!(Focus::Notes.next(false), Focus::Form);
        assert_eq!(Focus::Notes.next(true), Focus::Report);
        assert_eq!(Focus::Report.next(true), Focus::Form);
    }
}
