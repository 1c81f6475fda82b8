//! # TitleBar Component
//!
//! Top status bar showing the checklist source and reconciliation activity.
//!
//! ## Responsibilities
//!
//! - Display the checklist source (data file name, or "built-in")
//! - Display overall completion ("5/13 done")
//! - Display a transient status message (e.g. "applied 3 instructions")
//!
//! ## Design Decisions
//!
//! TitleBar is purely presentational — it receives all data as props and has
//! no internal state. The props come from different owners (the store for
//! counts, the event loop for the status message), and the TitleBar doesn't
//! care where they come from; it just renders what it's given.

use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `source`: where the checklist came from (file name or "built-in")
/// - `done` / `total`: overall completion counts
/// - `status_message`: transient status (last reconciliation result, errors)
pub struct TitleBar {
    pub source: String,
    pub done: usize,
    pub total: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source: String, done: usize, total: usize, status_message: String) -> Self {
        Self {
            source,
            done,
            total,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Punchlist ({}) | {}/{} done", self.source, self.done, self.total)
        } else {
            format!(
                "Punchlist ({}) | {}/{} done | {}",
                self.source, self.done, self.total, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_title_bar_renders_counts() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new("built-in".to_string(), 5, 13, String::new());

        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rendered: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("Punchlist (built-in)"));
        assert!(rendered.contains("5/13 done"));
    }

    #[test]
    fn test_title_bar_appends_status() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new(
            "tasks.toml".to_string(),
            0,
            2,
            "applied 3 instructions".to_string(),
        );

        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rendered: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("applied 3 instructions"));
    }
}
