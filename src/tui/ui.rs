use crate::tui::component::Component;
use crate::tui::components::{Checklist, TitleBar};
use crate::tui::{App, TuiState};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::Frame;

/// Top-level frame layout: title bar, checklist, help line.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let (done, total) = app.store.completion_counts();
    let mut title_bar = TitleBar::new(
        app.source_label.clone(),
        done,
        total,
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    let mut checklist = Checklist::new(&mut tui.checklist, &app.surface);
    checklist.render(frame, main_area);

    draw_help_line(frame, help_area);
}

fn draw_help_line(frame: &mut Frame, area: Rect) {
    let help = " space toggle · d delete · shift+↑/↓ move · 1/2 sections · r reset · q quit";
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        area,
    );
}
