//! # Section Header Component
//!
//! The supplementary row above each section's items. The title text comes
//! from the surface (where the reconciler's `SetHeader` instruction put it),
//! never from the items themselves.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// A spacer line plus the title line.
pub const HEADER_HEIGHT: u16 = 2;

pub struct SectionHeader<'a> {
    pub title: &'a str,
    /// Completed / total counts for the section, shown dimmed after the title.
    pub done: usize,
    pub total: usize,
}

impl<'a> SectionHeader<'a> {
    pub fn new(title: &'a str, done: usize, total: usize) -> Self {
        SectionHeader { title, done, total }
    }
}

impl<'a> Widget for SectionHeader<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled("▌ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}/{} done", self.done, self.total),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
