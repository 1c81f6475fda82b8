//! # Item Row Component
//!
//! Renders one checklist entry: a completion icon, the title, and the notes
//! (if any) wrapped and dimmed underneath.
//!
//! `Row` is a transient component created fresh each frame from a surface
//! row. Height is predicted with `textwrap` before rendering so the parent
//! checklist can lay out its scroll view without a render pass.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::item::Item;

/// Leading columns for the icon ("` ✓ `").
const ICON_WIDTH: u16 = 4;

/// Completion icon glyphs.
const ICON_DONE: &str = "✓";
const ICON_OPEN: &str = "○";

pub struct Row<'a> {
    pub item: &'a Item,
    pub is_selected: bool,
}

impl<'a> Row<'a> {
    pub fn new(item: &'a Item, is_selected: bool) -> Self {
        Row { item, is_selected }
    }

    /// Height of this row at the given width: one title line plus the
    /// wrapped notes lines. Wrapping options match the render path exactly.
    pub fn calculate_height(item: &Item, width: u16) -> u16 {
        let notes_lines = match &item.notes {
            Some(notes) => wrap_notes(notes, width).len() as u16,
            None => 0,
        };
        1 + notes_lines
    }
}

fn notes_width(width: u16) -> usize {
    width.saturating_sub(ICON_WIDTH).max(1) as usize
}

fn wrap_notes(notes: &str, width: u16) -> Vec<std::borrow::Cow<'_, str>> {
    let options = textwrap::Options::new(notes_width(width))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(notes, options)
}

/// Truncate a title to the given display width, ellipsizing if needed.
fn fit_title(title: &str, max_width: usize) -> String {
    if title.width() <= max_width {
        return title.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in title.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

impl<'a> Widget for Row<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, icon_style, title_style) = if self.item.completed {
            (
                ICON_DONE,
                Style::default().fg(Color::Green),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            (ICON_OPEN, Style::default().fg(Color::Cyan), Style::default())
        };

        let title = fit_title(&self.item.title, notes_width(area.width));
        let mut lines = vec![Line::from(vec![
            Span::styled(format!(" {icon} "), icon_style),
            Span::raw(" "),
            Span::styled(title, title_style),
        ])];

        if let Some(notes) = &self.item.notes {
            let indent = " ".repeat(ICON_WIDTH as usize);
            for wrapped in wrap_notes(notes, area.width) {
                lines.push(Line::from(Span::styled(
                    format!("{indent}{wrapped}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        let mut paragraph = Paragraph::new(lines);
        if self.is_selected {
            paragraph = paragraph.style(Style::default().bg(Color::DarkGray));
        }
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::SectionKind;

    fn item(notes: Option<&str>) -> Item {
        Item::new(1, "Shopping", false, SectionKind::Home, notes)
    }

    #[test]
    fn test_height_without_notes_is_one() {
        assert_eq!(Row::calculate_height(&item(None), 40), 1);
    }

    #[test]
    fn test_height_counts_wrapped_notes() {
        let it = item(Some("Milk, Salt, Eggs"));
        assert_eq!(Row::calculate_height(&it, 40), 2);

        // Narrow enough that the notes wrap onto two lines.
        let narrow = Row::calculate_height(&it, 14);
        assert!(narrow >= 3, "expected wrapping at width 14, got {narrow}");
    }

    #[test]
    fn test_fit_title_truncates_wide_titles() {
        assert_eq!(fit_title("Shopping", 20), "Shopping");
        let fitted = fit_title("A very long checklist entry title", 10);
        assert!(fitted.ends_with('…'));
        assert!(fitted.width() <= 10);
    }
}
