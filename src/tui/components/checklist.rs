//! # Checklist Component
//!
//! Scrollable view of the surface's sections and rows.
//!
//! ## Responsibilities
//!
//! - Display section headers and item rows in surface order
//! - Manage scrolling and keyboard selection
//! - Predict row heights so the scroll view can be sized without rendering
//!
//! ## Architecture
//!
//! `Checklist` is a transient component (created each frame) that wraps
//! `&'a mut ChecklistState` (persistent state) and `&'a ListSurface`
//! (props). The component never reaches into the store or the reconciler —
//! it renders whatever row model the instruction stream produced, which is
//! what keeps the surface honest: if a diff is wrong, the screen is wrong.

use ratatui::layout::{Position, Rect, Size};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::item::ItemId;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::header::{SectionHeader, HEADER_HEIGHT};
use crate::tui::components::row::Row;
use crate::tui::event::TuiEvent;
use crate::tui::surface::{ListSurface, SurfaceRow};

/// Layout and scroll state for the checklist.
/// Must be persisted in the parent TuiState.
pub struct ChecklistState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Last frame's row heights, in surface row order
    pub heights: Vec<u16>,
    /// Running totals of `heights` (`prefix_heights[i]` = bottom edge of row i)
    pub prefix_heights: Vec<u16>,
    /// Currently selected item, by identity (survives diffs and reorders)
    pub selected: Option<ItemId>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for ChecklistState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            selected: None,
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last row.
    pub fn clamp_scroll(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the given surface row is fully visible.
    /// If the row is taller than the viewport, align its top edge.
    pub fn scroll_to_row(&mut self, index: usize) {
        if index >= self.prefix_heights.len() {
            return;
        }

        let row_top = if index == 0 {
            0
        } else {
            self.prefix_heights[index - 1]
        };
        let row_bottom = self.prefix_heights[index];
        let offset_y = self.scroll_state.offset().y;

        if row_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: row_top });
        } else if row_bottom > offset_y + self.viewport_height {
            let new_y = row_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights.clear();
        let mut acc = 0u16;
        for h in &self.heights {
            acc = acc.saturating_add(*h);
            self.prefix_heights.push(acc);
        }
    }
}

/// EventHandler is implemented on `ChecklistState` rather than `Checklist`
/// because event handling needs the persistent scroll state, and the
/// component itself is recreated each frame with fresh props.
impl EventHandler for ChecklistState {
    type Event = (); // scrolling is handled internally, nothing bubbles up

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}

/// Scrollable checklist view component.
/// Created fresh each frame with references to state and the surface.
pub struct Checklist<'a> {
    pub state: &'a mut ChecklistState,
    pub surface: &'a ListSurface,
}

impl<'a> Checklist<'a> {
    pub fn new(state: &'a mut ChecklistState, surface: &'a ListSurface) -> Self {
        Self { state, surface }
    }
}

impl<'a> Component for Checklist<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let rows = self.surface.rows();

        // 1. Measure every row for this frame's width.
        self.state.heights = rows
            .iter()
            .map(|row| match row {
                SurfaceRow::Header { .. } => HEADER_HEIGHT,
                SurfaceRow::Item(item) => Row::calculate_height(item, content_width),
            })
            .collect();
        self.state.rebuild_prefix_heights();

        let total_height: u16 = self.state.heights.iter().sum();
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        // 2. Render every row into the scroll view at its offset.
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (i, row) in rows.iter().enumerate() {
            let height = self.state.heights[i];
            let row_rect = Rect::new(0, y_offset, content_width, height);
            match row {
                SurfaceRow::Header { kind, title } => {
                    let (done, total) = self
                        .surface
                        .sections()
                        .iter()
                        .find(|s| s.kind == *kind)
                        .map(|s| (s.rows.iter().filter(|i| i.completed).count(), s.rows.len()))
                        .unwrap_or((0, 0));
                    scroll_view.render_widget(SectionHeader::new(title, done, total), row_rect);
                }
                SurfaceRow::Item(item) => {
                    let is_selected = self.state.selected == Some(item.id);
                    scroll_view.render_widget(Row::new(item, is_selected), row_rect);
                }
            }
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_heights(heights: Vec<u16>, viewport: u16) -> ChecklistState {
        let mut state = ChecklistState::new();
        state.heights = heights;
        state.rebuild_prefix_heights();
        state.viewport_height = viewport;
        state
    }

    #[test]
    fn test_prefix_heights_accumulate() {
        let state = state_with_heights(vec![2, 1, 3], 10);
        assert_eq!(state.prefix_heights, vec![2, 3, 6]);
    }

    #[test]
    fn test_clamp_scroll_limits_offset() {
        let mut state = state_with_heights(vec![5, 5, 5], 10);
        state.scroll_state.set_offset(Position { x: 0, y: 40 });
        state.clamp_scroll();
        // 15 content - 10 viewport = 5 max
        assert_eq!(state.scroll_state.offset().y, 5);
    }

    #[test]
    fn test_scroll_to_row_below_viewport() {
        let mut state = state_with_heights(vec![4, 4, 4, 4], 8);
        state.scroll_to_row(3);
        // Row 3 spans 12..16; viewport 8 → offset 8 shows it.
        assert_eq!(state.scroll_state.offset().y, 8);
    }

    #[test]
    fn test_scroll_to_row_above_viewport() {
        let mut state = state_with_heights(vec![4, 4, 4, 4], 8);
        state.scroll_state.set_offset(Position { x: 0, y: 8 });
        state.scroll_to_row(0);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_scroll_to_row_out_of_bounds_is_noop() {
        let mut state = state_with_heights(vec![4], 8);
        state.scroll_to_row(9);
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
