use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive their data via props (struct fields) — the title bar
/// gets counts, the checklist gets the surface row model — and render into
/// a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so stateful components can update presentation
/// state (scroll offsets, measured heights) during the render pass. This
/// aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Implemented on persistent state types (e.g. the checklist's scroll
/// state), since the components themselves are rebuilt every frame.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
