use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

use crate::core::item::SectionKind;

/// TUI-specific input events
pub enum TuiEvent {
    // Session control
    Quit,      // q or Esc
    ForceQuit, // Ctrl+C

    // Checklist edits (routed to the store, then re-reconciled)
    ToggleDone,    // Space
    DeleteItem,    // d
    MoveItemUp,    // Shift+Up
    MoveItemDown,  // Shift+Down
    ToggleSection(SectionKind), // 1 = Home, 2 = Office
    ResetChecklist, // r

    // Navigation and scrolling (handled by the checklist component)
    CursorUp,   // Up or k
    CursorDown, // Down or j
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,

    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (KeyModifiers::SHIFT, KeyCode::Up) => Some(TuiEvent::MoveItemUp),
                    (KeyModifiers::SHIFT, KeyCode::Down) => Some(TuiEvent::MoveItemDown),
                    (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char(' ')) => Some(TuiEvent::ToggleDone),
                    (_, KeyCode::Char('d')) => Some(TuiEvent::DeleteItem),
                    (_, KeyCode::Char('r')) => Some(TuiEvent::ResetChecklist),
                    (_, KeyCode::Char('1')) => {
                        Some(TuiEvent::ToggleSection(SectionKind::Home))
                    }
                    (_, KeyCode::Char('2')) => {
                        Some(TuiEvent::ToggleSection(SectionKind::Office))
                    }
                    (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
