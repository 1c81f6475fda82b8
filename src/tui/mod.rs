//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into store mutations.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! never touches the terminal: every visible change flows through one path —
//!
//! ```text
//! key event ──► ItemStore mutation ──► Snapshot ──► Reconciler::apply
//!                                                        │
//!                       ListSurface row model ◄──────────┘
//!                              │
//!                        next draw()
//! ```
//!
//! so the checklist on screen is always the product of the instruction
//! stream, never of direct state reads.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws after an input event (or resize); idle polls
//! sleep up to 250ms. There is no animation, so there is no timed redraw.

pub mod component;
pub mod components;
pub mod event;
pub mod surface;
mod ui;

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{error, info, warn};

use crate::core::config::ResolvedConfig;
use crate::core::item::{ItemId, SectionKind};
use crate::core::reconcile::Reconciler;
use crate::core::snapshot::{SectionSnapshot, Snapshot};
use crate::core::store::ItemStore;
use crate::tui::component::EventHandler;
use crate::tui::components::ChecklistState;
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};
use crate::tui::surface::ListSurface;

/// Domain state driven by the event loop: the store (source of truth), the
/// reconciler (diff engine), and the surface (what the screen shows).
pub struct App {
    pub store: ItemStore,
    pub reconciler: Reconciler,
    pub surface: ListSurface,
    /// Sections currently shown, in display order. Toggled with 1/2.
    pub visible: Vec<SectionKind>,
    pub source_label: String,
    pub status_message: String,
    pub autosave: bool,
}

impl App {
    pub fn new(store: ItemStore, config: &ResolvedConfig) -> Self {
        let source_label = match &config.data_file {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "built-in".to_string(),
        };
        Self::with_store(store, config.focus, source_label, config.autosave)
    }

    pub fn with_store(
        store: ItemStore,
        focus: Option<SectionKind>,
        source_label: String,
        autosave: bool,
    ) -> Self {
        let visible = match focus {
            Some(kind) => vec![kind],
            None => SectionKind::ALL.to_vec(),
        };
        App {
            store,
            reconciler: Reconciler::new(),
            surface: ListSurface::new(),
            visible,
            source_label,
            status_message: String::new(),
            autosave,
        }
    }

    /// Build a fresh snapshot of the visible sections from the store.
    pub fn build_snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.visible
                .iter()
                .map(|&kind| SectionSnapshot::new(kind, self.store.fetch_section(kind)))
                .collect(),
        )
    }

    /// Diff the current store state onto the surface. Returns the status
    /// line text describing what happened.
    pub fn reconcile(&mut self) -> String {
        let snapshot = self.build_snapshot();
        match self.reconciler.apply(snapshot, &mut self.surface) {
            Ok(0) => "in sync".to_string(),
            Ok(1) => "applied 1 instruction".to_string(),
            Ok(n) => format!("applied {n} instructions"),
            Err(e) => {
                error!("reconcile failed: {e}");
                format!("reconcile failed: {e}")
            }
        }
    }

    /// Show or hide a section, keeping display order stable.
    pub fn toggle_section(&mut self, kind: SectionKind) {
        if self.visible.contains(&kind) {
            self.visible.retain(|&k| k != kind);
        } else {
            self.visible = SectionKind::ALL
                .into_iter()
                .filter(|k| self.visible.contains(k) || *k == kind)
                .collect();
        }
    }
}

/// TUI-specific presentation state (not part of the domain).
pub struct TuiState {
    pub checklist: ChecklistState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            checklist: ChecklistState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Move the selection by one item in display order and keep it in view.
fn step_selection(app: &App, tui: &mut TuiState, forward: bool) {
    let ids = app.surface.item_ids();
    if ids.is_empty() {
        tui.checklist.selected = None;
        return;
    }
    let current = tui
        .checklist
        .selected
        .and_then(|id| ids.iter().position(|&i| i == id));
    let next = match (current, forward) {
        (None, _) => 0,
        (Some(i), false) => i.saturating_sub(1),
        (Some(i), true) => (i + 1).min(ids.len() - 1),
    };
    select(app, tui, ids[next]);
}

fn select(app: &App, tui: &mut TuiState, id: ItemId) {
    tui.checklist.selected = Some(id);
    if let Some(row) = app.surface.row_index_of(id) {
        tui.checklist.scroll_to_row(row);
    }
}

/// After a mutation, make sure the selection still points at a live item.
/// `previous_index` is where the old selection sat in display order.
fn repair_selection(app: &App, tui: &mut TuiState, previous_index: Option<usize>) {
    let ids = app.surface.item_ids();
    if let Some(id) = tui.checklist.selected {
        if ids.contains(&id) {
            return;
        }
    }
    if ids.is_empty() {
        tui.checklist.selected = None;
        return;
    }
    let index = previous_index.unwrap_or(0).min(ids.len() - 1);
    select(app, tui, ids[index]);
}

pub fn run(config: ResolvedConfig, store: ItemStore) -> std::io::Result<()> {
    let mut app = App::new(store, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // First apply: a pure bulk insert that builds the surface.
    app.status_message = app.reconcile();
    tui.checklist.selected = app.surface.item_ids().first().copied();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    should_quit = true;
                }

                // Scroll events go straight to the checklist state
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.checklist.handle_event(&event);
                }

                TuiEvent::CursorUp => step_selection(&app, &mut tui, false),
                TuiEvent::CursorDown => step_selection(&app, &mut tui, true),

                TuiEvent::ToggleDone => {
                    if let Some(id) = tui.checklist.selected {
                        if app.store.toggle(id) {
                            app.status_message = app.reconcile();
                        }
                    }
                }

                TuiEvent::DeleteItem => {
                    if let Some(id) = tui.checklist.selected {
                        let previous_index =
                            app.surface.item_ids().iter().position(|&i| i == id);
                        if app.store.remove(id) {
                            app.status_message = app.reconcile();
                            repair_selection(&app, &mut tui, previous_index);
                        }
                    }
                }

                TuiEvent::MoveItemUp | TuiEvent::MoveItemDown => {
                    if let Some(id) = tui.checklist.selected {
                        let moved = if matches!(event, TuiEvent::MoveItemUp) {
                            app.store.move_up(id)
                        } else {
                            app.store.move_down(id)
                        };
                        if moved {
                            app.status_message = app.reconcile();
                            select(&app, &mut tui, id);
                        }
                    }
                }

                TuiEvent::ToggleSection(kind) => {
                    let previous_index = tui
                        .checklist
                        .selected
                        .and_then(|id| app.surface.item_ids().iter().position(|&i| i == id));
                    app.toggle_section(kind);
                    app.status_message = app.reconcile();
                    repair_selection(&app, &mut tui, previous_index);
                }

                TuiEvent::ResetChecklist => {
                    app.store.reset();
                    app.status_message = app.reconcile();
                    repair_selection(&app, &mut tui, None);
                }
            }
        }

        if should_quit {
            break;
        }
    }

    // Save on exit if a data file is in play
    if app.autosave {
        if let Some(path) = &config.data_file {
            if let Err(e) = app.store.save(path) {
                warn!("Failed to save checklist to {}: {}", path.display(), e);
            }
        }
    }

    ratatui::restore();
    Ok(())
}
