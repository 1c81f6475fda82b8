//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing source, counts, and status
//! - `SectionHeader`: Supplementary row above each section
//! - `Row`: A single checklist item
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `Checklist`: Scrollable section/row view with selection and scrolling
//!
//! ## Design Philosophy
//!
//! Components compose naturally: `Checklist` renders `SectionHeader` and
//! `Row` widgets. Each component file contains everything related to that
//! component — state types, rendering logic, event handling, tests — so one
//! file tells the whole story.
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state. The checklist in particular renders only the
//! [`crate::tui::surface::ListSurface`] row model: if the reconciler emits a
//! wrong diff, the screen shows it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── header.rs        (Section header row)
//! ├── row.rs           (Single item renderer)
//! └── checklist.rs     (Scrollable section/row container)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod checklist;
pub mod header;
pub mod row;
pub use checklist::{Checklist, ChecklistState};
