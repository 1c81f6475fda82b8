//! # Core Reconciliation Logic
//!
//! This module contains Punchlist's domain and diff logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │           CORE              │
//!                    │  (this module)              │
//!                    │                             │
//!                    │  • Item / SectionKind       │
//!                    │  • ItemStore (data)         │
//!                    │  • Snapshot (target state)  │
//!                    │  • Reconciler (diff)        │
//!                    │                             │
//!                    │  No I/O*. No UI. Sync.      │
//!                    └────────────┬────────────────┘
//!                                 │ RenderInstruction
//!             ┌───────────────────┼───────────────────┐
//!             ▼                   ▼                   ▼
//!      ┌────────────┐      ┌────────────┐      ┌────────────┐
//!      │    TUI     │      │ Recording  │      │   other    │
//!      │  surface   │      │  surface   │      │  surfaces  │
//!      │ (ratatui)  │      │  (tests)   │      │  (future)  │
//!      └────────────┘      └────────────┘      └────────────┘
//!
//!      * store load/save and config are the app-level exceptions
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item`, `ItemId`, `SectionKind` — the checklist vocabulary
//! - [`store`]: `ItemStore` — items partitioned by section, seed + file I/O
//! - [`snapshot`]: `Snapshot` — immutable target state, built fresh per change
//! - [`reconcile`]: `Reconciler` — diffs snapshots into `RenderInstruction`s
//! - [`config`]: app settings with the defaults → file → env → CLI hierarchy

pub mod config;
pub mod item;
pub mod reconcile;
pub mod snapshot;
pub mod store;
