//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::item::{Item, SectionKind};
use crate::core::reconcile::{RenderInstruction, RenderSurface};
use crate::core::snapshot::{SectionSnapshot, Snapshot};

/// A render surface that records every instruction it receives, in order,
/// for tests that assert on the emitted sequence.
pub struct RecordingSurface {
    pub instructions: Vec<RenderInstruction>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface {
            instructions: Vec::new(),
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, instruction: RenderInstruction) {
        self.instructions.push(instruction);
    }
}

/// A home item with a derived title and no notes. Fields beyond the id are
/// deterministic so equality assertions stay simple.
pub fn home_item(id: u64) -> Item {
    Item::new(id, format!("home task {id}"), false, SectionKind::Home, None)
}

/// Office twin of [`home_item`].
pub fn office_item(id: u64) -> Item {
    Item::new(
        id,
        format!("office task {id}"),
        false,
        SectionKind::Office,
        None,
    )
}

/// Build a snapshot from (kind, items) pairs in the given order.
pub fn snapshot_of(sections: Vec<(SectionKind, Vec<Item>)>) -> Snapshot {
    Snapshot::new(
        sections
            .into_iter()
            .map(|(kind, items)| SectionSnapshot::new(kind, items))
            .collect(),
    )
}
