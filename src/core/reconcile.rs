//! # List Reconciler
//!
//! The diff engine. Owns the last-applied [`Snapshot`], accepts a new target
//! snapshot, and emits the minimal ordered sequence of [`RenderInstruction`]s
//! that brings a render surface from the old state to the new one.
//!
//! ```text
//! Snapshot (target)             Snapshot (retained)
//!        │                             │
//!        └──────────► diff ◄───────────┘
//!                      │
//!                      ▼
//!        [RenderInstruction, ...]  ──►  RenderSurface::apply, in order
//! ```
//!
//! The reconciler has two states: `empty` (nothing applied yet — the first
//! apply degenerates to a bulk insert) and `populated` (every later apply
//! diffs against the retained snapshot). The whole instruction sequence is
//! computed before any of it reaches the surface, so a rejected snapshot
//! (duplicate identity) leaves the surface untouched.
//!
//! Everything here is synchronous and single-threaded by contract: callers
//! serialize their `apply` calls, and instructions must land on the surface
//! in emitted order.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::core::item::{Item, ItemId, SectionKind};
use crate::core::snapshot::{SectionSnapshot, Snapshot};

/// One imperative unit of change for the render surface.
///
/// `position`, `from`, and `to` are live positions in the surface's current
/// state at the moment the instruction is applied, not snapshot indices: the
/// reconciler simulates the surface while diffing, so applying instructions
/// one at a time lands exactly on the target order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    InsertSection {
        kind: SectionKind,
        position: usize,
    },
    RemoveSection {
        kind: SectionKind,
    },
    InsertItem {
        item: Item,
        section: SectionKind,
        position: usize,
    },
    RemoveItem {
        id: ItemId,
        section: SectionKind,
    },
    /// Re-render an item in place. Position is untouched; a reorder of the
    /// same item arrives as a separate `MoveItem` after this.
    UpdateItem {
        id: ItemId,
        item: Item,
    },
    /// Ids are unique across the whole list, so the surface resolves the
    /// owning section from the id alone.
    MoveItem {
        id: ItemId,
        from: usize,
        to: usize,
    },
    SetHeader {
        section: SectionKind,
        title: &'static str,
    },
}

/// The external collaborator that owns all visual presentation. The core
/// never inspects it; it only feeds it instructions in order.
pub trait RenderSurface {
    fn apply(&mut self, instruction: RenderInstruction);
}

/// Rejection of a target snapshot. Nothing is applied on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// Two items in the new snapshot share an id (across all sections
    /// combined). A caller/data-integrity error, not recoverable here.
    DuplicateIdentity { id: ItemId },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileError::DuplicateIdentity { id } => {
                write!(f, "duplicate item identity {id} in snapshot")
            }
        }
    }
}

impl std::error::Error for ReconcileError {}

/// Owns the currently-applied snapshot and diffs new ones against it.
#[derive(Default)]
pub struct Reconciler {
    /// `None` until the first successful apply.
    applied: Option<Snapshot>,
}

impl Reconciler {
    pub fn new() -> Self {
        Reconciler { applied: None }
    }

    /// True once a snapshot has been applied.
    pub fn is_populated(&self) -> bool {
        self.applied.is_some()
    }

    /// The retained snapshot, for inspection.
    pub fn applied(&self) -> Option<&Snapshot> {
        self.applied.as_ref()
    }

    /// Diff `snapshot` against the retained one, feed the resulting
    /// instructions to `surface` in order, then retain `snapshot`.
    ///
    /// Returns the number of instructions emitted. Zero means the surface
    /// already showed exactly this snapshot.
    pub fn apply(
        &mut self,
        snapshot: Snapshot,
        surface: &mut dyn RenderSurface,
    ) -> Result<usize, ReconcileError> {
        if let Some(id) = snapshot.duplicate_id() {
            return Err(ReconcileError::DuplicateIdentity { id });
        }

        let instructions = self.diff(&snapshot);
        let count = instructions.len();
        debug!(
            "apply: {} section(s), {} item(s), {} instruction(s)",
            snapshot.sections.len(),
            snapshot.item_count(),
            count
        );

        for instruction in instructions {
            debug!("  -> {:?}", instruction);
            surface.apply(instruction);
        }

        self.applied = Some(snapshot);
        Ok(count)
    }

    /// Compute the instruction sequence without touching any surface.
    fn diff(&self, new: &Snapshot) -> Vec<RenderInstruction> {
        let empty = Snapshot::default();
        let old = self.applied.as_ref().unwrap_or(&empty);
        let mut ops = Vec::new();

        // Sections gone from the new snapshot, in old order. Their items go
        // with them implicitly.
        for section in &old.sections {
            if !new.contains_section(section.kind) {
                ops.push(RenderInstruction::RemoveSection { kind: section.kind });
            }
        }

        // Surviving sections in their old relative order; the walk below
        // keeps this in lockstep with the surface.
        let mut working: Vec<SectionKind> = old
            .sections
            .iter()
            .map(|s| s.kind)
            .filter(|k| new.contains_section(*k))
            .collect();

        for (position, section) in new.sections.iter().enumerate() {
            match old.section(section.kind) {
                None => {
                    working.insert(position, section.kind);
                    push_section_insert(&mut ops, section, position);
                }
                Some(old_section) => {
                    let current = working
                        .iter()
                        .position(|k| *k == section.kind)
                        .expect("surviving section present in working order");
                    if current != position {
                        // The closed instruction set has no section move:
                        // a displaced section is rebuilt at its new position.
                        ops.push(RenderInstruction::RemoveSection { kind: section.kind });
                        working.remove(current);
                        working.insert(position, section.kind);
                        push_section_insert(&mut ops, section, position);
                    } else {
                        let item_ops = diff_items(old_section, section);
                        if !item_ops.is_empty() {
                            ops.extend(item_ops);
                            ops.push(RenderInstruction::SetHeader {
                                section: section.kind,
                                title: section.kind.title(),
                            });
                        }
                    }
                }
            }
        }

        ops
    }
}

/// Emit a full build of one section: insert, every item in order, header.
fn push_section_insert(
    ops: &mut Vec<RenderInstruction>,
    section: &SectionSnapshot,
    position: usize,
) {
    ops.push(RenderInstruction::InsertSection {
        kind: section.kind,
        position,
    });
    for (index, item) in section.items.iter().enumerate() {
        ops.push(RenderInstruction::InsertItem {
            item: item.clone(),
            section: section.kind,
            position: index,
        });
    }
    ops.push(RenderInstruction::SetHeader {
        section: section.kind,
        title: section.kind.title(),
    });
}

/// Keyed diff of one retained section's item list.
///
/// Removals come first (old order), then a single walk of the target order:
/// unknown id → insert at its position, retained id with changed fields →
/// update (before any move of the same item), retained id out of place →
/// move. The walk maintains a working copy of the surface's row order, so
/// items whose position is otherwise ambiguous keep their old relative
/// order — only the displaced item moves.
fn diff_items(old: &SectionSnapshot, new: &SectionSnapshot) -> Vec<RenderInstruction> {
    let kind = new.kind;
    let new_ids: HashSet<ItemId> = new.items.iter().map(|i| i.id).collect();
    let mut ops = Vec::new();

    for item in &old.items {
        if !new_ids.contains(&item.id) {
            ops.push(RenderInstruction::RemoveItem {
                id: item.id,
                section: kind,
            });
        }
    }

    let mut working: Vec<ItemId> = old
        .items
        .iter()
        .map(|i| i.id)
        .filter(|id| new_ids.contains(id))
        .collect();

    for (position, item) in new.items.iter().enumerate() {
        match old.items.iter().find(|o| o.id == item.id) {
            None => {
                ops.push(RenderInstruction::InsertItem {
                    item: item.clone(),
                    section: kind,
                    position,
                });
                working.insert(position, item.id);
            }
            Some(old_item) => {
                if old_item.fields_differ(item) {
                    ops.push(RenderInstruction::UpdateItem {
                        id: item.id,
                        item: item.clone(),
                    });
                }
                let current = working
                    .iter()
                    .position(|w| *w == item.id)
                    .expect("surviving item present in working order");
                if current != position {
                    ops.push(RenderInstruction::MoveItem {
                        id: item.id,
                        from: current,
                        to: position,
                    });
                    let id = working.remove(current);
                    working.insert(position, id);
                }
            }
        }
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{home_item, office_item, snapshot_of, RecordingSurface};

    #[test]
    fn test_first_apply_is_bulk_insert() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();
        assert!(!reconciler.is_populated());

        let snapshot = snapshot_of(vec![
            (SectionKind::Home, vec![home_item(1), home_item(2)]),
            (SectionKind::Office, vec![office_item(11)]),
        ]);
        let count = reconciler.apply(snapshot, &mut surface).unwrap();

        assert!(reconciler.is_populated());
        // insert home + 2 items + header, insert office + 1 item + header
        assert_eq!(count, 7);
        assert_eq!(
            surface.instructions[0],
            RenderInstruction::InsertSection {
                kind: SectionKind::Home,
                position: 0
            }
        );
        assert_eq!(
            surface.instructions[3],
            RenderInstruction::SetHeader {
                section: SectionKind::Home,
                title: "Home"
            }
        );
    }

    #[test]
    fn test_idempotent_reapply_emits_nothing() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();
        let snapshot = snapshot_of(vec![(SectionKind::Home, vec![home_item(1), home_item(2)])]);

        reconciler.apply(snapshot.clone(), &mut surface).unwrap();
        surface.instructions.clear();

        let count = reconciler.apply(snapshot, &mut surface).unwrap();
        assert_eq!(count, 0);
        assert!(surface.instructions.is_empty());
    }

    #[test]
    fn test_field_change_is_single_update() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();
        reconciler
            .apply(
                snapshot_of(vec![(SectionKind::Home, vec![home_item(1), home_item(2)])]),
                &mut surface,
            )
            .unwrap();
        surface.instructions.clear();

        let mut changed = home_item(2);
        changed.completed = true;
        reconciler
            .apply(
                snapshot_of(vec![(SectionKind::Home, vec![home_item(1), changed.clone()])]),
                &mut surface,
            )
            .unwrap();

        assert_eq!(
            surface.instructions,
            vec![
                RenderInstruction::UpdateItem {
                    id: ItemId(2),
                    item: changed
                },
                RenderInstruction::SetHeader {
                    section: SectionKind::Home,
                    title: "Home"
                },
            ]
        );
    }

    #[test]
    fn test_reorder_moves_single_item() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();
        reconciler
            .apply(
                snapshot_of(vec![(
                    SectionKind::Home,
                    vec![home_item(1), home_item(2), home_item(3)],
                )]),
                &mut surface,
            )
            .unwrap();
        surface.instructions.clear();

        // 3 jumps to the front; 1 and 2 keep their relative order.
        reconciler
            .apply(
                snapshot_of(vec![(
                    SectionKind::Home,
                    vec![home_item(3), home_item(1), home_item(2)],
                )]),
                &mut surface,
            )
            .unwrap();

        assert_eq!(
            surface.instructions,
            vec![
                RenderInstruction::MoveItem {
                    id: ItemId(3),
                    from: 2,
                    to: 0
                },
                RenderInstruction::SetHeader {
                    section: SectionKind::Home,
                    title: "Home"
                },
            ]
        );
    }

    #[test]
    fn test_update_precedes_move_for_same_item() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();
        reconciler
            .apply(
                snapshot_of(vec![(SectionKind::Home, vec![home_item(1), home_item(2)])]),
                &mut surface,
            )
            .unwrap();
        surface.instructions.clear();

        let mut changed = home_item(2);
        changed.completed = true;
        reconciler
            .apply(
                snapshot_of(vec![(SectionKind::Home, vec![changed.clone(), home_item(1)])]),
                &mut surface,
            )
            .unwrap();

        assert_eq!(
            surface.instructions,
            vec![
                RenderInstruction::UpdateItem {
                    id: ItemId(2),
                    item: changed
                },
                RenderInstruction::MoveItem {
                    id: ItemId(2),
                    from: 1,
                    to: 0
                },
                RenderInstruction::SetHeader {
                    section: SectionKind::Home,
                    title: "Home"
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_identity_rejected_before_any_instruction() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();

        let snapshot = snapshot_of(vec![
            (SectionKind::Home, vec![home_item(5)]),
            (SectionKind::Office, vec![office_item(5)]),
        ]);
        let err = reconciler.apply(snapshot, &mut surface).unwrap_err();

        assert_eq!(err, ReconcileError::DuplicateIdentity { id: ItemId(5) });
        assert!(surface.instructions.is_empty());
        assert!(!reconciler.is_populated());
    }

    #[test]
    fn test_removed_section_takes_items_with_it() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();
        reconciler
            .apply(
                snapshot_of(vec![
                    (SectionKind::Home, vec![home_item(1)]),
                    (SectionKind::Office, vec![office_item(11)]),
                ]),
                &mut surface,
            )
            .unwrap();
        surface.instructions.clear();

        reconciler
            .apply(
                snapshot_of(vec![(SectionKind::Home, vec![home_item(1)])]),
                &mut surface,
            )
            .unwrap();

        // One instruction: the section removal. No per-item removals, and
        // home is untouched so its header is not re-emitted.
        assert_eq!(
            surface.instructions,
            vec![RenderInstruction::RemoveSection {
                kind: SectionKind::Office
            }]
        );
    }

    #[test]
    fn test_swapped_sections_rebuild_displaced_one() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();
        reconciler
            .apply(
                snapshot_of(vec![
                    (SectionKind::Home, vec![home_item(1)]),
                    (SectionKind::Office, vec![office_item(11)]),
                ]),
                &mut surface,
            )
            .unwrap();
        surface.instructions.clear();

        reconciler
            .apply(
                snapshot_of(vec![
                    (SectionKind::Office, vec![office_item(11)]),
                    (SectionKind::Home, vec![home_item(1)]),
                ]),
                &mut surface,
            )
            .unwrap();

        assert_eq!(
            surface.instructions,
            vec![
                RenderInstruction::RemoveSection {
                    kind: SectionKind::Office
                },
                RenderInstruction::InsertSection {
                    kind: SectionKind::Office,
                    position: 0
                },
                RenderInstruction::InsertItem {
                    item: office_item(11),
                    section: SectionKind::Office,
                    position: 0
                },
                RenderInstruction::SetHeader {
                    section: SectionKind::Office,
                    title: "Office"
                },
            ]
        );
    }

    #[test]
    fn test_cross_section_move_is_remove_plus_insert() {
        let mut reconciler = Reconciler::new();
        let mut surface = RecordingSurface::new();
        reconciler
            .apply(
                snapshot_of(vec![
                    (SectionKind::Home, vec![home_item(1), home_item(2)]),
                    (SectionKind::Office, vec![office_item(11)]),
                ]),
                &mut surface,
            )
            .unwrap();
        surface.instructions.clear();

        // Item 2 migrates to the office section.
        let mut migrated = home_item(2);
        migrated.section = SectionKind::Office;
        reconciler
            .apply(
                snapshot_of(vec![
                    (SectionKind::Home, vec![home_item(1)]),
                    (SectionKind::Office, vec![office_item(11), migrated.clone()]),
                ]),
                &mut surface,
            )
            .unwrap();

        assert_eq!(
            surface.instructions,
            vec![
                RenderInstruction::RemoveItem {
                    id: ItemId(2),
                    section: SectionKind::Home
                },
                RenderInstruction::SetHeader {
                    section: SectionKind::Home,
                    title: "Home"
                },
                RenderInstruction::InsertItem {
                    item: migrated,
                    section: SectionKind::Office,
                    position: 1
                },
                RenderInstruction::SetHeader {
                    section: SectionKind::Office,
                    title: "Office"
                },
            ]
        );
    }
}
