//! # List Surface
//!
//! The render surface behind the TUI: an imperative row model that the
//! reconciler drives one [`RenderInstruction`] at a time. It never sees
//! snapshots — only the instruction stream — which is exactly what makes it
//! a faithful stand-in for a retained-mode view hierarchy.
//!
//! Positions in incoming instructions refer to this surface's current state,
//! so each instruction applies directly with no index translation.

use log::warn;

use crate::core::item::{Item, ItemId, SectionKind};
use crate::core::reconcile::{RenderInstruction, RenderSurface};

/// One rendered section: its kind, the header title the reconciler set, and
/// the item rows in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSection {
    pub kind: SectionKind,
    pub header: String,
    pub rows: Vec<Item>,
}

/// A flattened view of the surface for the checklist component: header rows
/// interleaved with item rows, in display order.
#[derive(Debug)]
pub enum SurfaceRow<'a> {
    Header { kind: SectionKind, title: &'a str },
    Item(&'a Item),
}

/// The TUI's retained row model.
#[derive(Default)]
pub struct ListSurface {
    sections: Vec<SurfaceSection>,
    /// Instructions applied over the surface's lifetime.
    applied_total: usize,
}

impl ListSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[SurfaceSection] {
        &self.sections
    }

    pub fn applied_total(&self) -> usize {
        self.applied_total
    }

    /// Headers and items interleaved, in display order.
    pub fn rows(&self) -> Vec<SurfaceRow<'_>> {
        let mut rows = Vec::new();
        for section in &self.sections {
            rows.push(SurfaceRow::Header {
                kind: section.kind,
                title: &section.header,
            });
            rows.extend(section.rows.iter().map(SurfaceRow::Item));
        }
        rows
    }

    /// All item ids in display order, for keyboard navigation.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter().map(|i| i.id))
            .collect()
    }

    /// Flattened row index of an item (headers included), for scroll
    /// targeting in the checklist.
    pub fn row_index_of(&self, id: ItemId) -> Option<usize> {
        let mut index = 0;
        for section in &self.sections {
            index += 1; // header row
            for item in &section.rows {
                if item.id == id {
                    return Some(index);
                }
                index += 1;
            }
        }
        None
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|i| i.id == id)
    }

    fn section_mut(&mut self, kind: SectionKind) -> Option<&mut SurfaceSection> {
        self.sections.iter_mut().find(|s| s.kind == kind)
    }

    /// The section currently holding an item. Ids are unique across the
    /// whole list, so this is unambiguous.
    fn owning_section_mut(&mut self, id: ItemId) -> Option<&mut SurfaceSection> {
        self.sections
            .iter_mut()
            .find(|s| s.rows.iter().any(|i| i.id == id))
    }
}

impl RenderSurface for ListSurface {
    fn apply(&mut self, instruction: RenderInstruction) {
        self.applied_total += 1;
        match instruction {
            RenderInstruction::InsertSection { kind, position } => {
                let position = position.min(self.sections.len());
                self.sections.insert(
                    position,
                    SurfaceSection {
                        kind,
                        header: String::new(),
                        rows: Vec::new(),
                    },
                );
            }
            RenderInstruction::RemoveSection { kind } => {
                self.sections.retain(|s| s.kind != kind);
            }
            RenderInstruction::InsertItem {
                item,
                section,
                position,
            } => match self.section_mut(section) {
                Some(s) => {
                    let position = position.min(s.rows.len());
                    s.rows.insert(position, item);
                }
                None => warn!("insert into missing section {section:?}, ignoring"),
            },
            RenderInstruction::RemoveItem { id, section } => match self.section_mut(section) {
                Some(s) => s.rows.retain(|i| i.id != id),
                None => warn!("remove from missing section {section:?}, ignoring"),
            },
            RenderInstruction::UpdateItem { id, item } => {
                match self
                    .owning_section_mut(id)
                    .and_then(|s| s.rows.iter_mut().find(|i| i.id == id))
                {
                    Some(row) => *row = item,
                    None => warn!("update of unknown item {id}, ignoring"),
                }
            }
            RenderInstruction::MoveItem { id, from, to } => match self.owning_section_mut(id) {
                Some(s) if from < s.rows.len() && s.rows[from].id == id => {
                    let row = s.rows.remove(from);
                    let to = to.min(s.rows.len());
                    s.rows.insert(to, row);
                }
                _ => warn!("move of unknown item {id}, ignoring"),
            },
            RenderInstruction::SetHeader { section, title } => match self.section_mut(section) {
                Some(s) => s.header = title.to_string(),
                None => warn!("header for missing section {section:?}, ignoring"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reconcile::Reconciler;
    use crate::test_support::{home_item, office_item, snapshot_of};

    fn applied(sections: Vec<(SectionKind, Vec<Item>)>) -> ListSurface {
        let mut surface = ListSurface::new();
        let mut reconciler = Reconciler::new();
        reconciler
            .apply(snapshot_of(sections), &mut surface)
            .unwrap();
        surface
    }

    #[test]
    fn test_bulk_apply_builds_row_model() {
        let surface = applied(vec![
            (SectionKind::Home, vec![home_item(1), home_item(2)]),
            (SectionKind::Office, vec![office_item(11)]),
        ]);

        assert_eq!(surface.sections().len(), 2);
        assert_eq!(surface.sections()[0].header, "Home");
        assert_eq!(surface.sections()[1].header, "Office");
        assert_eq!(surface.item_ids(), vec![ItemId(1), ItemId(2), ItemId(11)]);
        // 2 headers + 3 items
        assert_eq!(surface.rows().len(), 5);
    }

    #[test]
    fn test_surface_tracks_incremental_changes() {
        let mut surface = ListSurface::new();
        let mut reconciler = Reconciler::new();
        reconciler
            .apply(
                snapshot_of(vec![(
                    SectionKind::Home,
                    vec![home_item(1), home_item(2), home_item(3)],
                )]),
                &mut surface,
            )
            .unwrap();

        // {1,2,3} -> {1,3,4}: remove 2, insert 4 at the end.
        reconciler
            .apply(
                snapshot_of(vec![(
                    SectionKind::Home,
                    vec![home_item(1), home_item(3), home_item(4)],
                )]),
                &mut surface,
            )
            .unwrap();

        assert_eq!(surface.item_ids(), vec![ItemId(1), ItemId(3), ItemId(4)]);
    }

    #[test]
    fn test_surface_order_matches_declared_order_after_moves() {
        let mut surface = ListSurface::new();
        let mut reconciler = Reconciler::new();
        reconciler
            .apply(
                snapshot_of(vec![(
                    SectionKind::Home,
                    vec![home_item(1), home_item(2), home_item(3), home_item(4)],
                )]),
                &mut surface,
            )
            .unwrap();

        let target = vec![home_item(4), home_item(2), home_item(1), home_item(3)];
        reconciler
            .apply(
                snapshot_of(vec![(SectionKind::Home, target.clone())]),
                &mut surface,
            )
            .unwrap();

        let want: Vec<ItemId> = target.iter().map(|i| i.id).collect();
        assert_eq!(surface.item_ids(), want);
    }

    #[test]
    fn test_update_replaces_row_in_place() {
        let mut surface = applied(vec![(SectionKind::Home, vec![home_item(1), home_item(2)])]);
        let mut changed = home_item(1);
        changed.completed = true;
        surface.apply(RenderInstruction::UpdateItem {
            id: ItemId(1),
            item: changed,
        });

        assert!(surface.item(ItemId(1)).unwrap().completed);
        assert_eq!(surface.item_ids(), vec![ItemId(1), ItemId(2)]);
    }

    #[test]
    fn test_malformed_instruction_is_ignored() {
        let mut surface = applied(vec![(SectionKind::Home, vec![home_item(1)])]);
        surface.apply(RenderInstruction::RemoveItem {
            id: ItemId(1),
            section: SectionKind::Office,
        });
        // Home row untouched; nothing panicked.
        assert_eq!(surface.item_ids(), vec![ItemId(1)]);
    }
}
