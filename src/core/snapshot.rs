//! # Snapshot
//!
//! An immutable, ordered description of everything to render at a point in
//! time: sections in display order, each with its items in display order.
//!
//! Snapshots are built fresh by the caller whenever the data changes and
//! handed to the reconciler, which keeps only the most recently *applied*
//! one for diffing. Nothing here mutates in place.

use crate::core::item::{Item, ItemId, SectionKind};

/// One section's slice of a snapshot: the kind plus its items in display
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSnapshot {
    pub kind: SectionKind,
    pub items: Vec<Item>,
}

impl SectionSnapshot {
    pub fn new(kind: SectionKind, items: Vec<Item>) -> Self {
        SectionSnapshot { kind, items }
    }
}

/// The unit the reconciler diffs against: an ordered sequence of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub sections: Vec<SectionSnapshot>,
}

impl Snapshot {
    pub fn new(sections: Vec<SectionSnapshot>) -> Self {
        Snapshot { sections }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionSnapshot> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn contains_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }

    /// Total item count across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// First id that appears more than once across the whole snapshot,
    /// if any. Ids must be globally unique, not merely unique per section.
    pub fn duplicate_id(&self) -> Option<ItemId> {
        let mut seen = std::collections::HashSet::new();
        for section in &self.sections {
            for item in &section.items {
                if !seen.insert(item.id) {
                    return Some(item.id);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, section: SectionKind) -> Item {
        Item::new(id, format!("task {id}"), false, section, None)
    }

    #[test]
    fn test_duplicate_id_within_section() {
        let snapshot = Snapshot::new(vec![SectionSnapshot::new(
            SectionKind::Home,
            vec![item(1, SectionKind::Home), item(1, SectionKind::Home)],
        )]);
        assert_eq!(snapshot.duplicate_id(), Some(ItemId(1)));
    }

    #[test]
    fn test_duplicate_id_across_sections() {
        let snapshot = Snapshot::new(vec![
            SectionSnapshot::new(SectionKind::Home, vec![item(5, SectionKind::Home)]),
            SectionSnapshot::new(SectionKind::Office, vec![item(5, SectionKind::Office)]),
        ]);
        assert_eq!(snapshot.duplicate_id(), Some(ItemId(5)));
    }

    #[test]
    fn test_no_duplicates() {
        let snapshot = Snapshot::new(vec![
            SectionSnapshot::new(
                SectionKind::Home,
                vec![item(1, SectionKind::Home), item(2, SectionKind::Home)],
            ),
            SectionSnapshot::new(SectionKind::Office, vec![item(11, SectionKind::Office)]),
        ]);
        assert_eq!(snapshot.duplicate_id(), None);
        assert_eq!(snapshot.item_count(), 3);
    }

}
