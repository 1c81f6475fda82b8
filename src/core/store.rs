//! # Item Store
//!
//! Holds the checklist items, partitioned by section, and supplies them in
//! display order to whoever builds a snapshot. Reads are pure; the mutators
//! exist for the TUI to drive (toggle, remove, reorder, reset).
//!
//! The store can be seeded from the built-in checklist or loaded from a TOML
//! file (`[[items]]` entries). File entries carry their section as a plain
//! string, so loading goes through a raw serde shape and maps section names
//! through `SectionKind::from_str` — an unknown name or a duplicated id is a
//! load error, reported before the UI ever comes up.
//!
//! Saves are atomic: write a `.tmp` sibling, then rename over the target.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::item::{Item, ItemId, SectionKind, UnknownSectionError};

/// Errors from loading or saving a checklist file.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    UnknownSection(UnknownSectionError),
    DuplicateId(ItemId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "checklist I/O error: {e}"),
            StoreError::Parse(e) => write!(f, "checklist parse error: {e}"),
            StoreError::UnknownSection(e) => write!(f, "checklist error: {e}"),
            StoreError::DuplicateId(id) => {
                write!(f, "checklist error: item id {id} appears more than once")
            }
        }
    }
}

impl std::error::Error for StoreError {}

// ============================================================================
// File Shape (raw serde structs, section as a plain string)
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct ChecklistFile {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawItem {
    id: u64,
    title: String,
    section: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    notes: Option<String>,
}

impl RawItem {
    fn into_item(self) -> Result<Item, StoreError> {
        let section = self
            .section
            .parse::<SectionKind>()
            .map_err(StoreError::UnknownSection)?;
        Ok(Item {
            id: ItemId(self.id),
            title: self.title,
            completed: self.completed,
            section,
            notes: self.notes,
        })
    }

    fn from_item(item: &Item) -> Self {
        RawItem {
            id: item.id.0,
            title: item.title.clone(),
            section: item.section.name().to_string(),
            completed: item.completed,
            notes: item.notes.clone(),
        }
    }
}

// ============================================================================
// Store
// ============================================================================

/// The domain items in insertion order. Per-section display order is the
/// relative order of that section's items within `items`.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ItemStore {
    /// A store holding the built-in checklist.
    pub fn seeded() -> Self {
        ItemStore { items: seed_items() }
    }

    /// Load a checklist file, validating section names and id uniqueness.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(path).map_err(StoreError::Io)?;
        let file: ChecklistFile = toml::from_str(&contents).map_err(StoreError::Parse)?;

        let mut items = Vec::with_capacity(file.items.len());
        let mut seen = std::collections::HashSet::new();
        for raw in file.items {
            let item = raw.into_item()?;
            if !seen.insert(item.id) {
                return Err(StoreError::DuplicateId(item.id));
            }
            items.push(item);
        }

        info!("Loaded {} item(s) from {}", items.len(), path.display());
        Ok(ItemStore { items })
    }

    /// Write the current items back as TOML. Atomic: temp file, then rename.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let file = ChecklistFile {
            items: self.items.iter().map(RawItem::from_item).collect(),
        };
        let contents = toml::to_string_pretty(&file)
            .expect("checklist items always serialize to TOML");

        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, contents).map_err(StoreError::Io)?;
        fs::rename(&tmp, path).map_err(StoreError::Io)?;
        debug!("Saved {} item(s) to {}", self.items.len(), path.display());
        Ok(())
    }

    /// Items of one section, in display order. Pure read.
    pub fn fetch_section(&self, kind: SectionKind) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.section == kind)
            .cloned()
            .collect()
    }

    /// (completed, total) across all sections, for the title bar.
    pub fn completion_counts(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|i| i.completed).count();
        (done, self.items.len())
    }

    // ------------------------------------------------------------------
    // Mutators driven by the TUI
    // ------------------------------------------------------------------

    /// Flip an item's completed flag. Returns false if the id is gone.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove an item entirely. Returns false if the id is gone.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Swap an item with its predecessor within its section. No-op at the
    /// top of the section.
    pub fn move_up(&mut self, id: ItemId) -> bool {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        let section = self.items[index].section;
        let Some(prev) = self.items[..index]
            .iter()
            .rposition(|i| i.section == section)
        else {
            return false;
        };
        self.items.swap(index, prev);
        true
    }

    /// Swap an item with its successor within its section. No-op at the
    /// bottom of the section.
    pub fn move_down(&mut self, id: ItemId) -> bool {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        let section = self.items[index].section;
        let Some(offset) = self.items[index + 1..]
            .iter()
            .position(|i| i.section == section)
        else {
            return false;
        };
        self.items.swap(index, index + 1 + offset);
        true
    }

    /// Throw away all edits and restore the built-in checklist.
    pub fn reset(&mut self) {
        self.items = seed_items();
    }
}

/// The built-in checklist.
fn seed_items() -> Vec<Item> {
    use SectionKind::{Home, Office};
    vec![
        Item::new(1, "Shopping", false, Home, Some("Milk, Salt, Eggs")),
        Item::new(2, "Gardening", true, Home, Some("Water plants, weeding, prune")),
        Item::new(3, "Kids Homework", false, Home, Some("Maths")),
        Item::new(4, "Prepare Barbeque", false, Home, Some("Corn, Pepper, Chicken")),
        Item::new(5, "Holidays", false, Home, Some("Tickets, packing")),
        Item::new(6, "Birthday", false, Home, Some("Cake, Guest list")),
        Item::new(11, "Clean desk", true, Office, Some("Covid safe desk !")),
        Item::new(12, "Complete Spreadsheet", false, Office, Some("Section 1,4 need recalculation")),
        Item::new(13, "Print report", false, Office, Some("A4 sheets")),
        Item::new(14, "Meeting", true, Office, Some("Room 4.1 with Matt")),
        Item::new(15, "Place order", true, Office, Some("Note pads, pens, markers")),
        Item::new(16, "Team day out", true, Office, Some("Organise, find place")),
        Item::new(17, "Release test", true, Office, Some("Release notes")),
    ]
}
