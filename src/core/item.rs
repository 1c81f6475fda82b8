//! # Domain Model
//!
//! The checklist vocabulary: items, identities, and sections.
//!
//! An item's `id` is its identity for diffing — two items with the same id
//! are the same entry across snapshots, whatever their other fields say.
//! Everything else (completed flag, notes) is mutable payload that a diff
//! reports as an in-place update.
//!
//! Sections are a closed set. Adding one is a code change, not data: the
//! title table, the data-file parser, and the `--focus` flag all key off
//! this enum, so an unknown section name can only enter through external
//! input and is rejected there.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Identity of a checklist item. Unique across the whole store, not just
/// within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of checklist sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SectionKind {
    Home,
    Office,
}

impl SectionKind {
    /// All kinds in display order.
    pub const ALL: [SectionKind; 2] = [SectionKind::Home, SectionKind::Office];

    /// Fixed section-kind → display-title mapping.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Home => "Home",
            SectionKind::Office => "Office",
        }
    }

    /// Canonical lowercase name, as written in data files.
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Home => "home",
            SectionKind::Office => "office",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A section name outside the closed set. Raised when parsing external
/// input (data files, flags); the enum itself cannot hold an unknown kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSectionError(pub String);

impl fmt::Display for UnknownSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}' (expected 'home' or 'office')", self.0)
    }
}

impl std::error::Error for UnknownSectionError {}

impl FromStr for SectionKind {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(SectionKind::Home),
            "office" => Ok(SectionKind::Office),
            _ => Err(UnknownSectionError(s.to_string())),
        }
    }
}

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
    pub section: SectionKind,
    pub notes: Option<String>,
}

impl Item {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        completed: bool,
        section: SectionKind,
        notes: Option<&str>,
    ) -> Self {
        Item {
            id: ItemId(id),
            title: title.into(),
            completed,
            section,
            notes: notes.map(str::to_string),
        }
    }

    /// True when the payload fields differ while the identity matches.
    /// Drives the "updated in place" case of the diff.
    pub fn fields_differ(&self, other: &Item) -> bool {
        debug_assert_eq!(self.id, other.id);
        self.title != other.title
            || self.completed != other.completed
            || self.section != other.section
            || self.notes != other.notes
    }
}
