//! Folder records and the flattening traversal
//!
//! A folder is either a leaf record or a composite owning an ordered
//! sequence of child slots. A slot may be absent; absent slots are
//! skipped by the traversal rather than treated as an error.

use crate::size::FolderSize;
use serde::{Deserialize, Serialize};

/// A simple (leaf) folder record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Name of this folder
    pub name: String,
    /// Size category
    pub size: FolderSize,
}

impl FolderRecord {
    /// Creates a new folder record
    pub fn new(name: impl Into<String>, size: FolderSize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A folder that owns an ordered sequence of child slots
///
/// Each slot may hold a leaf, another composite, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeFolder {
    /// Name of this folder
    pub name: String,
    /// Size category
    pub size: FolderSize,
    /// Child slots, in order
    pub children: Vec<Option<Folder>>,
}

impl CompositeFolder {
    /// Creates a new composite folder
    pub fn new(name: impl Into<String>, size: FolderSize, children: Vec<Option<Folder>>) -> Self {
        Self {
            name: name.into(),
            size,
            children,
        }
    }
}

/// Folder
///
/// Represents a single folder record, leaf or composite. Equality is
/// structural and covers the entire child sequence of a composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Folder {
    /// Leaf folder
    Leaf(FolderRecord),
    /// Composite folder with child slots
    Composite(CompositeFolder),
}

impl Folder {
    /// Creates a leaf folder
    pub fn leaf(name: impl Into<String>, size: FolderSize) -> Self {
        Self::Leaf(FolderRecord::new(name, size))
    }

    /// Creates a composite folder
    pub fn composite(
        name: impl Into<String>,
        size: FolderSize,
        children: Vec<Option<Folder>>,
    ) -> Self {
        Self::Composite(CompositeFolder::new(name, size, children))
    }

    /// Returns the folder name
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(record) => &record.name,
            Self::Composite(folder) => &folder.name,
        }
    }

    /// Returns the size category
    pub fn size(&self) -> FolderSize {
        match self {
            Self::Leaf(record) => record.size,
            Self::Composite(folder) => folder.size,
        }
    }

    /// Returns true if this folder owns child slots
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Returns the composite record if this is a composite folder
    pub fn as_composite(&self) -> Option<&CompositeFolder> {
        match self {
            Self::Composite(folder) => Some(folder),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the child slots if this folder is composite
    pub fn children(&self) -> Option<&[Option<Folder>]> {
        self.as_composite().map(|folder| folder.children.as_slice())
    }
}

/// Flattens folder slots into a single ordered collection
///
/// Pre-order, depth-first: each folder appears immediately before its
/// children, children in their original order. Absent slots are skipped.
/// No deduplication is performed.
pub fn flatten(slots: &[Option<Folder>]) -> Vec<Folder> {
    let mut out = Vec::new();
    flatten_into(slots, &mut out);
    out
}

/// Flattens folder slots, appending to an existing collection
pub fn flatten_into(slots: &[Option<Folder>], out: &mut Vec<Folder>) {
    for slot in slots {
        if let Some(folder) = slot {
            out.push(folder.clone());
            if let Some(children) = folder.children() {
                flatten_into(children, out);
            }
        }
    }
}
