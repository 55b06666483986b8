//! # Cabinet Service
//!
//! This crate implements the flattening folder cabinet.
//!
//! ## Philosophy
//!
//! - **Flat, not nested**: Composite folders are expanded at insertion so every
//!   descendant is independently addressable
//! - **Owned collection**: The cabinet exclusively owns its storage; reads hand
//!   out copies or shared references, never aliases
//! - **Total operations**: Lookups and removals targeting absent entries yield
//!   empty results, not errors
//! - **Auditable**: Every mutation is recorded as a structured event
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A filesystem or storage service (no persistence, no I/O)
//! - A concurrent structure (callers needing shared mutation wrap it in a lock)
//! - A search engine (exact-name lookup and one fixed size filter only)

use folder_types::{flatten_into, Folder, FolderSize, ParseFolderSizeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cabinet error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CabinetError {
    /// The size filter was given a token outside the known categories
    #[error("Folder size must be SMALL, MEDIUM or LARGE")]
    InvalidSize(#[from] ParseFolderSizeError),
}

/// Cabinet event for audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinetEvent {
    /// An entry landed in the flat collection
    Inserted {
        name: String,
        size: FolderSize,
        seq: u64,
    },
    /// A removal matched an entry
    Removed { name: String, seq: u64 },
    /// The whole collection was replaced
    Replaced { previous_count: usize, seq: u64 },
}

/// Read side of the cabinet
///
/// Lookup operations only; mutation stays on the concrete type.
pub trait Cabinet {
    /// Returns the first entry whose name exactly equals `name`
    fn find_folder_by_name(&self, name: &str) -> Option<&Folder>;

    /// Returns every entry whose size matches the given token
    ///
    /// The token is parsed case-insensitively; an unrecognized token fails
    /// with [`CabinetError::InvalidSize`].
    fn find_folders_by_size(&self, size: &str) -> Result<Vec<Folder>, CabinetError>;

    /// Returns the number of entries in the flat collection
    fn count(&self) -> usize;
}

/// Folder cabinet
///
/// Owns an ordered collection of folder records, populated by recursively
/// flattening whatever is inserted. Composites appear immediately before
/// their children; absent child slots are skipped; duplicates are kept.
pub struct FolderCabinet {
    /// The flattened collection, in insertion order
    flat_folders: Vec<Folder>,
    /// Audit trail of cabinet events
    audit_trail: Vec<CabinetEvent>,
    /// Next event sequence number
    next_seq: u64,
}

impl FolderCabinet {
    /// Creates a new empty cabinet
    pub fn new() -> Self {
        Self {
            flat_folders: Vec::new(),
            audit_trail: Vec::new(),
            next_seq: 0,
        }
    }

    /// Replaces the whole collection with the flattening of `folders`
    ///
    /// An empty input yields an empty cabinet.
    pub fn set_folders(&mut self, folders: &[Option<Folder>]) {
        let seq = self.next_seq();
        self.audit_trail.push(CabinetEvent::Replaced {
            previous_count: self.flat_folders.len(),
            seq,
        });
        self.flat_folders.clear();
        self.add_folders(folders);
    }

    /// Flattens `folders` and appends the result, keeping prior content
    pub fn add_folders(&mut self, folders: &[Option<Folder>]) {
        let mut flattened = Vec::new();
        flatten_into(folders, &mut flattened);

        for folder in flattened {
            let seq = self.next_seq();
            self.audit_trail.push(CabinetEvent::Inserted {
                name: folder.name().to_string(),
                size: folder.size(),
                seq,
            });
            self.flat_folders.push(folder);
        }
    }

    /// Adds a single folder (and, if composite, its flattened descendants)
    pub fn add_folder(&mut self, folder: Folder) {
        self.add_folders(&[Some(folder)]);
    }

    /// Removes the first entry equal to `folder`
    ///
    /// Returns whether a match existed. A composite's previously flattened
    /// descendants are separate entries and stay in the collection.
    pub fn remove_folder(&mut self, folder: &Folder) -> bool {
        let pos = self.flat_folders.iter().position(|f| f == folder);
        match pos {
            Some(pos) => {
                let removed = self.flat_folders.remove(pos);
                let seq = self.next_seq();
                self.audit_trail.push(CabinetEvent::Removed {
                    name: removed.name().to_string(),
                    seq,
                });
                true
            }
            None => false,
        }
    }

    /// Returns an owned copy of the flat collection, in order
    pub fn flat_folders(&self) -> Vec<Folder> {
        self.flat_folders.clone()
    }

    /// Returns the audit trail
    pub fn events(&self) -> &[CabinetEvent] {
        &self.audit_trail
    }

    /// Gets next sequence number and increments counter
    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl Cabinet for FolderCabinet {
    fn find_folder_by_name(&self, name: &str) -> Option<&Folder> {
        self.flat_folders.iter().find(|f| f.name() == name)
    }

    fn find_folders_by_size(&self, size: &str) -> Result<Vec<Folder>, CabinetError> {
        let folder_size: FolderSize = size.parse()?;
        Ok(self
            .flat_folders
            .iter()
            .filter(|f| f.size() == folder_size)
            .cloned()
            .collect())
    }

    fn count(&self) -> usize {
        self.flat_folders.len()
    }
}

impl Default for FolderCabinet {
    fn default() -> Self {
        Self::new()
    }
}
