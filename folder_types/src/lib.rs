//! # Folder Types
//!
//! This crate defines the fundamental folder record types for the file cabinet.
//!
//! ## Philosophy
//!
//! - **Records, not nodes**: A folder is a plain named, sized record; hierarchy is data, not identity
//! - **Flat is addressable**: Nested groupings are expanded into a single ordered collection
//! - **Testable**: Records are serializable and can be constructed directly in tests
//! - **Closed vocabulary**: Sizes form a fixed three-value category, parsed explicitly
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A filesystem (no paths, no storage, no I/O)
//! - A tree library (no parent pointers, no rebalancing, no cursors)
//! - A place for registry state (just the types and the flattening traversal)

pub mod folder;
pub mod size;

pub use folder::{flatten, flatten_into, CompositeFolder, Folder, FolderRecord};
pub use size::{FolderSize, ParseFolderSizeError};
