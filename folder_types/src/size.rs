//! Folder size categories
//!
//! Sizes form a closed three-value vocabulary. Parsing is case-insensitive
//! and rejects everything outside the vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Size category of a folder
///
/// Serializes to its uppercase token (`"SMALL"`, `"MEDIUM"`, `"LARGE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FolderSize {
    Small,
    Medium,
    Large,
}

impl FolderSize {
    /// Returns the canonical uppercase token for this size
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderSize::Small => "SMALL",
            FolderSize::Medium => "MEDIUM",
            FolderSize::Large => "LARGE",
        }
    }
}

impl fmt::Display for FolderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a size token names no known category
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized folder size: {token}")]
pub struct ParseFolderSizeError {
    /// The token that failed to parse
    pub token: String,
}

impl FromStr for FolderSize {
    type Err = ParseFolderSizeError;

    /// Parses a size token case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SMALL" => Ok(FolderSize::Small),
            "MEDIUM" => Ok(FolderSize::Medium),
            "LARGE" => Ok(FolderSize::Large),
            _ => Err(ParseFolderSizeError {
                token: s.to_string(),
            }),
        }
    }
}
