//! Read-only access to candidates and team members.
//!
//! The dashboard never mutates these records. A [`Directory`] is injected
//! into the app so the built-in fixtures can be swapped for a roster file
//! (or, eventually, a real backend) without touching view code.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Candidate, TeamMember};

mod file;
mod mock;

pub use file::{FileDirectory, Roster, RosterFormat};
pub use mock::MockDirectory;

/// Errors raised while loading directory data
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported roster format for {0} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
    #[error("failed to parse roster {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("duplicate {kind} id {id} in roster")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// Source of the records the dashboard displays
pub trait Directory {
    fn list_candidates(&self) -> Result<Vec<Candidate>, DirectoryError>;

    fn list_team_members(&self) -> Result<Vec<TeamMember>, DirectoryError>;

    /// Short label for logs and the header bar
    fn source_name(&self) -> String;
}
