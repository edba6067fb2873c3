//! SnapshotRepository port
//!
//! Persists the workbook snapshot at `~/.waypoint/workbook.json`.

use std::path::PathBuf;

use crate::domain::store::Snapshot;

pub trait SnapshotRepository: Send + Sync {
    /// `Ok(None)` means no snapshot exists yet; the store seeds a fresh
    /// one. A present-but-unreadable file is `Err(Corrupted)`, never
    /// silently replaced.
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError>;
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Failed to access workbook: {message}")]
    Access { message: String },

    #[error("Failed to serialize workbook: {message}")]
    Serialization { message: String },

    #[error(
        "workbook file corrupted: {path}\n  → Fix: Move the file aside, then rerun to start fresh\n  → Run: mv {path} {path}.bak\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
