//! In-memory Snapshot Repository
//!
//! Backs a `Workbook` with a shared cell instead of a file. Clones share
//! the same cell, which lets tests hand one end to the store and keep
//! the other to inspect what was persisted.

use std::sync::{Arc, Mutex};

use crate::domain::ports::{SnapshotError, SnapshotRepository};
use crate::domain::store::Snapshot;

#[derive(Clone, Default)]
pub struct MemorySnapshotRepository {
    state: Arc<Mutex<Option<Snapshot>>>,
}

impl MemorySnapshotRepository {
    /// Starts with no snapshot, like a first run
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: Arc::new(Mutex::new(Some(snapshot))),
        }
    }

    /// The most recently saved snapshot, if any
    pub fn saved(&self) -> Option<Snapshot> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl SnapshotRepository for MemorySnapshotRepository {
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        Ok(self.saved())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        *self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(snapshot.clone());
        Ok(())
    }
}
