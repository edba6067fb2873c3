//! JSON Snapshot Repository
//!
//! Persists the workbook snapshot at `~/.waypoint/workbook.json`. Saves
//! take an exclusive advisory lock on a sibling `.lock` file so two
//! processes cannot interleave writes.

use std::fs;
use std::path::PathBuf;

use fs2::FileExt;

use crate::domain::ports::{SnapshotError, SnapshotRepository};
use crate::domain::store::Snapshot;

pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new() -> Self {
        Self {
            path: default_workbook_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn save_to_disk(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Access {
                message: e.to_string(),
            })?;
        }

        let content =
            serde_json::to_string_pretty(snapshot).map_err(|e| SnapshotError::Serialization {
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| SnapshotError::Access {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for JsonSnapshotRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SnapshotError::Access {
            message: e.to_string(),
        })?;

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| SnapshotError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Access {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| SnapshotError::Access {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| SnapshotError::Access {
                message: e.to_string(),
            })?;

        let result = self.save_to_disk(snapshot);

        let _ = lock_file.unlock();
        result
    }
}

/// Default location, overridable for tests and scripting
pub fn default_workbook_path() -> PathBuf {
    if let Ok(path) = std::env::var("WAYPOINT_WORKBOOK_PATH") {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .map(|h| h.join(".waypoint/workbook.json"))
        .unwrap_or_else(|| PathBuf::from("~/.waypoint/workbook.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_returns_none() {
        let dir = tempdir().unwrap();
        let repo = JsonSnapshotRepository::with_path(dir.path().join("workbook.json"));
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn load_corrupted_returns_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("workbook.json");
        fs::write(&path, "{ not json ]").unwrap();

        let repo = JsonSnapshotRepository::with_path(path.clone());
        let err = repo.load().unwrap_err();
        assert!(matches!(err, SnapshotError::Corrupted { .. }));

        let msg = err.to_string();
        assert!(msg.contains("workbook file corrupted"));
        assert!(msg.contains(&path.display().to_string()));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let repo = JsonSnapshotRepository::with_path(dir.path().join("workbook.json"));

        let mut snapshot = Snapshot::seeded();
        snapshot.onboarding_completed = true;
        snapshot.expense_settings.monthly_goal = 3150.0;

        repo.save(&snapshot).unwrap();
        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep/nested/workbook.json");
        let repo = JsonSnapshotRepository::with_path(nested.clone());

        repo.save(&Snapshot::seeded()).unwrap();
        assert!(nested.exists());
    }
}
