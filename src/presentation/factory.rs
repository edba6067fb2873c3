//! Workbook Factory
//!
//! Opens the workbook with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::store::Workbook;
use crate::error::WaypointResult;
use crate::infrastructure::{JsonSnapshotRepository, SystemClock, UuidProvider};

/// Open the workbook at the location the config resolves to
pub fn open_workbook(config: &Config) -> WaypointResult<Workbook> {
    open_workbook_at(config.workbook_path())
}

/// Open the workbook at an explicit snapshot path
pub fn open_workbook_at(path: PathBuf) -> WaypointResult<Workbook> {
    Workbook::open(
        Box::new(JsonSnapshotRepository::with_path(path)),
        Box::new(UuidProvider),
        Box::new(SystemClock),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_workbook_at_missing_path_seeds() {
        let dir = tempdir().unwrap();
        let workbook = open_workbook_at(dir.path().join("workbook.json")).unwrap();

        assert!(!workbook.onboarding_completed());
        assert_eq!(workbook.schedule_items().len(), 22);
    }
}
