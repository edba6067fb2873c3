//! Error types for Waypoint
//!
//! Library errors use `thiserror`; the binary's command layer wraps them in
//! `anyhow` for display.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::SnapshotError;

/// Result type alias for Waypoint operations
pub type WaypointResult<T> = Result<T, WaypointError>;

/// Main error type for Waypoint operations
#[derive(Error, Debug)]
pub enum WaypointError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot load/save failure from the repository port
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Config file exists but does not parse
    #[error("invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_parse() {
        let err = WaypointError::ConfigParse {
            path: PathBuf::from("/home/u/.waypoint/config.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config file /home/u/.waypoint/config.toml: expected a table"
        );
    }

    #[test]
    fn test_snapshot_error_passes_through() {
        let err = WaypointError::from(SnapshotError::Access {
            message: "permission denied".to_string(),
        });
        assert!(err.to_string().contains("permission denied"));
    }
}
