//! Waypoint - personal financial-planning workbook
//!
//! Waypoint keeps goals, accounts, spending, income, and net worth in a
//! single snapshot on disk, guides first-time setup through a step
//! wizard, and derives every headline number (net worth, average spend,
//! emergency-fund target) on read.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::OnboardingFlow;
pub use config::{ColorMode, Config, ConfigWarning};
pub use domain::store::{Snapshot, Workbook, SNAPSHOT_VERSION};
pub use error::{WaypointError, WaypointResult};
pub use infrastructure::{default_workbook_path, JsonSnapshotRepository};
pub use presentation::open_workbook;
