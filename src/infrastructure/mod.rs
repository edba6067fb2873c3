//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `clock` - Wall-clock and fixed-date clocks
//! - `id` - Identifier generation (UUID, sequential)
//! - `repositories/` - Snapshot repository implementations (JSON file, in-memory)

pub mod clock;
pub mod id;
pub mod repositories;

// Re-export for convenience
pub use clock::{FixedClock, SystemClock};
pub use id::{SequentialIds, UuidProvider};
pub use repositories::{default_workbook_path, JsonSnapshotRepository, MemorySnapshotRepository};
