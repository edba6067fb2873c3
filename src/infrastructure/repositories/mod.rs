//! Repository Implementations
//!
//! Concrete implementations of the snapshot repository port.

mod memory;
mod snapshot;

pub use memory::MemorySnapshotRepository;
pub use snapshot::{default_workbook_path, JsonSnapshotRepository};
