//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod id_provider;
pub mod snapshot_repository;

pub use clock::Clock;
pub use id_provider::IdProvider;
pub use snapshot_repository::{SnapshotError, SnapshotRepository};
