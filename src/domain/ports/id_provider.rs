//! IdProvider port
//!
//! Fresh entity IDs. Takes `&self` so implementations with internal
//! counters stay usable behind a shared reference.

pub trait IdProvider: Send + Sync {
    fn fresh_id(&self) -> String;
}
