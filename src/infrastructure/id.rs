//! IdProvider implementations
//!
//! `UuidProvider` generates opaque v4 IDs for real use; `SequentialIds`
//! hands out `id-1`, `id-2`, ... so tests can assert on them.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::ports::IdProvider;

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn fresh_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIds {
    fn fresh_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{n}")
    }
}
