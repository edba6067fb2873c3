//! Domain Layer
//!
//! The core of the workbook: entities, calculation and the store, with
//! no I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Persisted records (Goal, Account, Transaction, ...)
//! - `value_objects/` - Immutable value types (Timeframe, ExpenseCategory, ...)
//! - `services/` - Pure calculation (metrics, dates)
//! - `store/` - The `Workbook` state container and its snapshot
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod store;
pub mod value_objects;
