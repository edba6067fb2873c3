//! Presentation Layer
//!
//! This layer handles:
//! - Opening the workbook with infrastructure dependencies (dependency injection)
//! - Display formatting shared by every surface
//!
//! ## Structure
//!
//! - `factory` - Opens the workbook with proper dependencies
//! - `format` - Currency, percent, and date rendering
//!
//! ## Usage
//!
//! ```ignore
//! use waypoint::presentation::{factory, format};
//!
//! let workbook = factory::open_workbook(&config)?;
//! println!("{}", format::format_currency(workbook.accounts()[0].balance));
//! ```

pub mod factory;
pub mod format;

pub use factory::{open_workbook, open_workbook_at};
