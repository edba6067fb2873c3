//! Domain Services
//!
//! Pure calculation over domain entities. No I/O dependencies, no state;
//! presentation passes in raw store slices and renders the results.

pub mod dates;
pub mod metrics;
