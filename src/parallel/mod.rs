//! Parallel scanning support for Ember
//!
//! Scans independent source texts concurrently.

mod executor;

pub use executor::{scan_many, ParallelConfig};
