//! Statistics and logging
//!
//! Occupancy snapshots, teardown reports, and tracing subscriber setup.

pub mod logging;
pub mod statistics;

// Re-export all public types for convenience
pub use logging::*;
pub use statistics::*;
