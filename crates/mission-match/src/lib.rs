//! Compatibility scoring for placing nurses against establishment missions.
//!
//! The [`matching`] module holds the pure scoring engine; the remaining modules carry the
//! configuration, telemetry, and error plumbing shared with the API service.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
