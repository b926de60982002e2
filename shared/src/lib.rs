//! Shared types and models for the SafeStep Epilepsy Monitoring Platform
//!
//! This crate contains the domain models shared between the backend and
//! other components, plus the pure computational core: geofence evaluation
//! and heuristic risk scoring. Nothing in here performs I/O.

pub mod geofence;
pub mod models;
pub mod scoring;
pub mod types;
pub mod validation;

pub use geofence::*;
pub use models::*;
pub use scoring::*;
pub use types::*;
pub use validation::*;
