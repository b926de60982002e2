//! Domain models for the SafeStep Epilepsy Monitoring Platform

mod risk;
mod session;
mod zone;

pub use risk::*;
pub use session::*;
pub use zone::*;
