//! HTTP handlers for the SafeStep backend

mod health;
mod risk;
mod sessions;
mod tracking;
mod zones;

pub use health::*;
pub use risk::*;
pub use sessions::*;
pub use tracking::*;
pub use zones::*;
