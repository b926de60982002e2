//! Business logic services for the SafeStep backend

pub mod risk;
pub mod sessions;
pub mod tracking;
pub mod zones;

pub use risk::RiskService;
pub use sessions::SessionStore;
pub use tracking::TrackingService;
pub use zones::ZoneRegistry;
