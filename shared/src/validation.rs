//! Validation utilities for the SafeStep platform
//!
//! Boundary checks applied before data reaches the pure evaluation and
//! scoring functions. Inside those functions malformed zones are skipped
//! defensively; here at the boundary, bad caller input is rejected.

use crate::types::GeoPoint;

// ============================================================================
// Geofence Validations
// ============================================================================

/// Validate latitude is within [-90, 90] degrees
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    Ok(())
}

/// Validate longitude is within [-180, 180] degrees
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180 degrees");
    }
    Ok(())
}

/// Validate a coordinate pair
pub fn validate_coordinates(point: &GeoPoint) -> Result<(), &'static str> {
    validate_latitude(point.latitude)?;
    validate_longitude(point.longitude)?;
    Ok(())
}

/// Validate a zone radius (meters, strictly positive, finite)
pub fn validate_radius(radius_meters: f64) -> Result<(), &'static str> {
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return Err("Zone radius must be a positive number of meters");
    }
    Ok(())
}

/// Validate a zone name (1-100 characters, non-blank)
pub fn validate_zone_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Zone name cannot be empty");
    }
    if trimmed.len() > 100 {
        return Err("Zone name must be at most 100 characters");
    }
    Ok(())
}

// ============================================================================
// Risk Profile Validations
// ============================================================================

/// Validate a reported age
pub fn validate_age(age: i32) -> Result<(), &'static str> {
    if !(0..=130).contains(&age) {
        return Err("Age must be between 0 and 130");
    }
    Ok(())
}

/// Validate average sleep hours
pub fn validate_sleep_hours(hours: f64) -> Result<(), &'static str> {
    if !hours.is_finite() || !(0.0..=24.0).contains(&hours) {
        return Err("Sleep hours must be between 0 and 24");
    }
    Ok(())
}
