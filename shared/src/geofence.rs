//! Geofence evaluation: point-in-zone classification over circular zones
//!
//! Pure functions only. The zone set is a snapshot handed in by the caller
//! per evaluation; this module owns no zone state.

use crate::models::{Zone, ZoneEvaluation, ZoneStatus, ZoneType};
use crate::types::GeoPoint;

/// Mean Earth radius in meters, per the Haversine convention
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (Haversine formula)
pub fn haversine_distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Whether a zone contains a point (boundary inclusive)
///
/// Returns `false` for zones that are inactive, unapproved, or missing
/// center/radius data; such zones never contain anything.
pub fn zone_contains(zone: &Zone, point: &GeoPoint) -> bool {
    if !zone.is_evaluable() {
        return false;
    }
    let (Some(center), Some(radius)) = (zone.center, zone.radius_meters) else {
        return false;
    };
    haversine_distance_meters(point, &center) <= radius
}

/// Evaluate a point against a snapshot of zones
///
/// Danger zones take unconditional priority over safe zones: if at least
/// one danger zone contains the point, the result is `Danger` with the
/// first such zone in input order. Only when no danger zone contains the
/// point are safe zones considered, again first match in input order.
/// A point contained by no zone evaluates to `Outside`.
///
/// Zones failing the `active && approved` filter or missing center/radius
/// data are skipped, never an error.
pub fn evaluate_zone_status(point: &GeoPoint, zones: &[Zone]) -> ZoneEvaluation {
    let mut first_safe: Option<&Zone> = None;

    for zone in zones.iter().filter(|z| zone_contains(z, point)) {
        match zone.zone_type {
            ZoneType::Danger => {
                // First containing danger zone wins outright
                return ZoneEvaluation {
                    status: ZoneStatus::Danger,
                    zone_id: Some(zone.id),
                };
            }
            ZoneType::Safe => {
                if first_safe.is_none() {
                    first_safe = Some(zone);
                }
            }
        }
    }

    match first_safe {
        Some(zone) => ZoneEvaluation {
            status: ZoneStatus::Safe,
            zone_id: Some(zone.id),
        },
        None => ZoneEvaluation::outside(),
    }
}
