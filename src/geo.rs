//! Projection of geodesic waypoints onto a local plane.
//!
//! The projection dead-reckons from the first waypoint: each step adds the
//! great-circle distance to the next waypoint along its initial bearing. This
//! is a local tangent-plane approximation, not a true map projection, so the
//! error accumulates with path length and curvature. It is only suitable for
//! short routes.

use crate::error::{Result, RoadError};
use crate::math::{Point2d, Vector2d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean radius of the Earth, in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a new point from a longitude and latitude.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

/// Great-circle distance between two points in km, using the haversine formula.
pub fn haversine_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlat = (to.lat - from.lat).to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Initial bearing from one point to another, in degrees clockwise from north.
///
/// Returns a value in `[0, 360)`.
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let bearing = f64::atan2(
        dlon.sin() * lat2.cos(),
        lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos(),
    );
    (bearing.to_degrees() + 360.0) % 360.0
}

/// Projects waypoints into planar coordinates in km, with the first waypoint at the origin.
///
/// The x-axis of the output follows the bearing's cosine, so a due-north leg
/// moves along +x and a due-east leg along +y.
///
/// # Errors
/// Fails if `waypoints` is empty or holds a non-finite coordinate.
pub fn project(waypoints: &[GeoPoint]) -> Result<Vec<Point2d>> {
    if waypoints.is_empty() {
        return Err(RoadError::EmptyPath);
    }
    if let Some(index) = waypoints.iter().position(|p| !p.is_finite()) {
        return Err(RoadError::NonFiniteWaypoint { index });
    }

    let mut points = Vec::with_capacity(waypoints.len());
    let mut current = Point2d::new(0.0, 0.0);
    points.push(current);
    for pair in waypoints.windows(2) {
        let dist = haversine_distance(pair[0], pair[1]);
        let bearing = initial_bearing(pair[0], pair[1]).to_radians();
        current += Vector2d::new(bearing.cos(), bearing.sin()) * dist;
        points.push(current);
    }
    Ok(points)
}
