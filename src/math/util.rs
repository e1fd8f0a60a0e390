use super::{Point2d, Vector2d};
use cgmath::prelude::*;

/// Rotates a vector 90 degrees anticlockwise.
pub fn rot90(vec: Vector2d) -> Vector2d {
    Vector2d::new(-vec.y, vec.x)
}

/// The heading of a vector in degrees, measured anticlockwise from the x-axis.
///
/// Returns a value in `(-180, 180]`, or `None` for the zero vector,
/// whose heading is undefined.
pub fn heading_degrees(vec: Vector2d) -> Option<f64> {
    if vec.x == 0.0 && vec.y == 0.0 {
        None
    } else {
        Some(vec.y.atan2(vec.x).to_degrees())
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let deg = deg.rem_euclid(360.0);
    // Tiny negative inputs round up to exactly 360
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// The unit vector pointing from a station towards its left lane boundary.
///
/// # Parameters
/// * `curvature` - The lane-normal angle in degrees, i.e. `90 - heading`.
pub fn lane_normal(curvature: f64) -> Vector2d {
    let n = curvature.to_radians();
    Vector2d::new(-n.cos(), n.sin())
}

/// The Euclidean distance between two points.
pub fn distance(a: Point2d, b: Point2d) -> f64 {
    (b - a).magnitude()
}
