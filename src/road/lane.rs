use crate::math::{distance, lane_normal, Point2d, Vector2d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The lane boundaries at a single station of a road.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaneRecord {
    /// The left lane boundary point.
    pub left: Point2d,
    /// The right lane boundary point.
    pub right: Point2d,
    /// The lane width.
    pub lane_width: f64,
    /// The speed of the vehicle at this station.
    pub speed: f64,
    /// The lane-normal angle in degrees, `90 - heading`, wrapped into `[0, 360)`.
    pub curvature: f64,
}

/// The distances from a vehicle to the boundary points of a station.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaneDistance {
    pub left: f64,
    pub right: f64,
}

impl LaneRecord {
    /// Creates the record for a station centred on `centre`.
    ///
    /// # Parameters
    /// * `centre` - The centerline point of the station
    /// * `curvature` - The lane-normal angle in degrees
    /// * `lane_width` - The distance between the two boundary points
    /// * `speed` - The vehicle speed at the station
    pub fn new(centre: Point2d, curvature: f64, lane_width: f64, speed: f64) -> Self {
        let offset = lane_normal(curvature) * (0.5 * lane_width);
        Self {
            left: centre + offset,
            right: centre - offset,
            lane_width,
            speed,
            curvature,
        }
    }

    /// The curvature in radians.
    pub fn curve_radians(&self) -> f64 {
        self.curvature.to_radians()
    }

    /// The vector from the centerline to the left boundary, recomputed from the curvature.
    pub fn boundary_offset(&self) -> Vector2d {
        lane_normal(self.curvature) * (0.5 * self.lane_width)
    }

    /// The centerline point the record is anchored on.
    pub fn centre(&self) -> Point2d {
        self.left + (self.right - self.left) * 0.5
    }

    /// The boundary points as `(x1, y1, x2, y2)`, left then right.
    pub fn coordinates(&self) -> (f64, f64, f64, f64) {
        (self.left.x, self.left.y, self.right.x, self.right.y)
    }

    /// Distances from `vehicle` to the left and right boundary points.
    ///
    /// This measures to the boundary points themselves rather than to the
    /// boundary lines, so it overestimates the clearance between stations.
    pub fn distance_to(&self, vehicle: Point2d) -> LaneDistance {
        LaneDistance {
            left: distance(self.left, vehicle),
            right: distance(self.right, vehicle),
        }
    }
}

impl From<LaneDistance> for (f64, f64) {
    fn from(d: LaneDistance) -> Self {
        (d.left, d.right)
    }
}

impl std::fmt::Display for LaneRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})({}, {})",
            self.left.x, self.left.y, self.right.x, self.right.y
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn boundaries_straddle_centre() {
        let record = LaneRecord::new(Point2d::new(1.0, 0.0), 90.0, 2.0, 1.0);
        assert_approx_eq!(record.left.x, 1.0);
        assert_approx_eq!(record.left.y, 1.0);
        assert_approx_eq!(record.right.x, 1.0);
        assert_approx_eq!(record.right.y, -1.0);
        assert_approx_eq!(record.centre().x, 1.0);
        assert_approx_eq!(record.centre().y, 0.0);
        assert_approx_eq!(record.curve_radians(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn offset_matches_stored_points() {
        let record = LaneRecord::new(Point2d::new(3.0, -2.0), 217.0, 0.75, 1.0);
        let offset = record.boundary_offset();
        assert_approx_eq!((record.left - record.centre()).x, offset.x);
        assert_approx_eq!((record.left - record.centre()).y, offset.y);
        assert_approx_eq!(distance(record.left, record.right), 0.75, 1e-12);
    }

    #[test]
    fn lane_distance() {
        let record = LaneRecord::new(Point2d::new(0.0, 0.0), 90.0, 2.0, 1.0);
        let d = record.distance_to(Point2d::new(0.0, 0.0));
        assert_approx_eq!(d.left, 1.0);
        assert_approx_eq!(d.right, 1.0);

        let (left, right) = record.distance_to(Point2d::new(3.0, 1.0)).into();
        assert_approx_eq!(left, 3.0);
        assert_approx_eq!(right, 13f64.sqrt());
    }

    #[test]
    fn lane_distance_propagates_nan() {
        let record = LaneRecord::new(Point2d::new(0.0, 0.0), 90.0, 2.0, 1.0);
        let d = record.distance_to(Point2d::new(f64::NAN, 0.0));
        assert!(d.left.is_nan() && d.right.is_nan());
    }
}
