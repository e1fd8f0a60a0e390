use crate::math::Point2d;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub use lane::{LaneDistance, LaneRecord};

mod builder;
mod lane;

/// The default lane width, in the same unit as the centerline.
pub const DEFAULT_LANE_WIDTH: f64 = 0.3;

/// The default vehicle speed at every station.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Road-wide attributes applied to every station of a centerline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoadAttributes {
    /// The lane width, in the same unit as the centerline.
    pub lane_width: f64,
    /// The speed of the vehicle at each station.
    pub speed: f64,
}

impl Default for RoadAttributes {
    fn default() -> Self {
        Self {
            lane_width: DEFAULT_LANE_WIDTH,
            speed: DEFAULT_SPEED,
        }
    }
}

/// A centerline point along with its own lane width and speed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    pub point: Point2d,
    pub lane_width: f64,
    pub speed: f64,
}

impl Station {
    /// Creates a station at `point` with the given attributes.
    pub fn new(point: Point2d, attributes: &RoadAttributes) -> Self {
        Self {
            point,
            lane_width: attributes.lane_width,
            speed: attributes.speed,
        }
    }
}

/// A road, made up of one lane record per station along its centerline.
///
/// Roads are built once from a centerline and are read-only afterwards.
#[derive(Clone, Debug)]
pub struct Road {
    /// A label for the road.
    name: String,
    /// The lane records, in centerline order.
    records: Vec<LaneRecord>,
}

impl Road {
    /// The road's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of stations on the road.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the road has no stations.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Gets the lane record at the given station, if there is one.
    pub fn get(&self, station: usize) -> Option<&LaneRecord> {
        self.records.get(station)
    }

    /// The lane records, in centerline order.
    pub fn records(&self) -> &[LaneRecord] {
        &self.records
    }

    /// Iterates over the lane records in centerline order.
    pub fn iter(&self) -> std::slice::Iter<'_, LaneRecord> {
        self.records.iter()
    }

    /// The left and right boundary points of every station as `(x1, y1, x2, y2)`,
    /// where `(x1, y1)` is the left point.
    pub fn coordinates(&self) -> Vec<(f64, f64, f64, f64)> {
        self.records.iter().map(LaneRecord::coordinates).collect()
    }

    /// Lane distances for a trajectory that visits one station per position.
    ///
    /// Position `i` is measured against station `i`; surplus positions or
    /// stations are ignored.
    pub fn distances_along(&self, trajectory: &[Point2d]) -> Vec<LaneDistance> {
        self.records
            .iter()
            .zip(trajectory)
            .map(|(record, pos)| record.distance_to(*pos))
            .collect()
    }

    /// The left boundary of the road as a polyline.
    pub fn left_boundary(&self) -> Vec<Point2d> {
        self.records.iter().map(|r| r.left).collect()
    }

    /// The right boundary of the road as a polyline.
    pub fn right_boundary(&self) -> Vec<Point2d> {
        self.records.iter().map(|r| r.right).collect()
    }
}

impl Index<usize> for Road {
    type Output = LaneRecord;

    fn index(&self, station: usize) -> &LaneRecord {
        &self.records[station]
    }
}

impl<'a> IntoIterator for &'a Road {
    type Item = &'a LaneRecord;
    type IntoIter = std::slice::Iter<'a, LaneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
