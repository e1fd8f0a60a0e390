use super::{LaneRecord, Road, RoadAttributes, Station};
use crate::error::{Result, RoadError};
use crate::math::{heading_degrees, normalize_degrees, Point2d};
use itertools::Itertools;

impl Road {
    /// Builds a road from a centerline, with the same lane width and speed at every station.
    ///
    /// Each consecutive pair of points yields one lane record, anchored on the
    /// later point and oriented by the heading from the earlier one. The first
    /// point only seeds the initial heading, so `n` points give `n - 1` records.
    ///
    /// # Errors
    /// Fails if a point is non-finite, or the attributes are out of range.
    pub fn build(
        name: impl Into<String>,
        centerline: &[Point2d],
        attributes: &RoadAttributes,
    ) -> Result<Self> {
        let stations = centerline
            .iter()
            .map(|p| Station::new(*p, attributes))
            .collect::<Vec<_>>();
        Self::from_stations(name, &stations)
    }

    /// Builds a road from stations that each carry their own lane width and speed.
    ///
    /// A record takes its width and speed from the later station of its pair.
    pub fn from_stations(name: impl Into<String>, stations: &[Station]) -> Result<Self> {
        for (index, station) in stations.iter().enumerate() {
            validate(index, station)?;
        }

        let mut heading = None;
        let records = stations
            .iter()
            .tuple_windows()
            .map(|(prev, curr)| {
                // A zero-length segment keeps the previous heading, or 0 at the start
                heading = heading_degrees(curr.point - prev.point).or(heading);
                let curvature = normalize_degrees(90.0 - heading.unwrap_or(0.0));
                LaneRecord::new(curr.point, curvature, curr.lane_width, curr.speed)
            })
            .collect();

        Ok(Self {
            name: name.into(),
            records,
        })
    }
}

fn validate(index: usize, station: &Station) -> Result<()> {
    if !station.point.x.is_finite() || !station.point.y.is_finite() {
        return Err(RoadError::NonFinitePoint { index });
    }
    if !(station.lane_width.is_finite() && station.lane_width > 0.0) {
        return Err(RoadError::InvalidLaneWidth(station.lane_width));
    }
    if !(station.speed.is_finite() && station.speed >= 0.0) {
        return Err(RoadError::InvalidSpeed(station.speed));
    }
    Ok(())
}
