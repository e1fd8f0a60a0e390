//! Data for plotting a road and a vehicle's trajectory along it.

use crate::math::Point2d;
use crate::road::{LaneDistance, Road};
use crate::util::Interval;
use serde_json::{json, Value};

/// The margin added around the road when framing the plot.
const AXIS_MARGIN: f64 = 1.0;

/// A lane distance label drawn next to a trajectory position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annotation {
    pub pos: Point2d,
    pub distance: LaneDistance,
}

/// Everything needed to draw a road and a vehicle on it.
#[derive(Clone, Debug)]
pub struct PlotFrame {
    /// The left lane boundary.
    pub left_lane: Vec<Point2d>,
    /// The right lane boundary.
    pub right_lane: Vec<Point2d>,
    /// The vehicle positions in order.
    pub trajectory: Vec<Point2d>,
    /// Lane distance labels, only where the distance changed from the previous position.
    pub annotations: Vec<Annotation>,
    /// The range shared by both axes, so the plot isn't distorted.
    /// `None` if the road has no stations.
    pub axis: Option<Interval<f64>>,
}

impl PlotFrame {
    /// Gathers the plot data for a road and trajectory.
    ///
    /// # Parameters
    /// * `road` - The road to draw
    /// * `trajectory` - The vehicle positions
    /// * `distances` - Lane distances paired by index with `trajectory`
    pub fn new(road: &Road, trajectory: &[Point2d], distances: Option<&[LaneDistance]>) -> Self {
        let left_lane = road.left_boundary();
        let right_lane = road.right_boundary();

        let coords = || left_lane.iter().chain(&right_lane);
        let axis = Interval::enclosing(coords().map(|p| p.x))
            .zip(Interval::enclosing(coords().map(|p| p.y)))
            .map(|(x, y)| x.union(&y).padded(AXIS_MARGIN));

        let mut annotations: Vec<Annotation> = vec![];
        for (pos, distance) in trajectory.iter().zip(distances.unwrap_or_default()) {
            if annotations.last().map(|a| a.distance) != Some(*distance) {
                annotations.push(Annotation {
                    pos: *pos,
                    distance: *distance,
                });
            }
        }

        Self {
            left_lane,
            right_lane,
            trajectory: trajectory.to_vec(),
            annotations,
            axis,
        }
    }

    /// Serializes the frame for an external plotter.
    pub fn to_json(&self) -> Value {
        let points = |ps: &[Point2d]| ps.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>();
        let axis = self.axis.map(|a| [a.min, a.max]);
        let annotations = self
            .annotations
            .iter()
            .map(|a| {
                json!({
                    "pos": [a.pos.x, a.pos.y],
                    "left": a.distance.left,
                    "right": a.distance.right,
                })
            })
            .collect::<Vec<_>>();
        json!({
            "axis": axis,
            "left_lane": points(&self.left_lane),
            "right_lane": points(&self.right_lane),
            "trajectory": points(&self.trajectory),
            "annotations": annotations,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::road::RoadAttributes;
    use assert_approx_eq::assert_approx_eq;

    fn straight_road() -> Road {
        let centerline = (0..5)
            .map(|i| Point2d::new(i as f64, 0.0))
            .collect::<Vec<_>>();
        let attributes = RoadAttributes {
            lane_width: 2.0,
            speed: 1.0,
        };
        Road::build("straight", &centerline, &attributes).unwrap()
    }

    #[test]
    fn axis_is_square_with_margin() {
        let frame = PlotFrame::new(&straight_road(), &[], None);
        let axis = frame.axis.unwrap();
        assert_approx_eq!(axis.min, -2.0);
        assert_approx_eq!(axis.max, 5.0);
        assert_eq!(frame.left_lane.len(), 4);
        assert!(frame.annotations.is_empty());
    }

    #[test]
    fn annotations_only_when_distance_changes() {
        let road = straight_road();
        let trajectory = [
            Point2d::new(1.0, 0.0),
            Point2d::new(2.0, 0.0),
            Point2d::new(3.0, 0.5),
            Point2d::new(4.0, 0.5),
        ];
        let distances = road.distances_along(&trajectory);
        let frame = PlotFrame::new(&road, &trajectory, Some(distances.as_slice()));
        assert_eq!(frame.annotations.len(), 2);
        assert_eq!(frame.annotations[0].pos, trajectory[0]);
        assert_eq!(frame.annotations[1].pos, trajectory[2]);
        assert_approx_eq!(frame.annotations[1].distance.left, 0.5);
        assert_approx_eq!(frame.annotations[1].distance.right, 1.5);
    }

    #[test]
    fn empty_road_has_no_axis() {
        let road = Road::build("empty", &[], &RoadAttributes::default()).unwrap();
        let frame = PlotFrame::new(&road, &[Point2d::new(0.0, 0.0)], None);
        assert!(frame.axis.is_none());
        assert!(frame.to_json()["axis"].is_null());
    }

    #[test]
    fn json_layout() {
        let frame = PlotFrame::new(&straight_road(), &[Point2d::new(1.0, 0.0)], None);
        let value = frame.to_json();
        assert_eq!(value["left_lane"].as_array().unwrap().len(), 4);
        assert_approx_eq!(value["left_lane"][0][0].as_f64().unwrap(), 1.0);
        assert_approx_eq!(value["left_lane"][0][1].as_f64().unwrap(), 1.0);
        assert_eq!(value["trajectory"], json!([[1.0, 0.0]]));
        assert_approx_eq!(value["axis"][0].as_f64().unwrap(), -2.0);
        assert_approx_eq!(value["axis"][1].as_f64().unwrap(), 5.0);
    }
}
