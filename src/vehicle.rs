//! A kinematic point-mass vehicle.

use crate::math::{heading_degrees, Point2d, Vector2d};
use cgmath::InnerSpace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The control inputs for a single vehicle step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Control {
    /// The distance travelled in one step.
    pub speed: f64,
    /// The absolute heading in degrees, anticlockwise from the x-axis.
    /// This is not the angle of the steering wheel.
    pub steer_angle: f64,
}

impl Control {
    /// Creates a new control input.
    pub const fn new(speed: f64, steer_angle: f64) -> Self {
        Self { speed, steer_angle }
    }

    /// The control that moves a vehicle at `from` exactly onto `to` in one step.
    ///
    /// If the points coincide the vehicle stays put with a heading of 0.
    pub fn towards(from: Point2d, to: Point2d) -> Self {
        let gap = to - from;
        Self {
            speed: gap.magnitude(),
            steer_angle: heading_degrees(gap).unwrap_or(0.0),
        }
    }
}

/// Advances a vehicle by one explicit Euler step.
///
/// # Parameters
/// * `pos` - The current position
/// * `speed` - The distance to travel in this step
/// * `steer_angle` - The absolute heading in degrees
pub fn step(pos: Point2d, speed: f64, steer_angle: f64) -> Point2d {
    let steer = steer_angle.to_radians();
    pos + Vector2d::new(steer.cos(), steer.sin()) * speed
}

/// Runs the vehicle through a sequence of controls.
///
/// Returns every position visited, starting with `start`.
pub fn simulate(start: Point2d, controls: impl IntoIterator<Item = Control>) -> Vec<Point2d> {
    let mut pos = start;
    std::iter::once(start)
        .chain(controls.into_iter().map(|control| {
            pos = step(pos, control.speed, control.steer_angle);
            pos
        }))
        .collect()
}
