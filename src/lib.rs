//! Turns a sequence of geographic waypoints into a planar road with left and
//! right lane boundaries, and steps a point-mass vehicle along it.
//!
//! The pipeline runs leaf-first:
//! waypoints → [geo::project] → centerline → [Road::build] → [Road]
//! → {[LaneRecord::distance_to], [plot::PlotFrame]}.

pub use cgmath;
pub use error::{Result, RoadError};
pub use geo::GeoPoint;
pub use road::{LaneDistance, LaneRecord, Road, RoadAttributes, Station};
pub use util::Interval;
pub use vehicle::{simulate, step, Control};

mod error;
pub mod geo;
pub mod math;
pub mod plot;
pub mod polyline;
pub mod road;
pub mod road_file;
mod util;
mod vehicle;
pub mod waypoints;
