use thiserror::Error;

/// Errors raised at the boundaries of the road pipeline.
///
/// The geometry primitives themselves never fail; these are raised when
/// validating input or talking to the waypoint and file collaborators.
#[derive(Error, Debug)]
pub enum RoadError {
    #[error("waypoint sequence is empty")]
    EmptyPath,

    #[error("waypoint {index} has a non-finite longitude or latitude")]
    NonFiniteWaypoint { index: usize },

    #[error("centerline point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("lane width must be positive and finite, got {0}")]
    InvalidLaneWidth(f64),

    #[error("speed must be non-negative and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("malformed encoded polyline at byte {position}")]
    Polyline { position: usize },

    #[error("directions provider failed: {0}")]
    Provider(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RoadError>;
