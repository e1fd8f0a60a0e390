//! Sources of geographic waypoints.

use crate::error::Result;
use crate::geo::GeoPoint;
use crate::polyline;

/// Something that can supply an ordered sequence of waypoints.
pub trait WaypointSource {
    /// Fetches the waypoints, in path order.
    fn waypoints(&self) -> Result<Vec<GeoPoint>>;
}

/// Waypoints stored as an encoded polyline string.
#[derive(Clone, Debug)]
pub struct EncodedPolyline(pub String);

impl WaypointSource for EncodedPolyline {
    fn waypoints(&self) -> Result<Vec<GeoPoint>> {
        let points = polyline::decode(&self.0)?;
        log::debug!("Decoded {} waypoints from polyline", points.len());
        Ok(points)
    }
}

/// How the route should be travelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
}

/// A request for a route between two places.
#[derive(Clone, Debug)]
pub struct DirectionsRequest {
    /// The start of the route, as an address or `"lat,lon"`.
    pub origin: String,
    /// The end of the route, as an address or `"lat,lon"`.
    pub destination: String,
    pub mode: TravelMode,
}

/// A client for a directions service.
///
/// Implementations own their credentials; nothing is read from the process environment.
pub trait DirectionsProvider {
    /// Returns the encoded overview polyline of the best route.
    fn overview_polyline(&self, request: &DirectionsRequest) -> Result<String>;
}

/// Waypoints along a route fetched from a directions provider.
pub struct DirectionsSource<C> {
    client: C,
    request: DirectionsRequest,
}

impl<C: DirectionsProvider> DirectionsSource<C> {
    /// Creates a new source which will query `client` with `request`.
    pub fn new(client: C, request: DirectionsRequest) -> Self {
        Self { client, request }
    }
}

impl<C: DirectionsProvider> WaypointSource for DirectionsSource<C> {
    fn waypoints(&self) -> Result<Vec<GeoPoint>> {
        log::info!(
            "Requesting {:?} directions from {} to {}",
            self.request.mode,
            self.request.origin,
            self.request.destination
        );
        let encoded = self.client.overview_polyline(&self.request)?;
        EncodedPolyline(encoded).waypoints()
    }
}
