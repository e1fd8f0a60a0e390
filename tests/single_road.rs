//! Tests that run the whole pipeline over a single road.

use assert_approx_eq::assert_approx_eq;
use road_sim::{
    geo,
    math::{distance, Point2d},
    plot::PlotFrame,
    road_file::{circular_road, read_centre_lane, write_road},
    simulate,
    waypoints::{EncodedPolyline, WaypointSource},
    Control, Road, RoadAttributes,
};

/// Test that a route decoded from a polyline produces a consistent road.
#[test]
fn polyline_to_road() {
    let waypoints = EncodedPolyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@".into())
        .waypoints()
        .unwrap();
    let centerline = geo::project(&waypoints).unwrap();
    assert_eq!(centerline[0], Point2d::new(0.0, 0.0));

    let road = Road::build("route", &centerline, &RoadAttributes::default()).unwrap();
    assert_eq!(road.len(), waypoints.len() - 1);
    for (record, centre) in road.iter().zip(&centerline[1..]) {
        assert_approx_eq!(distance(record.left, record.right), 0.3, 1e-9);
        assert_approx_eq!(record.centre().x, centre.x, 1e-9);
        assert_approx_eq!(record.centre().y, centre.y, 1e-9);
    }
}

/// Test that a vehicle tracking the centerline stays midway between the lanes.
#[test]
fn vehicle_follows_centerline() {
    let attributes = RoadAttributes {
        lane_width: 3.0,
        speed: 1.0,
    };
    let stations = circular_road(10.0, 100, &attributes);
    let road = Road::from_stations("circle", &stations).unwrap();

    let centerline = stations.iter().map(|s| s.point).collect::<Vec<_>>();
    let controls = centerline
        .windows(2)
        .map(|pair| Control::towards(pair[0], pair[1]));
    let trajectory = simulate(centerline[0], controls);
    assert_eq!(trajectory.len(), centerline.len());

    let distances = road.distances_along(&trajectory[1..]);
    assert_eq!(distances.len(), road.len());
    for d in &distances {
        assert_approx_eq!(d.left, 1.5, 1e-6);
        assert_approx_eq!(d.right, 1.5, 1e-6);
    }

    let frame = PlotFrame::new(&road, &trajectory[1..], Some(distances.as_slice()));
    let axis = frame.axis.unwrap();
    assert_approx_eq!(axis.min, -12.5, 0.01);
    assert_approx_eq!(axis.max, 12.5, 0.01);
}

/// Test that the road survives being written to and read from the road file format.
#[test]
fn persisted_road_rebuilds_identically() {
    let stations = circular_road(25.0, 12, &RoadAttributes::default());
    let mut buf = vec![];
    write_road(&mut buf, &stations).unwrap();
    let read = read_centre_lane(buf.as_slice()).unwrap();

    let original = Road::from_stations("a", &stations).unwrap();
    let rebuilt = Road::from_stations("b", &read).unwrap();
    assert_eq!(original.coordinates(), rebuilt.coordinates());
}

/// Test that the vehicle's left is the road's left when driving a right angle turn.
#[test]
fn drift_towards_left_lane() {
    let centerline = [
        Point2d::new(0.0, 0.0),
        Point2d::new(1.0, 0.0),
        Point2d::new(1.0, 1.0),
    ];
    let attributes = RoadAttributes {
        lane_width: 2.0,
        speed: 1.0,
    };
    let road = Road::build("turn", &centerline, &attributes).unwrap();

    // Heading east then north, each time drifting half a metre to the left
    let trajectory = simulate(
        Point2d::new(0.0, 0.0),
        [Control::new(1.0, 0.0), Control::new(0.5, 90.0)],
    );
    let at_first = road[0].distance_to(trajectory[2]);
    assert!(at_first.left < at_first.right);
}
