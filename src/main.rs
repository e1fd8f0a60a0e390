use road_sim::plot::PlotFrame;
use road_sim::road_file::{circular_road, open_centre_lane};
use road_sim::{simulate, Control, Road, RoadAttributes};

fn main() -> road_sim::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Drive a road file if one is given, otherwise a circle of radius 10
    let stations = match std::env::args().nth(1) {
        Some(path) => open_centre_lane(path)?,
        None => {
            let attributes = RoadAttributes {
                lane_width: 3.0,
                speed: 1.0,
            };
            circular_road(10.0, 100, &attributes)
        }
    };
    let road = Road::from_stations("Sample_Road", &stations)?;
    log::info!("Built {} with {} stations", road, road.len());

    // Follow the centerline, one station per step
    let centerline = stations.iter().map(|s| s.point).collect::<Vec<_>>();
    let Some(&start) = centerline.first() else {
        log::warn!("Road file has no stations");
        return Ok(());
    };
    let controls = centerline
        .windows(2)
        .map(|pair| Control::towards(pair[0], pair[1]));
    let trajectory = simulate(start, controls);

    let distances = road.distances_along(&trajectory[1..]);
    for (station, d) in distances.iter().enumerate() {
        log::debug!("Station {}: left {:.2}, right {:.2}", station, d.left, d.right);
    }

    let frame = PlotFrame::new(&road, &trajectory[1..], Some(distances.as_slice()));
    println!("{}", frame.to_json());
    Ok(())
}
