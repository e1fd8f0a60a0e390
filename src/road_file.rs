//! The persisted road format.
//!
//! A comma-separated text file with the header `X,Y,Lane_width,v`, followed by
//! one `x,y,lane_width,speed` row per centerline station.

use crate::error::Result;
use crate::math::Point2d;
use crate::road::{RoadAttributes, Station};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// The header line of a road file.
pub const HEADER: &str = "X,Y,Lane_width,v";

/// Reads centerline stations from a road file.
///
/// The first line is taken as the header and skipped. Rows that do not hold
/// exactly four numbers are logged and skipped.
pub fn read_centre_lane(reader: impl BufRead) -> Result<Vec<Station>> {
    let mut stations = vec![];
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        match parse_row(&line) {
            Some(station) => stations.push(station),
            None => log::warn!("Ignoring row number {}: {:?}", idx + 1, line),
        }
    }
    log::debug!("Read {} stations", stations.len());
    Ok(stations)
}

/// Opens and reads a road file.
pub fn open_centre_lane(path: impl AsRef<Path>) -> Result<Vec<Station>> {
    let path = path.as_ref();
    log::info!("Loading file {}", path.display());
    read_centre_lane(BufReader::new(File::open(path)?))
}

/// Writes centerline stations in the road file format.
pub fn write_road(mut writer: impl Write, stations: &[Station]) -> Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for s in stations {
        writeln!(
            writer,
            "{},{},{},{}",
            s.point.x, s.point.y, s.lane_width, s.speed
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates or overwrites a road file.
pub fn save_road(path: impl AsRef<Path>, stations: &[Station]) -> Result<()> {
    let path = path.as_ref();
    log::info!("Writing {} stations to {}", stations.len(), path.display());
    write_road(BufWriter::new(File::create(path)?), stations)
}

/// A circular road around the origin, for testing.
///
/// Returns `num_points + 1` stations spaced evenly anticlockwise from
/// `(radius, 0)`; the last station closes the loop. A circle of zero points
/// has no stations.
pub fn circular_road(radius: f64, num_points: usize, attributes: &RoadAttributes) -> Vec<Station> {
    if num_points == 0 {
        return vec![];
    }
    let step = std::f64::consts::TAU / num_points as f64;
    (0..=num_points)
        .map(|i| {
            let angle = step * i as f64;
            let point = Point2d::new(radius * angle.cos(), radius * angle.sin());
            Station::new(point, attributes)
        })
        .collect()
}

fn parse_row(line: &str) -> Option<Station> {
    let mut fields = line.split(',').map(|f| f.trim().parse::<f64>());
    let mut next = || fields.next()?.ok();
    let station = Station {
        point: Point2d::new(next()?, next()?),
        lane_width: next()?,
        speed: next()?,
    };
    match fields.next() {
        None => Some(station),
        Some(_) => None,
    }
}
