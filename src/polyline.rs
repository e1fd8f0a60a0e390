//! Encoded polyline strings, as returned by directions services.
//!
//! Each coordinate is stored as a delta from the previous one, scaled by
//! 1e5, zig-zag encoded and split into 5-bit chunks offset by 63. Pairs are
//! stored latitude first.

use crate::error::{Result, RoadError};
use crate::geo::GeoPoint;

const PRECISION: f64 = 1e5;

/// Decodes an encoded polyline into waypoints.
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint>> {
    let bytes = encoded.as_bytes();
    let mut points = vec![];
    let mut pos = 0;
    let (mut lat, mut lon) = (0i64, 0i64);

    while pos < bytes.len() {
        lat = accumulate(lat, bytes, &mut pos)?;
        lon = accumulate(lon, bytes, &mut pos)?;
        points.push(GeoPoint::new(lon as f64 / PRECISION, lat as f64 / PRECISION));
    }

    Ok(points)
}

/// Encodes waypoints as a polyline string.
pub fn encode(points: &[GeoPoint]) -> String {
    let mut out = String::new();
    let (mut prev_lat, mut prev_lon) = (0i64, 0i64);
    for point in points {
        let lat = (point.lat * PRECISION).round() as i64;
        let lon = (point.lon * PRECISION).round() as i64;
        write_value(&mut out, lat - prev_lat);
        write_value(&mut out, lon - prev_lon);
        (prev_lat, prev_lon) = (lat, lon);
    }
    out
}

/// Reads the next delta and adds it to `total`.
fn accumulate(total: i64, bytes: &[u8], pos: &mut usize) -> Result<i64> {
    let start = *pos;
    total
        .checked_add(read_value(bytes, pos)?)
        .ok_or(RoadError::Polyline { position: start })
}

fn read_value(bytes: &[u8], pos: &mut usize) -> Result<i64> {
    let mut result = 0i64;
    let mut shift = 0;
    loop {
        let byte = *bytes
            .get(*pos)
            .ok_or(RoadError::Polyline { position: *pos })?;
        if !(63..=126).contains(&byte) || shift > 60 {
            return Err(RoadError::Polyline { position: *pos });
        }
        *pos += 1;

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

fn write_value(out: &mut String, value: i64) {
    let mut value = if value < 0 { !(value << 1) } else { value << 1 };
    while value >= 0x20 {
        out.push(((0x20 | (value & 0x1f)) + 63) as u8 as char);
        value >>= 5;
    }
    out.push((value + 63) as u8 as char);
}
