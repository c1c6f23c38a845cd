use std::io::Read;

use geojson::{GeoJson, Geometry, Value};

use crate::error::DomainError;
use crate::types::{Bounds, Position};

/// Compute the length in meters of one degree latitude and longitude at given latitude degree.
pub fn lat_lon(lat: f64) -> (f64, f64) {
    // Port of http://msi.nga.mil/MSISiteContent/StaticFiles/Calculators/degree.html
    let lat = lat.to_radians();
    let m1 = 111132.92;
    let m2 = -559.82;
    let m3 = 1.175;
    let m4 = -0.0023;
    let p1 = 111412.84;
    let p2 = -93.5;
    let p3 = 0.118;

    // Calculate the length of a degree of latitude and longitude in meters
    let latlen = m1 + (m2 * (2.0 * lat).cos()) + (m3 * (4.0 * lat).cos()) +
                 (m4 * (6.0 * lat).cos());
    let longlen = (p1 * lat.cos()) + (p2 * (3.0 * lat).cos()) + (p3 * (5.0 * lat).cos());
    (latlen, longlen)
}

/// Find the bounds over an iterator of positions.
pub fn position_bounds<'a, I: Iterator<Item = &'a Position>>(iter: I) -> Bounds {
    iter.fold(Bounds {
                  north: f64::MIN,
                  south: f64::MAX,
                  east: f64::MIN,
                  west: f64::MAX,
              },
              |b, p| {
        Bounds {
            north: f64::max(b.north, p.latitude),
            south: f64::min(b.south, p.latitude),
            east: f64::max(b.east, p.longitude),
            west: f64::min(b.west, p.longitude),
        }
    })
}

fn push_positions(geometry: &Geometry, out: &mut Vec<Position>) {
    // GeoJSON positions are [lon, lat].
    let to_position = |pos: &Vec<f64>| if pos.len() >= 2 {
        Some(Position::new(pos[1], pos[0]))
    } else {
        None
    };
    match geometry.value {
        Value::Point(ref pos) => out.extend(to_position(pos)),
        Value::MultiPoint(ref positions) |
        Value::LineString(ref positions) => out.extend(positions.iter().filter_map(to_position)),
        Value::GeometryCollection(ref geometries) => {
            for g in geometries {
                push_positions(g, out);
            }
        }
        _ => (),
    }
}

/// Read every Point, MultiPoint and LineString position from a GeoJSON document, in document
/// order. Other geometry types are skipped.
pub fn positions_from_geojson<R: Read>(reader: R) -> Result<Vec<Position>, DomainError> {
    let json = serde_json::from_reader::<_, GeoJson>(reader)?;
    let mut positions = Vec::new();
    match json {
        GeoJson::FeatureCollection(ref collection) => {
            for feature in &collection.features {
                if let Some(ref geometry) = feature.geometry {
                    push_positions(geometry, &mut positions);
                }
            }
        }
        GeoJson::Feature(ref feature) => {
            if let Some(ref geometry) = feature.geometry {
                push_positions(geometry, &mut positions);
            }
        }
        GeoJson::Geometry(ref geometry) => push_positions(geometry, &mut positions),
    }
    debug!("read {} positions from GeoJSON", positions.len());
    Ok(positions)
}
