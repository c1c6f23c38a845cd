//! GeoJSON geometries of rectangles and fishing operations.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

use crate::error::DomainError;
use crate::rectangle::Rectangle;
use crate::types::{Bounds, FishingArea, Position};

/// Closed exterior ring of the bounds, counter-clockwise from the south-west corner.
fn bounds_ring(b: &Bounds) -> Vec<Vec<f64>> {
    vec![vec![b.west, b.south],
         vec![b.east, b.south],
         vec![b.east, b.north],
         vec![b.west, b.north],
         vec![b.west, b.south]]
}

/// Polygon covering the rectangle with given label.
pub fn get_geometry_from_rectangle_label(label: &str) -> Result<Geometry, DomainError> {
    let rect: Rectangle = label.parse()?;
    Ok(Geometry::new(Value::Polygon(vec![bounds_ring(&rect.bounds())])))
}

/// Geometry of a fishing operation: its track when positions are known, otherwise the
/// rectangles declared in its fishing areas. `None` when neither gives anything to draw.
pub fn operation_geometry(positions: &[Position], fishing_areas: &[FishingArea])
                          -> Option<Geometry> {
    let track: Vec<Vec<f64>> = positions.iter()
        .filter(|p| p.is_finite())
        .map(|p| vec![p.longitude, p.latitude])
        .collect();
    if !track.is_empty() {
        return Some(Geometry::new(Value::LineString(track)));
    }

    let polygons: Vec<Vec<Vec<Vec<f64>>>> = fishing_areas.iter()
        .filter_map(|fa| fa.label.parse::<Rectangle>().ok())
        .map(|rect| vec![bounds_ring(&rect.bounds())])
        .collect();
    if polygons.is_empty() {
        None
    } else {
        Some(Geometry::new(Value::MultiPolygon(polygons)))
    }
}

/// One polygon feature per valid label, carrying `label` and `convention` properties.
/// Invalid labels are skipped.
pub fn rectangles_to_feature_collection<S: AsRef<str>>(labels: &[S]) -> FeatureCollection {
    let features = labels.iter()
        .filter_map(|label| match label.as_ref().parse::<Rectangle>() {
            Ok(rect) => Some(rect),
            Err(e) => {
                warn!("{}", e);
                None
            }
        })
        .map(|rect| {
            let mut properties = JsonObject::new();
            properties.insert("label".to_string(), rect.to_string().into());
            properties.insert("convention".to_string(), rect.convention.to_string().into());
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Polygon(vec![bounds_ring(&rect.bounds())]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    FeatureCollection {
        bbox: None,
        features: features,
        foreign_members: None,
    }
}
