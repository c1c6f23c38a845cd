//! Statistical rectangles used in fisheries reporting.
//!
//! Two grids are covered: ICES rectangles for the North-East Atlantic (labels like `24E4`) and
//! GFCM rectangles for the Mediterranean and Black Sea (labels like `M24C2`). A coordinate inside
//! the Mediterranean outline is always given a GFCM label; anywhere else inside the ICES grid
//! gets an ICES label.
//!
//! ```
//! assert_eq!(statrect::get_rectangle_label_by_lat_long(47.6, -5.05).unwrap(), "24E4");
//! assert_eq!(statrect::get_rectangle_label_by_lat_long(42.27, 5.4).unwrap(), "M24C2");
//! ```

#[macro_use]
extern crate log;

use rayon::prelude::*;

mod error;
mod types;
pub use error::DomainError;
pub use types::*;
pub mod geometry;
pub mod grid;
mod rectangle;
pub use rectangle::Rectangle;
pub mod region;
pub mod util;

pub use geometry::get_geometry_from_rectangle_label;
use grid::grid_for;

/// Resolve the rectangle holding given coordinate.
pub fn get_rectangle_by_lat_long(latitude: f64, longitude: f64) -> Result<Rectangle, DomainError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(DomainError::InvalidInput {
            latitude: latitude,
            longitude: longitude,
        });
    }
    let out_of_range = || {
        DomainError::CoordinateOutOfRange {
            latitude: latitude,
            longitude: longitude,
        }
    };
    let convention = region::convention_of(latitude, longitude).ok_or_else(out_of_range)?;
    let rect = grid_for(convention).locate(latitude, longitude).ok_or_else(out_of_range)?;
    trace!("({}, {}) -> {}", latitude, longitude, rect);
    Ok(rect)
}

/// Label of the statistical rectangle holding given coordinate, e.g. `24E4` or `M24C2`.
pub fn get_rectangle_label_by_lat_long(latitude: f64, longitude: f64) -> Result<String, DomainError> {
    get_rectangle_by_lat_long(latitude, longitude).map(|r| r.to_string())
}

/// Whether the label names an existing ICES or GFCM rectangle.
pub fn is_statistical_rectangle_label(label: &str) -> bool {
    label.parse::<Rectangle>().is_ok()
}

/// Decode a label back to the lat/lon bounds of its rectangle.
pub fn get_bounds_from_rectangle_label(label: &str) -> Result<Bounds, DomainError> {
    label.parse::<Rectangle>().map(|r| r.bounds())
}

/// Label every position in parallel. Results keep the order of the input.
pub fn label_positions(positions: &[Position]) -> Vec<Result<String, DomainError>> {
    debug!("labelling {} positions", positions.len());
    positions.par_iter()
        .map(|p| get_rectangle_label_by_lat_long(p.latitude, p.longitude))
        .collect()
}

/// Best known rectangle for an operation. Fishing areas come first: the first one at a
/// rectangle level, or with no level, and a non-blank label wins. Otherwise the first position
/// that resolves to a rectangle is used.
pub fn contextual_rectangle_label(fishing_areas: &[FishingArea],
                                  positions: &[Position])
                                  -> Option<String> {
    let from_area = fishing_areas.iter()
        .find(|fa| fa.level.map_or(true, |l| l.is_statistical_rectangle()))
        .map(|fa| fa.label.trim())
        .filter(|label| !label.is_empty());
    if let Some(label) = from_area {
        return Some(label.to_string());
    }
    if !positions.is_empty() {
        debug!("no rectangle in fishing areas, trying {} positions", positions.len());
    }
    positions.iter()
        .find_map(|p| get_rectangle_label_by_lat_long(p.latitude, p.longitude).ok())
}
