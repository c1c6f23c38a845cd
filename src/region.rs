//! Which convention owns a coordinate.

use crate::grid::{GFCM_GRID, ICES_GRID};
use crate::types::Convention;

/// Coarse outline of the Mediterranean and Black Sea, as (lon, lat) vertices of a closed ring.
/// The western edge follows the Strait of Gibraltar and the Spanish coast so that the Gulf of
/// Cadiz and the Bay of Biscay stay outside.
pub static MEDITERRANEAN: [(f64, f64); 7] = [(-5.6, 30.0),
                                              (42.0, 30.0),
                                              (42.0, 48.0),
                                              (0.0, 48.0),
                                              (0.0, 40.0),
                                              (-1.5, 38.0),
                                              (-5.6, 36.2)];

/// Even-odd ray casting test of a point against a closed ring of (lon, lat) vertices.
pub fn ring_contains(ring: &[(f64, f64)], latitude: f64, longitude: f64) -> bool {
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for i in 0..ring.len() {
        let (xi, yi) = ring[i];
        let (xj, yj) = ring[j];
        if (yi > latitude) != (yj > latitude) &&
           longitude < (xj - xi) * (latitude - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether the coordinate falls in the Mediterranean region covered by the GFCM grid.
pub fn is_mediterranean(latitude: f64, longitude: f64) -> bool {
    GFCM_GRID.contains(latitude, longitude) && ring_contains(&MEDITERRANEAN, latitude, longitude)
}

/// Convention owning the coordinate, or `None` when neither grid covers it.
pub fn convention_of(latitude: f64, longitude: f64) -> Option<Convention> {
    if is_mediterranean(latitude, longitude) {
        Some(Convention::Gfcm)
    } else if ICES_GRID.contains(latitude, longitude) {
        Some(Convention::Ices)
    } else {
        None
    }
}
