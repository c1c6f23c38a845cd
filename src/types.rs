use std::fmt;

use serde::{Deserialize, Serialize};

/// Represent some map coordinate, in decimal degrees. West and South are negative.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Position {
        Position {
            latitude: latitude,
            longitude: longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Represent some map bounds, in degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn range_lat(&self) -> f64 {
        self.north - self.south
    }
    pub fn range_lon(&self) -> f64 {
        self.east - self.west
    }

    /// South and west edges are inclusive, north and east edges are not.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.south && latitude < self.north && longitude >= self.west &&
        longitude < self.east
    }

    pub fn center(&self) -> Position {
        Position::new((self.north + self.south) / 2.0, (self.east + self.west) / 2.0)
    }
}

/// Labelling scheme of a statistical rectangle.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Convention {
    /// Atlantic and North Sea grid, e.g. `24E4`.
    Ices,
    /// Mediterranean and Black Sea grid, e.g. `M24C2`.
    Gfcm,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Convention::Ices => write!(f, "ICES"),
            Convention::Gfcm => write!(f, "GFCM"),
        }
    }
}

/// Referential level of a fishing area location.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LocationLevel {
    IcesRectangle,
    GfcmRectangle,
    IcesDivision,
    IcesSubArea,
}

impl LocationLevel {
    pub fn is_statistical_rectangle(&self) -> bool {
        match *self {
            LocationLevel::IcesRectangle | LocationLevel::GfcmRectangle => true,
            _ => false,
        }
    }
}

/// Fishing area declared on an operation: a location label and, when known, its level.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FishingArea {
    pub label: String,
    pub level: Option<LocationLevel>,
}

impl FishingArea {
    pub fn new<S: Into<String>>(label: S, level: Option<LocationLevel>) -> FishingArea {
        FishingArea {
            label: label.into(),
            level: level,
        }
    }
}
