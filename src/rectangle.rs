use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::grid::{grid_for, GridSpec};
use crate::types::{Bounds, Convention};
use crate::util::lat_lon;

/// A single statistical rectangle. Its `Display` form is the rectangle label, e.g. `24E4` or
/// `M24C2`; `FromStr` parses the same form back.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Rectangle {
    pub convention: Convention,
    pub row: u8,
    pub column: char,
    pub digit: u8,
}

impl Rectangle {
    pub fn grid(&self) -> &'static GridSpec {
        grid_for(self.convention)
    }

    /// Lat/lon boundaries of the rectangle. A hand-built rectangle naming no cell of its grid
    /// gets empty bounds at 0, 0.
    pub fn bounds(&self) -> Bounds {
        self.grid()
            .cell_bounds(self.row, self.column, self.digit)
            .unwrap_or(Bounds {
                north: 0.0,
                south: 0.0,
                east: 0.0,
                west: 0.0,
            })
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.bounds().contains(latitude, longitude)
    }

    /// Approximate height and width of the rectangle in meters, measured at its central
    /// latitude.
    pub fn real_size(&self) -> (f64, f64) {
        let b = self.bounds();
        let (lat_len, lon_len) = lat_lon((b.north + b.south) / 2.0);
        (lat_len * b.range_lat(), lon_len * b.range_lon())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "{}{:02}{}{}",
               self.grid().prefix,
               self.row,
               self.column,
               self.digit)
    }
}

impl FromStr for Rectangle {
    type Err = DomainError;

    fn from_str(label: &str) -> Result<Rectangle, DomainError> {
        let invalid = || DomainError::InvalidLabel(label.to_string());
        let (convention, body) = match label.strip_prefix(crate::grid::GFCM_GRID.prefix) {
            Some(rest) => (Convention::Gfcm, rest),
            None => (Convention::Ices, label),
        };
        let chars: Vec<char> = body.chars().collect();
        if chars.len() != 4 || !chars[2].is_ascii_uppercase() {
            return Err(invalid());
        }
        let tens = chars[0].to_digit(10).ok_or_else(invalid)?;
        let units = chars[1].to_digit(10).ok_or_else(invalid)?;
        let digit = chars[3].to_digit(10).ok_or_else(invalid)?;
        let rect = Rectangle {
            convention: convention,
            row: (tens * 10 + units) as u8,
            column: chars[2],
            digit: digit as u8,
        };
        match rect.grid().cell_bounds(rect.row, rect.column, rect.digit) {
            Some(_) => Ok(rect),
            None => Err(invalid()),
        }
    }
}
