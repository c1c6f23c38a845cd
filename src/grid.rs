//! Grid definitions of the supported statistical rectangle conventions.
//!
//! A grid is a latitude range split into rows of equal height and a longitude range split into
//! lettered column bands, each band holding one or more digit-numbered columns. Both grids are
//! plain static data; nothing here is built at runtime.

use std::cmp;

use crate::rectangle::Rectangle;
use crate::types::{Bounds, Convention};

/// One lettered band of columns, `digits` columns of `step` degrees starting at `west`.
#[derive(Debug, Clone, Copy)]
pub struct ColumnBand {
    pub letter: char,
    pub west: f64,
    pub digits: u8,
    pub step: f64,
}

impl ColumnBand {
    pub fn east(&self) -> f64 {
        self.west + self.digits as f64 * self.step
    }
}

/// Immutable description of a rectangle grid.
#[derive(Debug)]
pub struct GridSpec {
    pub convention: Convention,
    /// Printed before the row number.
    pub prefix: &'static str,
    pub south: f64,
    pub north: f64,
    /// Height of a row, in degrees latitude.
    pub row_step: f64,
    /// Number given to the southernmost row.
    pub first_row: u8,
    /// Bands ordered west to east, contiguous.
    pub columns: &'static [ColumnBand],
}

const fn band(letter: char, west: f64, digits: u8, step: f64) -> ColumnBand {
    ColumnBand {
        letter: letter,
        west: west,
        digits: digits,
        step: step,
    }
}

static ICES_COLUMNS: [ColumnBand; 12] = [band('A', -44.0, 4, 1.0),
                                         band('B', -40.0, 10, 1.0),
                                         band('C', -30.0, 10, 1.0),
                                         band('D', -20.0, 10, 1.0),
                                         band('E', -10.0, 10, 1.0),
                                         band('F', 0.0, 10, 1.0),
                                         band('G', 10.0, 10, 1.0),
                                         band('H', 20.0, 10, 1.0),
                                         // no I
                                         band('J', 30.0, 10, 1.0),
                                         band('K', 40.0, 10, 1.0),
                                         band('L', 50.0, 10, 1.0),
                                         band('M', 60.0, 9, 1.0)];

static GFCM_COLUMNS: [ColumnBand; 10] = [band('A', -6.0, 10, 0.5),
                                         band('B', -1.0, 10, 0.5),
                                         band('C', 4.0, 10, 0.5),
                                         band('D', 9.0, 10, 0.5),
                                         band('E', 14.0, 10, 0.5),
                                         band('F', 19.0, 10, 0.5),
                                         band('G', 24.0, 10, 0.5),
                                         band('H', 29.0, 10, 0.5),
                                         band('I', 34.0, 10, 0.5),
                                         band('J', 39.0, 6, 0.5)];

/// ICES statistical rectangles: 0.5° latitude by 1° longitude, rows numbered from 01 at 36°N.
pub static ICES_GRID: GridSpec = GridSpec {
    convention: Convention::Ices,
    prefix: "",
    south: 36.0,
    north: 85.5,
    row_step: 0.5,
    first_row: 1,
    columns: &ICES_COLUMNS,
};

/// GFCM statistical rectangles: 0.5° by 0.5°, rows numbered from 00 at 30°N, columns from 6°W.
pub static GFCM_GRID: GridSpec = GridSpec {
    convention: Convention::Gfcm,
    prefix: "M",
    south: 30.0,
    north: 48.0,
    row_step: 0.5,
    first_row: 0,
    columns: &GFCM_COLUMNS,
};

/// Grid used by the given convention.
pub fn grid_for(convention: Convention) -> &'static GridSpec {
    match convention {
        Convention::Ices => &ICES_GRID,
        Convention::Gfcm => &GFCM_GRID,
    }
}

impl GridSpec {
    pub fn west(&self) -> f64 {
        self.columns.first().map_or(0.0, |b| b.west)
    }

    pub fn east(&self) -> f64 {
        self.columns.last().map_or(0.0, |b| b.east())
    }

    pub fn bbox(&self) -> Bounds {
        Bounds {
            north: self.north,
            south: self.south,
            east: self.east(),
            west: self.west(),
        }
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> u8 {
        ((self.north - self.south) / self.row_step).round() as u8
    }

    pub fn last_row(&self) -> u8 {
        self.first_row + self.row_count() - 1
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.bbox().contains(latitude, longitude)
    }

    /// Find the rectangle holding given coordinate. Lower edges of rows and columns are
    /// inclusive. Returns `None` outside the grid.
    pub fn locate(&self, latitude: f64, longitude: f64) -> Option<Rectangle> {
        if !self.contains(latitude, longitude) {
            return None;
        }
        let row = ((latitude - self.south) / self.row_step).floor() as u8 + self.first_row;
        let band = self.columns
            .iter()
            .find(|b| longitude >= b.west && longitude < b.east())?;
        let mut digit = cmp::min(((longitude - band.west) / band.step).floor() as u8,
                                 band.digits - 1);
        // `longitude - west` may round up across a column edge; agree with `cell_bounds`.
        if digit > 0 && longitude < band.west + digit as f64 * band.step {
            digit -= 1;
        }
        let row = cmp::min(row, self.last_row());
        Some(Rectangle {
            convention: self.convention,
            row: row,
            column: band.letter,
            digit: digit,
        })
    }

    /// Bounds of the cell at given row, column letter and digit, if it exists in this grid.
    pub fn cell_bounds(&self, row: u8, column: char, digit: u8) -> Option<Bounds> {
        if row < self.first_row || row > self.last_row() {
            return None;
        }
        let band = self.columns.iter().find(|b| b.letter == column)?;
        if digit >= band.digits {
            return None;
        }
        let south = self.south + (row - self.first_row) as f64 * self.row_step;
        let west = band.west + digit as f64 * band.step;
        Some(Bounds {
            north: south + self.row_step,
            south: south,
            east: west + band.step,
            west: west,
        })
    }
}
