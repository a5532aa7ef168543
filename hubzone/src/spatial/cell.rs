//! Grid cell coordinate type.
//!
//! A [`GridCell`] is a 1°×1° area identified by the floor of latitude and
//! longitude. Cell `(lat, lon)` covers `[lat, lat+1) × [lon, lon+1)`;
//! latitude 90 and longitude 180 fold into the adjacent cell so every valid
//! coordinate maps to exactly one cell.

use std::fmt;

use crate::zone::BoundingBox;

/// A 1°×1° grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Floor of the latitude (south edge of the cell), -90..=89.
    pub lat: i32,
    /// Floor of the longitude (west edge of the cell), -180..=179.
    pub lon: i32,
}

impl GridCell {
    /// Create a cell from integer coordinates.
    pub fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    /// Cell containing the given coordinate.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            lat: clamp_lat_cell(lat.floor() as i32),
            lon: wrap_lon_cell(lon.floor() as i32),
        }
    }
}

impl fmt::Display for GridCell {
    /// Format as a signed cell name (e.g., `+38-078`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+03}{:+04}", self.lat, self.lon)
    }
}

fn clamp_lat_cell(lat: i32) -> i32 {
    lat.clamp(-90, 89)
}

fn wrap_lon_cell(lon: i32) -> i32 {
    (lon + 180).rem_euclid(360) - 180
}

/// All cells a bounding box overlaps, walking eastward across the
/// antimeridian when the box wraps. Each cell appears exactly once.
pub(super) fn covering_cells(bbox: &BoundingBox) -> Vec<GridCell> {
    let lat_start = clamp_lat_cell(bbox.min_lat.floor() as i32);
    let lat_end = clamp_lat_cell(bbox.max_lat.floor() as i32);

    let lon_start = bbox.min_lon.floor() as i32;
    let lon_end = bbox.max_lon.floor() as i32;
    let lon_span = if bbox.wraps() {
        (lon_end - lon_start).rem_euclid(360)
    } else {
        lon_end - lon_start
    };
    // A full circle is 360 distinct cells
    let lon_span = lon_span.min(359);

    let mut cells = Vec::with_capacity(((lat_end - lat_start + 1) * (lon_span + 1)) as usize);
    for lat in lat_start..=lat_end {
        for step in 0..=lon_span {
            cells.push(GridCell::new(lat, wrap_lon_cell(lon_start + step)));
        }
    }
    cells
}
