//! Slippy-map tile addressing and Web Mercator projection.
//!
//! The world is a `2^z x 2^z` grid at zoom `z`. Column `x` grows eastward
//! from -180°, row `y` grows southward from the top of the projection.

use crate::error::{TileError, TileResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Southernmost latitude accepted before projecting.
pub const MIN_LAT: f64 = -89.9;

/// Northernmost latitude accepted before projecting.
pub const MAX_LAT: f64 = 89.9;

/// Highest zoom level a [`ZoomRange`] may reach.
pub const MAX_ZOOM: u32 = 24;

/// A tile address (z/x/y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAddress {
    /// Zoom level
    pub z: u32,
    /// Column (x)
    pub x: u32,
    /// Row (y), 0 at the top
    pub y: u32,
}

impl TileAddress {
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }

    /// Check that x and y fall inside the grid for this zoom level.
    pub fn is_valid(&self) -> bool {
        let n = grid_size(self.z);
        (self.x as i64) < n && (self.y as i64) < n
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Inclusive range of zoom levels to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct ZoomRange {
    min: u32,
    max: u32,
}

impl ZoomRange {
    /// Create a zoom range, rejecting `min > max` and levels above [`MAX_ZOOM`].
    pub fn new(min: u32, max: u32) -> TileResult<Self> {
        if min > max || max > MAX_ZOOM {
            return Err(TileError::InvalidZoomRange {
                min,
                max,
                limit: MAX_ZOOM,
            });
        }
        Ok(Self { min, max })
    }

    /// A range containing a single zoom level.
    pub fn single(zoom: u32) -> TileResult<Self> {
        Self::new(zoom, zoom)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, zoom: u32) -> bool {
        (self.min..=self.max).contains(&zoom)
    }
}

impl TryFrom<(u32, u32)> for ZoomRange {
    type Error = TileError;

    fn try_from((min, max): (u32, u32)) -> TileResult<Self> {
        Self::new(min, max)
    }
}

impl From<ZoomRange> for (u32, u32) {
    fn from(range: ZoomRange) -> Self {
        (range.min, range.max)
    }
}

/// Tiles per axis as a float, saturating at zoom 62 so the count fits in i64.
fn tiles_per_axis(zoom: u32) -> f64 {
    2f64.powi(zoom.min(62) as i32)
}

/// Number of tiles per axis at a zoom level, saturating for absurd zooms.
pub(crate) fn grid_size(zoom: u32) -> i64 {
    tiles_per_axis(zoom) as i64
}

/// Clamp a latitude into `[MIN_LAT, MAX_LAT]` so it can be projected.
pub fn clamp_latitude(lat: f64) -> f64 {
    if lat < MIN_LAT {
        MIN_LAT
    } else if lat > MAX_LAT {
        MAX_LAT
    } else {
        lat
    }
}

/// Convert longitude to a tile column at the given zoom level.
///
/// Longitude is not wrapped or clamped, so input outside [-180, 180) yields a
/// column outside the grid.
pub fn longitude_to_tile_x(lon: f64, zoom: u32) -> i64 {
    let n = tiles_per_axis(zoom);
    ((lon + 180.0) / 360.0 * n).floor() as i64
}

/// Convert latitude to a tile row at the given zoom level.
///
/// Returns `None` at or beyond the poles, where Web Mercator is undefined.
/// Latitudes past the edge of the square Mercator grid (about ±85.0511°)
/// land on the first or last row.
pub fn latitude_to_tile_y(lat: f64, zoom: u32) -> Option<i64> {
    if lat.is_nan() || lat.abs() >= 90.0 {
        return None;
    }

    let n = tiles_per_axis(zoom);
    let lat_rad = lat * PI / 180.0;
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n).floor() as i64;

    Some(y.clamp(0, grid_size(zoom) - 1))
}
