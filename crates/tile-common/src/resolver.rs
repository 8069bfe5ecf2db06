//! Random tile selection inside a region.

use crate::bbox::GeoBoundingBox;
use crate::error::TileResult;
use crate::region::RegionTable;
use crate::tile::{
    clamp_latitude, grid_size, latitude_to_tile_y, longitude_to_tile_x, TileAddress, ZoomRange,
};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Tile index bounds covering a bounding box at one zoom level (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    pub z: u32,
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl TileBounds {
    /// True when either axis has `min > max`.
    pub fn is_inverted(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Swap inverted pairs, then clamp every bound into the grid.
    ///
    /// The result always describes at least one valid tile.
    pub fn normalized(&self) -> TileBounds {
        let last = grid_size(self.z) - 1;
        let (x_min, x_max) = ordered(self.x_min, self.x_max);
        let (y_min, y_max) = ordered(self.y_min, self.y_max);

        TileBounds {
            z: self.z,
            x_min: x_min.clamp(0, last),
            x_max: x_max.clamp(0, last),
            y_min: y_min.clamp(0, last),
            y_max: y_max.clamp(0, last),
        }
    }

    /// Check if a tile lies inside these bounds.
    pub fn contains(&self, tile: &TileAddress) -> bool {
        tile.z == self.z
            && (self.x_min..=self.x_max).contains(&(tile.x as i64))
            && (self.y_min..=self.y_max).contains(&(tile.y as i64))
    }

    /// Number of tiles covered (zero when inverted).
    pub fn tile_count(&self) -> u64 {
        let width = (self.x_max - self.x_min + 1).max(0) as u64;
        let height = (self.y_max - self.y_min + 1).max(0) as u64;
        width * height
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Project a bounding box onto the tile grid at zoom `z`.
///
/// Latitudes are clamped before projecting. North maps to `y_min` and south
/// to `y_max` because rows grow southward. The bounds are returned as
/// computed; see [`TileBounds::normalized`] for the sampling form.
pub fn tile_bounds(bbox: &GeoBoundingBox, z: u32) -> TileBounds {
    let south = clamp_latitude(bbox.south);
    let north = clamp_latitude(bbox.north);
    let last = grid_size(z) - 1;

    TileBounds {
        z,
        x_min: longitude_to_tile_x(bbox.west, z),
        x_max: longitude_to_tile_x(bbox.east, z),
        // Only reachable with a NaN edge; fall back to the full grid height.
        y_min: latitude_to_tile_y(north, z).unwrap_or(0),
        y_max: latitude_to_tile_y(south, z).unwrap_or(last),
    }
}

/// Pick a uniformly random tile inside `bbox` at a zoom drawn from `zoom_range`.
///
/// The zoom level is drawn first, then the column, then the row. Inverted
/// bounds (a malformed box, or one crossing the antimeridian) are swapped
/// before sampling and everything is clamped into the grid, so the returned
/// address is always valid.
pub fn pick_random_tile_in_region<R: Rng + ?Sized>(
    bbox: &GeoBoundingBox,
    zoom_range: ZoomRange,
    rng: &mut R,
) -> TileAddress {
    let z = rng.gen_range(zoom_range.min()..=zoom_range.max());

    let bounds = tile_bounds(bbox, z);
    if bounds.is_inverted() {
        debug!(?bounds, "Swapping inverted tile bounds");
    }
    let bounds = bounds.normalized();

    let x = rng.gen_range(bounds.x_min..=bounds.x_max);
    let y = rng.gen_range(bounds.y_min..=bounds.y_max);

    // z <= MAX_ZOOM, so normalized indices fit in u32.
    TileAddress::new(z, x as u32, y as u32)
}

/// Resolves region names to random tiles against a shared region table.
#[derive(Debug, Clone)]
pub struct TileResolver {
    regions: Arc<RegionTable>,
}

impl TileResolver {
    pub fn new(regions: Arc<RegionTable>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Look up `region` and pick a random tile inside it.
    ///
    /// A region miss is returned as [`crate::TileError::RegionNotFound`]; no
    /// randomness is consumed in that case.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        region: &str,
        zoom_range: ZoomRange,
        rng: &mut R,
    ) -> TileResult<TileAddress> {
        let bbox = self.regions.lookup(region)?;
        Ok(pick_random_tile_in_region(&bbox, zoom_range, rng))
    }
}
