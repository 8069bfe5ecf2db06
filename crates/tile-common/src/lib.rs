//! Tile math shared by the XYZ tile load generator.
//!
//! Converts a region's geographic extent plus a zoom range into a uniformly
//! sampled slippy-map tile address (z/x/y, Web Mercator, Y growing south).

pub mod bbox;
pub mod error;
pub mod region;
pub mod resolver;
pub mod tile;

pub use bbox::{BboxParseError, GeoBoundingBox};
pub use error::{TileError, TileResult};
pub use region::RegionTable;
pub use resolver::{pick_random_tile_in_region, tile_bounds, TileBounds, TileResolver};
pub use tile::{
    clamp_latitude, latitude_to_tile_y, longitude_to_tile_x, TileAddress, ZoomRange, MAX_LAT,
    MAX_ZOOM, MIN_LAT,
};
