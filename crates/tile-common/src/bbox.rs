//! Geographic bounding box of a named region.

use serde::{Deserialize, Serialize};

/// A region extent in WGS84 degrees.
///
/// `south <= north` is expected but not enforced. `west`/`east` are taken as
/// given: a box crossing the antimeridian has `west > east` and is not
/// normalized here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl GeoBoundingBox {
    /// Create a new bounding box from its edges.
    pub fn new(south: f64, north: f64, west: f64, east: f64) -> Self {
        Self {
            south,
            north,
            west,
            east,
        }
    }

    /// Parse an extent string: "south,north,west,east"
    pub fn from_extent_string(s: &str) -> Result<Self, BboxParseError> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(BboxParseError::InvalidFormat(s.to_string()));
        }

        let parse = |part: &str| {
            part.parse::<f64>()
                .map_err(|_| BboxParseError::InvalidNumber(part.to_string()))
        };

        Ok(Self {
            south: parse(parts[0])?,
            north: parse(parts[1])?,
            west: parse(parts[2])?,
            east: parse(parts[3])?,
        })
    }

    /// East-west extent in degrees (negative when west > east).
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// North-south extent in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Check if a point is contained within this box (edges inclusive).
    pub fn contains_point(&self, lat: f64, lon: f64) -> bool {
        lat >= self.south && lat <= self.north && lon >= self.west && lon <= self.east
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BboxParseError {
    #[error("Invalid extent format: {0}. Expected 'south,north,west,east'")]
    InvalidFormat(String),

    #[error("Invalid number in extent: {0}")]
    InvalidNumber(String),
}
