//! Error types for tile resolution.

use thiserror::Error;

/// Result type alias using TileError.
pub type TileResult<T> = Result<T, TileError>;

/// Errors surfaced by region lookup and zoom range construction.
///
/// None of these are fatal: a region miss means the caller skips one
/// request, and the others only occur while loading configuration.
#[derive(Debug, Error)]
pub enum TileError {
    // === Lookup Errors ===
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    // === Configuration Errors ===
    #[error("Invalid zoom range {min}..={max}: expected min <= max <= {limit}")]
    InvalidZoomRange { min: u32, max: u32, limit: u32 },

    #[error("Failed to read region table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid region table: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TileError {
    /// Whether this error is a recoverable lookup miss.
    pub fn is_region_not_found(&self) -> bool {
        matches!(self, TileError::RegionNotFound(_))
    }
}
