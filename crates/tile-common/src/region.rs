//! Read-only lookup table from region name to geographic extent.

use crate::bbox::GeoBoundingBox;
use crate::error::{TileError, TileResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// One entry of a region JSON document. Fields other than `extent` are
/// ignored.
#[derive(Debug, Deserialize)]
struct RegionRecord {
    #[serde(default)]
    extent: Option<GeoBoundingBox>,
}

/// Region name to bounding box mapping.
///
/// Built once and never mutated; share it between workers with `Arc`.
/// Regions listed without an extent are kept so that lookups can tell them
/// apart in logs, but they resolve to [`TileError::RegionNotFound`].
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    regions: BTreeMap<String, Option<GeoBoundingBox>>,
}

impl RegionTable {
    /// Parse a region document:
    /// `{"France": {"extent": {"south": .., "north": .., "west": .., "east": ..}}}`
    pub fn from_json_str(json: &str) -> TileResult<Self> {
        let records: BTreeMap<String, RegionRecord> = serde_json::from_str(json)?;
        Ok(Self {
            regions: records
                .into_iter()
                .map(|(name, record)| (name, record.extent))
                .collect(),
        })
    }

    /// Load a region document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> TileResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Look up the extent of a region.
    pub fn lookup(&self, name: &str) -> TileResult<GeoBoundingBox> {
        match self.regions.get(name) {
            Some(Some(bbox)) => Ok(*bbox),
            Some(None) => {
                warn!(region = name, "No extent data available for region");
                Err(TileError::RegionNotFound(name.to_string()))
            }
            None => {
                warn!(region = name, "Region not in table");
                Err(TileError::RegionNotFound(name.to_string()))
            }
        }
    }

    /// Whether the table lists this region (with or without an extent).
    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    /// Iterate regions in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&GeoBoundingBox>)> {
        self.regions
            .iter()
            .map(|(name, bbox)| (name.as_str(), bbox.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, GeoBoundingBox)> for RegionTable {
    fn from_iter<I: IntoIterator<Item = (S, GeoBoundingBox)>>(iter: I) -> Self {
        Self {
            regions: iter
                .into_iter()
                .map(|(name, bbox)| (name.into(), Some(bbox)))
                .collect(),
        }
    }
}
