//! Configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tile_common::{RegionTable, ZoomRange};

/// Region table compiled into the binary, used when no `--regions` file is given.
pub const BUNDLED_REGIONS: &str = include_str!("../data/regions.json");

/// Scenario configuration loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Base URL of the tile server, e.g. `https://tiles.example.com`
    pub target: String,
    #[serde(default)]
    pub seed: Option<u64>, // Optional RNG seed for reproducible plans
    pub steps: Vec<TileStep>,
}

/// One tile request action: pick a region, pick a tile in it, build a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileStep {
    pub name: String,
    /// Path appended to the target before `/{z}/{x}/{y}`
    pub api: String,
    /// Suffix appended after the tile path (extension and/or query string)
    #[serde(default)]
    pub params: String,
    /// Candidate regions; one is drawn per request
    pub regions: Vec<String>,
    /// Inclusive `[min, max]` zoom levels
    pub zoom_range: ZoomRange,
    #[serde(default = "default_requests")]
    pub requests: u32,
}

fn default_requests() -> u32 {
    1
}

impl TestConfig {
    /// Load configuration from YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config: TestConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.target.trim().is_empty() {
            anyhow::bail!("target must not be empty");
        }
        if self.steps.is_empty() {
            anyhow::bail!("at least one step must be specified");
        }
        for step in &self.steps {
            if step.regions.is_empty() {
                anyhow::bail!("step '{}' must list at least one region", step.name);
            }
            if step.requests == 0 {
                anyhow::bail!("step '{}' requests must be > 0", step.name);
            }
        }
        Ok(())
    }

    /// Region names referenced by any step that the table cannot resolve.
    pub fn unknown_regions(&self, table: &RegionTable) -> Vec<String> {
        let mut missing: Vec<String> = self
            .steps
            .iter()
            .flat_map(|step| step.regions.iter())
            .filter(|name| table.lookup(name).is_err())
            .cloned()
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}

/// Load a region table from `path`, or the bundled table when `None`.
pub fn load_regions(path: Option<&Path>) -> anyhow::Result<RegionTable> {
    let table = match path {
        Some(path) => RegionTable::from_file(path)?,
        None => RegionTable::from_json_str(BUNDLED_REGIONS)?,
    };
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"
name: "Europe MVT"
description: "Vector tiles"
target: "https://tiles.example.com"
seed: 7
steps:
  - name: "mvt"
    api: "/maps/streets"
    params: "?format=pbf"
    regions: ["France", "Atlantis"]
    zoom_range: [4, 6]
    requests: 10
"#;

    #[test]
    fn test_parse_scenario() {
        let config = TestConfig::from_yaml_str(SCENARIO).unwrap();
        assert_eq!(config.name, "Europe MVT");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.steps.len(), 1);
        assert_eq!(config.steps[0].zoom_range, ZoomRange::new(4, 6).unwrap());
        assert_eq!(config.steps[0].requests, 10);
        config.validate().unwrap();
    }

    #[test]
    fn test_requests_default_to_one() {
        let yaml = SCENARIO.replace("    requests: 10\n", "");
        let config = TestConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(config.steps[0].requests, 1);
    }

    #[test]
    fn test_inverted_zoom_range_is_rejected() {
        let yaml = SCENARIO.replace("[4, 6]", "[6, 4]");
        assert!(TestConfig::from_yaml_str(&yaml).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_regions() {
        let mut config = TestConfig::from_yaml_str(SCENARIO).unwrap();
        config.steps[0].regions.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least one region"));
    }

    #[test]
    fn test_validate_rejects_zero_requests() {
        let mut config = TestConfig::from_yaml_str(SCENARIO).unwrap();
        config.steps[0].requests = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_steps() {
        let mut config = TestConfig::from_yaml_str(SCENARIO).unwrap();
        config.steps.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_regions() {
        let config = TestConfig::from_yaml_str(SCENARIO).unwrap();
        let table = load_regions(None).unwrap();
        assert_eq!(config.unknown_regions(&table), vec!["Atlantis".to_string()]);
    }

    #[test]
    fn test_bundled_regions_parse() {
        let table = load_regions(None).unwrap();
        assert!(table.lookup("France").is_ok());
        assert!(table.len() >= 20);
    }
}
