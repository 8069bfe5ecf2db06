//! Tile request URL generation.

use crate::config::{TestConfig, TileStep};
use chrono::{DateTime, Utc};
use rand::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tile_common::{RegionTable, TileAddress, TileResolver};
use tracing::{debug, info};

/// A single planned tile request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileRequest {
    pub step: String,
    pub region: String,
    pub z: u32,
    pub x: u32,
    pub y: u32,
    pub url: String,
}

/// Every request generated for a scenario, in step order.
#[derive(Debug, Clone, Serialize)]
pub struct RequestPlan {
    pub config_name: String,
    pub generated_at: DateTime<Utc>,
    pub requests: Vec<TileRequest>,
    /// Requests dropped because their region had no extent
    pub skipped: usize,
}

/// Generates tile request URLs for the steps of a scenario.
pub struct TileGenerator {
    config: TestConfig,
    resolver: TileResolver,
    rng: StdRng,
    token: Option<String>,
}

impl TileGenerator {
    /// Create a new tile generator.
    pub fn new(config: TestConfig, regions: Arc<RegionTable>) -> Self {
        // Use seed if provided for reproducible plans, otherwise use entropy
        let rng = if let Some(seed) = config.seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };

        Self {
            config,
            resolver: TileResolver::new(regions),
            rng,
            token: None,
        }
    }

    /// Append `token=<value>` to every generated URL.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Generate the next request for the step at `step_idx`.
    ///
    /// Returns `None` when the drawn region cannot be resolved; the miss has
    /// already been logged and the caller should skip this iteration.
    pub fn next_request(&mut self, step_idx: usize) -> Option<TileRequest> {
        let step = self.config.steps.get(step_idx)?;
        let region = step.regions.choose(&mut self.rng)?;

        let tile = self
            .resolver
            .resolve(region, step.zoom_range, &mut self.rng)
            .ok()?;

        let url = Self::build_url(&self.config.target, step, &tile, self.token.as_deref());
        debug!(step = %step.name, region = %region, tile = %tile, "Generated tile request");

        Some(TileRequest {
            step: step.name.clone(),
            region: region.clone(),
            z: tile.z,
            x: tile.x,
            y: tile.y,
            url,
        })
    }

    /// Expand every step `requests` times into a plan.
    pub fn plan(&mut self) -> RequestPlan {
        let mut requests = Vec::new();
        let mut skipped = 0;

        for step_idx in 0..self.config.steps.len() {
            let count = self.config.steps[step_idx].requests;
            for _ in 0..count {
                match self.next_request(step_idx) {
                    Some(request) => requests.push(request),
                    None => skipped += 1,
                }
            }
        }

        info!(
            scenario = %self.config.name,
            generated = requests.len(),
            skipped,
            "Request plan ready"
        );

        RequestPlan {
            config_name: self.config.name.clone(),
            generated_at: Utc::now(),
            requests,
            skipped,
        }
    }

    /// Build a tile URL: `{target}{api}/{z}/{x}/{y}{params}` plus the token.
    pub fn build_url(
        target: &str,
        step: &TileStep,
        tile: &TileAddress,
        token: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}{}/{}/{}/{}{}",
            target.trim_end_matches('/'),
            step.api,
            tile.z,
            tile.x,
            tile.y,
            step.params
        );

        if let Some(token) = token {
            let separator = if url.contains('?') { '&' } else { '?' };
            url.push(separator);
            url.push_str("token=");
            url.push_str(token);
        }

        url
    }
}
