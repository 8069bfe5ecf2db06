//! Tile request generator for load testing XYZ tile servers.
//!
//! This crate provides tools to:
//! - Load scenario steps describing which regions and zoom levels to hit
//! - Draw a random region per request and a random tile inside it
//! - Build tile URLs from the step's path template and auth token
//! - Output the resulting request plan (console, JSON, CSV)
//!
//! Issuing the requests is left to the load-testing harness.

pub mod config;
pub mod generator;
pub mod logging;
pub mod report;

pub use config::{load_regions, TestConfig, TileStep};
pub use generator::{RequestPlan, TileGenerator, TileRequest};
pub use report::PlanReport;
