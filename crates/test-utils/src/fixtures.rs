//! Common test fixtures for tile sampling tests.
//!
//! Extents are `(south, north, west, east)` in degrees, the same order as a
//! region table `extent` object.

/// Region extents.
pub mod extent {
    /// Whole Web Mercator world
    pub const WORLD: (f64, f64, f64, f64) = (-85.0511, 85.0511, -180.0, 179.9999);

    /// Western Europe, the reference example used throughout the tests
    pub const WESTERN_EUROPE: (f64, f64, f64, f64) = (45.0, 62.0, -11.0, 6.0);

    /// Continental United States
    pub const CONUS: (f64, f64, f64, f64) = (24.5, 49.4, -124.8, -66.9);

    /// Reaches both poles, exercising latitude clamping
    pub const POLAR: (f64, f64, f64, f64) = (-95.0, 95.0, -30.0, 30.0);

    /// Crosses the antimeridian (west > east)
    pub const FIJI: (f64, f64, f64, f64) = (-21.0, -12.5, 177.0, -178.0);

    /// Single point (degenerate box)
    pub const POINT: (f64, f64, f64, f64) = (10.0, 10.0, 20.0, 20.0);

    /// South and north swapped
    pub const UPSIDE_DOWN: (f64, f64, f64, f64) = (62.0, 45.0, -11.0, 6.0);
}

/// Region table documents.
pub mod regions {
    /// A small region table in the bundled JSON layout, with one region
    /// lacking an extent and extra fields that must be ignored.
    pub const SAMPLE_JSON: &str = r#"{
  "France": {
    "iso": "FR",
    "extent": { "south": 41.3, "north": 51.1, "west": -5.2, "east": 9.6 }
  },
  "Western Europe": {
    "extent": { "south": 45.0, "north": 62.0, "west": -11.0, "east": 6.0 }
  },
  "Fiji": {
    "extent": { "south": -21.0, "north": -12.5, "west": 177.0, "east": -178.0 }
  },
  "Antarctica": {
    "extent": null
  },
  "Bouvet Island": {
    "iso": "BV"
  }
}"#;

    /// Region names in `SAMPLE_JSON` that have an extent.
    pub const WITH_EXTENT: [&str; 3] = ["France", "Western Europe", "Fiji"];

    /// Region names in `SAMPLE_JSON` listed without an extent.
    pub const WITHOUT_EXTENT: [&str; 2] = ["Antarctica", "Bouvet Island"];

    /// A name that never appears in any table.
    pub const MISSING: &str = "Atlantis";
}

/// Generator seeds used by determinism tests.
pub mod seeds {
    pub const SEEDS: [u64; 4] = [0, 1, 42, 0xDEAD_BEEF];
}

/// Zoom levels.
pub mod zoom {
    /// Levels exercised by grid-range property tests.
    pub const LEVELS: [u32; 8] = [0, 1, 2, 4, 8, 12, 18, 24];
}
