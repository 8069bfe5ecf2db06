//! Tile request generator CLI.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use tile_common::{pick_random_tile_in_region, GeoBoundingBox, TileResolver, ZoomRange};
use tracing::{info, warn};
use xyz_load::logging::init_tracing;
use xyz_load::{load_regions, PlanReport, TestConfig, TileGenerator};

#[derive(Parser)]
#[command(name = "xyz-load")]
#[command(about = "Random XYZ tile request generator for tile-server load tests", long_about = None)]
struct Cli {
    /// Region table JSON file (defaults to the bundled table)
    #[arg(long, global = true)]
    regions: Option<PathBuf>,

    /// Auth token appended to generated URLs
    #[arg(long, env = "KEY", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Log filter (e.g. "info" or "tile_common=debug"); RUST_LOG takes precedence
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the request plan of a scenario file
    Plan {
        /// Path to scenario YAML file
        #[arg(short, long)]
        scenario: PathBuf,

        /// Override the scenario seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: table (default), json, csv
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Sample random tiles for one region or extent
    Tile {
        /// Region name from the region table
        #[arg(short, long, conflicts_with = "bbox", required_unless_present = "bbox")]
        region: Option<String>,

        /// Extent as "south,north,west,east"
        #[arg(short, long)]
        bbox: Option<String>,

        /// Minimum zoom level
        #[arg(long, default_value = "0")]
        min_zoom: u32,

        /// Maximum zoom level
        #[arg(long, default_value = "14")]
        max_zoom: u32,

        /// Number of tiles
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the regions of the region table
    Regions,

    /// List available scenarios
    List {
        /// Scenarios directory
        #[arg(short, long, default_value = "scenarios")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let regions = Arc::new(load_regions(cli.regions.as_deref())?);

    match cli.command {
        Commands::Plan {
            scenario,
            seed,
            output,
        } => {
            info!(scenario = %scenario.display(), "Loading scenario");

            let mut config = TestConfig::from_file(&scenario)
                .with_context(|| format!("failed to load {}", scenario.display()))?;
            if let Some(s) = seed {
                config.seed = Some(s);
            }
            config.validate()?;

            let unknown = config.unknown_regions(&regions);
            if !unknown.is_empty() {
                warn!(regions = ?unknown, "Scenario references regions without extent data");
            }

            let mut generator = TileGenerator::new(config, regions).with_token(cli.token);
            let plan = generator.plan();

            match output.as_str() {
                "json" => {
                    println!("{}", PlanReport::format_json(&plan)?);
                }
                "csv" => {
                    println!("{}", PlanReport::csv_header());
                    println!("{}", PlanReport::format_csv(&plan));
                }
                _ => {
                    println!("{}", PlanReport::format_table(&plan));
                }
            }

            Ok(())
        }
        Commands::Tile {
            region,
            bbox,
            min_zoom,
            max_zoom,
            count,
            seed,
        } => {
            let zoom_range = ZoomRange::new(min_zoom, max_zoom)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let (label, tiles) = match (region, bbox) {
                (Some(name), _) => {
                    let resolver = TileResolver::new(regions);
                    let tiles = (0..count)
                        .map(|_| resolver.resolve(&name, zoom_range, &mut rng))
                        .collect::<Result<Vec<_>, _>>()?;
                    (name, tiles)
                }
                (None, Some(extent)) => {
                    let bbox = GeoBoundingBox::from_extent_string(&extent)?;
                    let tiles = (0..count)
                        .map(|_| pick_random_tile_in_region(&bbox, zoom_range, &mut rng))
                        .collect::<Vec<_>>();
                    (extent, tiles)
                }
                (None, None) => anyhow::bail!("either --region or --bbox is required"),
            };

            println!("{}", PlanReport::format_tiles(&label, &tiles));
            Ok(())
        }
        Commands::Regions => {
            println!("{}", PlanReport::format_regions(&regions));
            Ok(())
        }
        Commands::List { dir } => {
            println!("Available scenarios in {}:", dir.display());
            println!();

            let entries = std::fs::read_dir(&dir)
                .with_context(|| format!("failed to read scenario directory {}", dir.display()))?;

            let mut scenarios = Vec::new();
            for entry in entries.flatten() {
                let path = entry.path();
                let is_yaml = matches!(
                    path.extension().and_then(|s| s.to_str()),
                    Some("yaml") | Some("yml")
                );
                if !is_yaml {
                    continue;
                }
                // Try to load the config to get name and description
                match TestConfig::from_file(&path) {
                    Ok(config) => scenarios.push((
                        entry.file_name().to_string_lossy().to_string(),
                        config.name,
                        config.description,
                    )),
                    Err(e) => warn!(path = %path.display(), error = %e, "Skipping invalid scenario"),
                }
            }

            scenarios.sort_by(|a, b| a.0.cmp(&b.0));

            if scenarios.is_empty() {
                println!("No scenario files found");
            } else {
                for (filename, name, desc) in scenarios {
                    println!("  {} - {}", filename, name);
                    println!("    {}", desc);
                    println!();
                }
            }

            Ok(())
        }
    }
}
