//! Plan reporting and formatting.

use crate::generator::RequestPlan;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use tile_common::{RegionTable, TileAddress};

/// Formats generated plans and region tables for output.
pub struct PlanReport;

impl PlanReport {
    /// Format a plan as a console table.
    pub fn format_table(plan: &RequestPlan) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec!["Step", "Region", "Tile", "URL"]);

        for request in &plan.requests {
            table.add_row(vec![
                request.step.clone(),
                request.region.clone(),
                TileAddress::new(request.z, request.x, request.y).to_string(),
                request.url.clone(),
            ]);
        }

        let mut summary = Table::new();
        summary
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec![format!("Request Plan: {}", plan.config_name)]);
        summary.add_row(vec!["Generated:", &plan.generated_at.to_rfc3339()]);
        summary.add_row(vec!["Requests:", &format!("{}", plan.requests.len())]);
        summary.add_row(vec!["Skipped:", &format!("{}", plan.skipped)]);

        format!("{}\n{}", table, summary)
    }

    /// Format a plan as JSON.
    pub fn format_json(plan: &RequestPlan) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(plan)?)
    }

    /// Format a plan as CSV rows, one per request.
    pub fn format_csv(plan: &RequestPlan) -> String {
        plan.requests
            .iter()
            .map(|r| {
                format!(
                    "{},{},{},{},{},{},{}",
                    plan.config_name,
                    r.step,
                    csv_field(&r.region),
                    r.z,
                    r.x,
                    r.y,
                    csv_field(&r.url)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// CSV header row.
    pub fn csv_header() -> &'static str {
        "config,step,region,z,x,y,url"
    }

    /// Format sampled tiles for a single region.
    pub fn format_tiles(label: &str, tiles: &[TileAddress]) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec![format!("Tiles: {}", label), "z".into(), "x".into(), "y".into()]);

        for tile in tiles {
            table.add_row(vec![
                tile.to_string(),
                tile.z.to_string(),
                tile.x.to_string(),
                tile.y.to_string(),
            ]);
        }

        table.to_string()
    }

    /// Format a region table with its extents.
    pub fn format_regions(regions: &RegionTable) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec!["Region", "South", "North", "West", "East"]);

        for (name, extent) in regions.iter() {
            match extent {
                Some(e) => table.add_row(vec![
                    name.to_string(),
                    format!("{:.2}", e.south),
                    format!("{:.2}", e.north),
                    format!("{:.2}", e.west),
                    format!("{:.2}", e.east),
                ]),
                None => table.add_row(vec![name, "-", "-", "-", "-"]),
            };
        }

        table.to_string()
    }
}

/// Quote a CSV field when it contains a separator or quote.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TileRequest;
    use chrono::Utc;

    fn plan() -> RequestPlan {
        RequestPlan {
            config_name: "europe".to_string(),
            generated_at: Utc::now(),
            requests: vec![TileRequest {
                step: "mvt".to_string(),
                region: "France".to_string(),
                z: 4,
                x: 8,
                y: 5,
                url: "https://tiles.example.com/mvt/4/8/5?a=1,2".to_string(),
            }],
            skipped: 2,
        }
    }

    #[test]
    fn test_format_csv_quotes_commas() {
        let csv = PlanReport::format_csv(&plan());
        assert_eq!(
            csv,
            "europe,mvt,France,4,8,5,\"https://tiles.example.com/mvt/4/8/5?a=1,2\""
        );
        assert_eq!(PlanReport::csv_header().split(',').count(), 7);
    }

    #[test]
    fn test_format_json_round_trips_fields() {
        let json = PlanReport::format_json(&plan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["skipped"], 2);
        assert_eq!(value["requests"][0]["region"], "France");
        assert_eq!(value["requests"][0]["z"], 4);
    }

    #[test]
    fn test_format_table_mentions_plan() {
        let table = PlanReport::format_table(&plan());
        assert!(table.contains("Request Plan: europe"));
        assert!(table.contains("4/8/5"));
    }

    #[test]
    fn test_format_regions_marks_missing_extent() {
        let regions =
            RegionTable::from_json_str(r#"{"Nowhere": {}, "France": {"extent": {"south": 41.3, "north": 51.1, "west": -5.2, "east": 9.6}}}"#)
                .unwrap();
        let table = PlanReport::format_regions(&regions);
        assert!(table.contains("Nowhere"));
        assert!(table.contains("41.30"));
    }
}
