//! CLI tool for inspecting fill bucket partitioning without a renderer
//!
//! Usage:
//!   cargo run --release --bin fill_stats -- <tiles.json> [options]
//!
//! Input:
//!   { "tiles": [ { "id": "z/x/y", "features": [ [ [[x, y], ...], ... ], ... ] } ] }
//!
//! Options:
//!   --config <file>   JSON FillBucketConfig (default: TILE_FILL_* env vars)
//!   --json            Print one JSON summary per tile instead of a table

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use tile_fill::{build_tile_buckets, BucketStats, FillBucketConfig, GeometryReport, Group, TileGeometry};

#[derive(Deserialize)]
struct TileSet {
    tiles: Vec<TileGeometry>,
}

#[derive(Serialize)]
struct TileSummary<'a> {
    id: &'a str,
    report: GeometryReport,
    stats: BucketStats,
    line_groups: &'a [Group],
    triangle_groups: &'a [Group],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <tiles.json> [--config <file>] [--json]", args[0]);
        return Ok(());
    }

    let input_path = &args[1];
    let mut config_path: Option<String> = None;
    let mut json_output = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(
                    args.get(i)
                        .cloned()
                        .context("--config needs a file path")?,
                );
            }
            "--json" => json_output = true,
            other => anyhow::bail!("unknown option '{}'", other),
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config '{}'", path))?;
            FillBucketConfig::from_json_str(&text)?
        }
        None => FillBucketConfig::from_env()?,
    };

    let text = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read '{}'", input_path))?;
    let tile_set: TileSet = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse '{}'", input_path))?;

    let start = Instant::now();
    let builds = build_tile_buckets(&tile_set.tiles, &config)?;
    let elapsed = start.elapsed();

    let mut total = GeometryReport::default();
    for build in &builds {
        total.merge(build.report);
        let stats = build.bucket.stats();

        if json_output {
            let summary = TileSummary {
                id: &build.id,
                report: build.report,
                stats,
                line_groups: build.bucket.line_groups(),
                triangle_groups: build.bucket.triangle_groups(),
            };
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "{:<16} polygons {:>6} (rejected {:>3})  verts {:>8}  segs {:>8} in {:>3} groups  tris {:>8} in {:>3} groups",
                build.id,
                build.report.polygons_added,
                build.report.polygons_rejected,
                stats.vertices,
                stats.line_segments,
                stats.line_groups,
                stats.triangles,
                stats.triangle_groups
            );
        }
    }

    eprintln!(
        "Built {} tiles in {:.2}ms: {} polygons, {} rejected, {} holes dropped",
        builds.len(),
        elapsed.as_secs_f64() * 1000.0,
        total.polygons_added,
        total.polygons_rejected,
        total.holes_dropped
    );

    Ok(())
}
