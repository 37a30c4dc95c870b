#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{LevelScanner, ZoneDetector, detect_zones};
pub use config::{DETECTOR, DetectorConfig};
pub use domain::{PriceObservation, ZoneKind};
pub use models::{OverlapZone, ResistanceZone, SupportZone, ZoneReport};

use anyhow::{Result, bail};
use clap::Parser;
use strum::IntoEnumIterator;

use crate::utils::epoch_ms_to_utc;

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON observation file: [{"ts": <ms>, "lp": <price>}, ...]
    #[arg(long)]
    pub input: Option<std::path::PathBuf>,

    /// Analyze the built-in demo series instead of a file
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Print the report as pretty JSON instead of the text summary
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Main entry point for the binary: resolves the input series, runs the
/// detector, and prints the report.
pub fn run_scan(args: &Cli) -> Result<()> {
    // 1. Resolve the input series
    let series = if args.demo {
        data::demo_series()
    } else if let Some(path) = &args.input {
        data::load_observations(path)?
    } else {
        bail!("No input given: pass --input <file> or --demo");
    };
    log::info!("Loaded {} observations{}", series.len(), series_span(&series));

    // 2. Detect zones
    let report = detect_zones(&series, &DetectorConfig::default())?;
    log::info!(
        "Found {} support, {} resistance, {} overlap zones",
        report.support_zones.len(),
        report.resistance_zones.len(),
        report.highlighted_zones.len()
    );

    // 3. Print
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_report(&report);
    Ok(())
}

fn print_report(report: &ZoneReport) {
    for kind in ZoneKind::iter() {
        println!("{} zones: {}", kind, report.count(kind));
        match kind {
            ZoneKind::Support => {
                for zone in &report.support_zones {
                    println!(
                        "  {} | bounces: {} | prior resistance: {}",
                        zone.zone, zone.bounce_count, zone.confirmed_resistance
                    );
                }
            }
            ZoneKind::Resistance => {
                for zone in &report.resistance_zones {
                    println!("  {} | drops: {}", zone.zone, zone.drop_count);
                }
            }
        }
    }

    println!("overlap zones: {}", report.highlighted_zones.len());
    for zone in &report.highlighted_zones {
        println!(
            "  {} | bounces: {} | drops: {}",
            zone.zone, zone.support_bounce_count, zone.resistance_drop_count
        );
    }
}

fn series_span(series: &[PriceObservation]) -> String {
    let first = series.first().and_then(|obs| obs.timestamp_ms);
    let last = series.last().and_then(|obs| obs.timestamp_ms);
    match (first, last) {
        (Some(first), Some(last)) => {
            format!(" spanning {} to {}", epoch_ms_to_utc(first), epoch_ms_to_utc(last))
        }
        _ => String::new(),
    }
}
