// Zone detection pipeline: scan, aggregate, overlap-match
pub mod aggregate;
pub mod history;
pub mod overlap;
pub mod scanner;
pub mod trend;

// Re-export commonly used types
pub use scanner::{LevelScanner, RawZones};

use anyhow::{Result, bail};

use crate::config::DetectorConfig;
use crate::domain::PriceObservation;
use crate::models::ZoneReport;

/// Runs the full pipeline over one series of chronological observations.
///
/// The heavy lifting happens in [`LevelScanner`]; this type owns input
/// validation and the aggregate/overlap post-processing that turns raw scan
/// records into the report.
pub struct ZoneDetector<'a> {
    series: &'a [PriceObservation],
}

impl<'a> ZoneDetector<'a> {
    pub fn new(series: &'a [PriceObservation]) -> Self {
        Self { series }
    }

    pub fn detect(&self, config: &DetectorConfig) -> Result<ZoneReport> {
        if self.series.is_empty() {
            bail!("Cannot detect zones on an empty price series");
        }
        if let Some(bad) = self.series.iter().position(|obs| obs.last_price <= 0.0) {
            bail!(
                "Observation {} has a non-positive last price ({})",
                bad,
                self.series[bad].last_price
            );
        }

        let raw = LevelScanner::new(self.series, config).scan();

        let support_zones = aggregate::aggregate_supports(&raw.supports);
        let resistance_zones = aggregate::aggregate_resistances(&raw.resistances);
        let highlighted_zones = overlap::match_overlaps(&support_zones, &resistance_zones, config);

        Ok(ZoneReport {
            support_zones,
            resistance_zones,
            highlighted_zones,
        })
    }
}

/// One-shot convenience wrapper around [`ZoneDetector`].
pub fn detect_zones(series: &[PriceObservation], config: &DetectorConfig) -> Result<ZoneReport> {
    ZoneDetector::new(series).detect(config)
}
