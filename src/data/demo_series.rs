//! Deterministic demo observations with planted zone structure.
//!
//! The series walks three regimes, scaled by `DEMO.base_price`:
//!
//! 1. A short ancient era near 40% of the base price. These prints end up
//!    below half of the closing price, so the detector ignores them.
//! 2. A high regime whose ceiling at 2x the base price holds three times,
//!    each touch followed by an 11% breakdown with the inclining trend the
//!    confirmation step wants. This becomes the resistance zone.
//! 3. A low regime whose floor at the base price holds three times with 12%
//!    rebounds and declining trend tails. This becomes the support zone.
//!
//! The intermediate prints are placed outside the 5% touch bands of the two
//! planted levels, so the detector reports exactly one zone per side.

use crate::config::DEMO;
use crate::domain::PriceObservation;

const ANCIENT_ERA: [f64; 4] = [0.40, 0.42, 0.41, 0.44];
const CEILING_CYCLE: [f64; 6] = [2.0, 1.78, 1.79, 2.11, 2.13, 2.155];
const CEILING_CLOSE: f64 = 2.16;
const FLOOR_CYCLE: [f64; 6] = [1.0, 1.12, 1.11, 0.945, 0.935, 0.925];
const FLOOR_CLOSE: f64 = 0.92;

/// Builds the demo series with one observation per `DEMO.interval_ms`.
pub fn demo_series() -> Vec<PriceObservation> {
    let mut multipliers: Vec<f64> = Vec::new();

    multipliers.extend_from_slice(&ANCIENT_ERA);
    for _ in 0..3 {
        multipliers.extend_from_slice(&CEILING_CYCLE);
    }
    multipliers.push(CEILING_CLOSE);
    for _ in 0..3 {
        multipliers.extend_from_slice(&FLOOR_CYCLE);
    }
    multipliers.push(FLOOR_CLOSE);

    multipliers
        .iter()
        .enumerate()
        .map(|(i, multiplier)| {
            PriceObservation::at(
                DEMO.first_timestamp_ms + i as i64 * DEMO.interval_ms,
                multiplier * DEMO.base_price,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::detect_zones;
    use crate::config::DetectorConfig;

    #[test]
    fn test_demo_series_shape() {
        let series = demo_series();
        assert_eq!(series.len(), 42);
        assert_eq!(series[0].timestamp_ms, Some(DEMO.first_timestamp_ms));
        assert_eq!(
            series[1].timestamp_ms,
            Some(DEMO.first_timestamp_ms + DEMO.interval_ms)
        );
        assert!(series.iter().all(|obs| obs.last_price > 0.0));
    }

    #[test]
    fn test_demo_series_contains_the_planted_zones() {
        let series = demo_series();
        let report =
            detect_zones(&series, &DetectorConfig::default()).expect("demo series is valid input");

        assert_eq!(report.support_zones.len(), 1, "one planted floor");
        assert_eq!(report.support_zones[0].zone, "100.00");
        assert_eq!(report.support_zones[0].bounce_count, 3);
        assert!(!report.support_zones[0].confirmed_resistance);

        assert_eq!(report.resistance_zones.len(), 1, "one planted ceiling");
        assert_eq!(report.resistance_zones[0].zone, "200.00");
        assert_eq!(report.resistance_zones[0].drop_count, 3);

        assert!(
            report.highlighted_zones.is_empty(),
            "the planted levels are 50% apart and never overlap"
        );
    }
}
