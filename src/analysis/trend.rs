//! Linear-trend confirmation for zone touches.
//!
//! A touch only counts toward a zone when the observations after it roughly
//! walk a straight 1%-per-step line in the direction the zone implies:
//! declining into a support, inclining into a resistance. This filters out
//! isolated coincidental touches.

use crate::config::DetectorConfig;
use crate::domain::{PriceObservation, ZoneKind};
use crate::utils::maths_utils::relative_diff;

/// Checks whether the points after `base_index` follow the expected trend.
///
/// Walks up to `config.trend.window` observations past the base. For each
/// step the expected price moves `config.trend.step_pct` of the base price
/// further in the trend direction; an observation within
/// `config.trend.tolerance_pct` of its expectation counts as a match. The
/// trend is confirmed once `config.trend.min_matches` points match.
///
/// The final observation of the series never participates in the walk, so a
/// base with fewer than four trailing points can never collect the default
/// three matches. Zones near the end of the series are silently suppressed
/// by this truncation rather than reported as errors.
pub fn trend_confirmed(
    series: &[PriceObservation],
    base_index: usize,
    kind: ZoneKind,
    config: &DetectorConfig,
) -> bool {
    let base_price = series[base_index].last_price;
    // Cap at len - 2: the last observation is excluded from the walk.
    let last = (base_index + config.trend.window).min(series.len().saturating_sub(2));
    let mut matches = 0usize;

    for i in (base_index + 1)..=last {
        let step = (i - base_index) as f64;
        let expected = match kind {
            ZoneKind::Support => base_price - base_price * config.trend.step_pct * step,
            ZoneKind::Resistance => base_price + base_price * config.trend.step_pct * step,
        };

        if relative_diff(series[i].last_price, expected) <= config.trend.tolerance_pct {
            matches += 1;
            if matches >= config.trend.min_matches {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(prices: &[f64]) -> Vec<PriceObservation> {
        prices.iter().map(|&lp| PriceObservation::new(lp)).collect()
    }

    #[test]
    fn test_declining_ladder_confirms_support() {
        // 1% declines from 100; the trailing 95.5 only pads the series so the
        // walk can reach three matchable points.
        let series = series_of(&[100.0, 99.0, 98.0, 97.0, 96.0, 95.5]);
        assert!(
            trend_confirmed(&series, 0, ZoneKind::Support, &DetectorConfig::default()),
            "a clean 1%-per-step decline should confirm a support trend"
        );
    }

    #[test]
    fn test_inclining_ladder_confirms_resistance() {
        let series = series_of(&[100.0, 101.0, 102.0, 103.0, 104.0, 104.5]);
        assert!(trend_confirmed(
            &series,
            0,
            ZoneKind::Resistance,
            &DetectorConfig::default()
        ));
    }

    #[test]
    fn test_direction_is_respected() {
        let series = series_of(&[100.0, 99.0, 98.0, 97.0, 96.0, 95.5]);
        assert!(
            !trend_confirmed(&series, 0, ZoneKind::Resistance, &DetectorConfig::default()),
            "a declining series must not confirm a resistance trend"
        );
    }

    #[test]
    fn test_three_trailing_points_never_confirm() {
        // All three trailing points sit exactly on the expected line, but the
        // final observation is excluded from the walk, so only two can match.
        let series = series_of(&[100.0, 99.0, 98.0, 97.0]);
        assert!(
            !trend_confirmed(&series, 0, ZoneKind::Support, &DetectorConfig::default()),
            "fewer than four trailing points can never reach three matches"
        );
    }

    #[test]
    fn test_four_trailing_points_can_confirm() {
        let series = series_of(&[100.0, 99.0, 98.0, 97.0, 96.0]);
        assert!(trend_confirmed(
            &series,
            0,
            ZoneKind::Support,
            &DetectorConfig::default()
        ));
    }

    #[test]
    fn test_flat_series_diverges_from_the_line() {
        // A flat price stays within 3% of the declining line for two steps
        // (1.01% then 2.04%) and drifts out at the third (3.09%).
        let series = series_of(&[100.0; 8]);
        assert!(!trend_confirmed(
            &series,
            0,
            ZoneKind::Support,
            &DetectorConfig::default()
        ));
    }

    #[test]
    fn test_matches_can_be_non_consecutive() {
        // Steps 1 and 2 are far off the line; steps 3, 4 and 5 land on it.
        let series = series_of(&[100.0, 90.0, 89.0, 97.0, 96.0, 95.0, 94.5]);
        assert!(trend_confirmed(
            &series,
            0,
            ZoneKind::Support,
            &DetectorConfig::default()
        ));
    }

    #[test]
    fn test_base_at_series_end_fails() {
        let series = series_of(&[100.0, 99.0, 98.0]);
        assert!(!trend_confirmed(
            &series,
            2,
            ZoneKind::Support,
            &DetectorConfig::default()
        ));
    }
}
