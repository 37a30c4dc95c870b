//! The level-scanning pass.
//!
//! Every observation is a candidate level. A candidate becomes a zone when
//! the series touches it at least three times and each counted touch is
//! followed by a 10%+ reversal plus a confirming trend (see
//! [`crate::analysis::trend`]). Supports and resistances are scanned
//! independently, so the same price can appear on both sides.
//!
//! The pass is cubic in the worst case: candidate loop x touch/reversal scan
//! x trend or history walk. That holds for the bounded historical series this
//! crate targets (hundreds to low thousands of observations); it is not meant
//! for tick streams.

use crate::analysis::history::acted_as_resistance;
use crate::analysis::trend::trend_confirmed;
use crate::config::{DetectorConfig, debug};
use crate::domain::{PriceObservation, ZoneKind};
use crate::models::{RawResistance, RawSupport};
use crate::utils::maths_utils::{fall_pct, relative_diff, rise_pct};

/// Raw zone records from one scan pass, before aggregation.
#[derive(Debug, Clone, Default)]
pub struct RawZones {
    pub supports: Vec<RawSupport>,
    pub resistances: Vec<RawResistance>,
}

/// Scans every base index of a series for support and resistance levels.
pub struct LevelScanner<'a> {
    series: &'a [PriceObservation],
    config: &'a DetectorConfig,
}

impl<'a> LevelScanner<'a> {
    pub fn new(series: &'a [PriceObservation], config: &'a DetectorConfig) -> Self {
        Self { series, config }
    }

    /// Runs the full pass. Output order follows base-index order; only
    /// accepted zones enter the proximity-dedup comparisons, so a rejected
    /// candidate never blocks a nearby later one.
    pub fn scan(&self) -> RawZones {
        let mut zones = RawZones::default();
        let Some(latest) = self.series.last() else {
            return zones;
        };
        // Levels far below the latest price are stale context, not zones
        // worth reporting against the current price regime.
        let ancient_floor = latest.last_price * self.config.filter.ancient_floor_pct;

        for base in 0..self.series.len() {
            let candidate = self.series[base].last_price;
            if candidate < ancient_floor {
                if debug::PRINT_SCANNER_CANDIDATES {
                    log::debug!(
                        "base {base}: candidate {candidate} below ancient floor {ancient_floor:.4}, skipped"
                    );
                }
                continue;
            }
            self.scan_support(base, candidate, &mut zones.supports);
            self.scan_resistance(base, candidate, &mut zones.resistances);
        }

        log::debug!(
            "scan finished: {} support, {} resistance raw zones",
            zones.supports.len(),
            zones.resistances.len()
        );
        zones
    }

    fn scan_support(&self, base: usize, candidate: f64, accepted: &mut Vec<RawSupport>) {
        let near_accepted = accepted
            .iter()
            .any(|zone| relative_diff(candidate, zone.price) <= self.config.filter.dedup_tolerance_pct);
        if near_accepted {
            if debug::PRINT_SCANNER_CANDIDATES {
                log::debug!("base {base}: support candidate {candidate} folds into an accepted level");
            }
            return;
        }

        let mut bounce_count = 0usize;
        // The base observation is its own first touch.
        for touch in base..self.series.len() {
            if relative_diff(self.series[touch].last_price, candidate) > self.config.touch.tolerance_pct {
                continue;
            }
            let touch_price = self.series[touch].last_price;
            for later in (touch + 1)..self.series.len() {
                if rise_pct(touch_price, self.series[later].last_price) < self.config.touch.reversal_pct {
                    continue;
                }
                // The first qualifying rebound settles this touch either way.
                let confirmed = trend_confirmed(self.series, touch, ZoneKind::Support, self.config);
                if confirmed {
                    bounce_count += 1;
                }
                if debug::PRINT_TOUCH_EVENTS {
                    log::debug!(
                        "support {candidate}: touch at {touch}, rebound at {later}, trend confirmed: {confirmed}"
                    );
                }
                break;
            }
        }

        if bounce_count >= self.config.touch.min_confirmations {
            let confirmed_resistance = acted_as_resistance(self.series, base, candidate, self.config);
            accepted.push(RawSupport {
                price: candidate,
                bounce_count,
                confirmed_resistance,
            });
        }
    }

    fn scan_resistance(&self, base: usize, candidate: f64, accepted: &mut Vec<RawResistance>) {
        let near_accepted = accepted
            .iter()
            .any(|zone| relative_diff(candidate, zone.price) <= self.config.filter.dedup_tolerance_pct);
        if near_accepted {
            if debug::PRINT_SCANNER_CANDIDATES {
                log::debug!("base {base}: resistance candidate {candidate} folds into an accepted level");
            }
            return;
        }

        let mut drop_count = 0usize;
        for touch in base..self.series.len() {
            if relative_diff(self.series[touch].last_price, candidate) > self.config.touch.tolerance_pct {
                continue;
            }
            let touch_price = self.series[touch].last_price;
            for later in (touch + 1)..self.series.len() {
                if fall_pct(touch_price, self.series[later].last_price) < self.config.touch.reversal_pct {
                    continue;
                }
                let confirmed = trend_confirmed(self.series, touch, ZoneKind::Resistance, self.config);
                if confirmed {
                    drop_count += 1;
                }
                if debug::PRINT_TOUCH_EVENTS {
                    log::debug!(
                        "resistance {candidate}: touch at {touch}, breakdown at {later}, trend confirmed: {confirmed}"
                    );
                }
                break;
            }
        }

        if drop_count >= self.config.touch.min_confirmations {
            accepted.push(RawResistance {
                price: candidate,
                drop_count,
            });
        }
    }
}
