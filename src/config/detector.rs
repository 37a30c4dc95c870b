//! Detection thresholds and scan windows

/// Settings for the linear-trend confirmation pass
pub struct TrendSettings {
    // How many observations past the base index the expected-price walk examines
    pub window: usize,
    // Expected move per step, as a fraction of the base price (0.01 = 1% per step)
    pub step_pct: f64,
    // Relative deviation allowed between an actual price and its expected value
    pub tolerance_pct: f64,
    // Minimum number of in-tolerance points for the trend to count as confirmed
    pub min_matches: usize,
}

/// Settings for touch detection and reversal confirmation
pub struct TouchSettings {
    // A price this close (relative) to the candidate level counts as a touch
    pub tolerance_pct: f64,
    // Minimum relative move away from a touch for a bounce/drop to confirm it
    pub reversal_pct: f64,
    // Bounces (or drops) required before a candidate is emitted as a zone
    pub min_confirmations: usize,
}

/// Settings for candidate filtering
pub struct FilterSettings {
    // Candidates below this fraction of the latest price are ancient: skipped outright
    pub ancient_floor_pct: f64,
    // A candidate this close (relative) to an already-accepted level is a duplicate
    pub dedup_tolerance_pct: f64,
}

/// Settings for support/resistance overlap matching
pub struct OverlapSettings {
    // Max relative distance between aggregated support and resistance prices,
    // measured against the support price
    pub tolerance_pct: f64,
}

/// The Master Detector Configuration
pub struct DetectorConfig {
    pub trend: TrendSettings,
    pub touch: TouchSettings,
    pub filter: FilterSettings,
    pub overlap: OverlapSettings,
}

pub const DETECTOR: DetectorConfig = DetectorConfig {
    trend: TrendSettings {
        window: 10,
        step_pct: 0.01,
        tolerance_pct: 0.03,
        min_matches: 3,
    },

    touch: TouchSettings {
        tolerance_pct: 0.05,
        reversal_pct: 0.10,
        min_confirmations: 3,
    },

    filter: FilterSettings {
        ancient_floor_pct: 0.50,
        dedup_tolerance_pct: 0.05,
    },

    overlap: OverlapSettings { tolerance_pct: 0.05 },
};

impl Default for DetectorConfig {
    fn default() -> Self {
        DETECTOR
    }
}
