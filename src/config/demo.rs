//! Demo-series configuration knobs.
//!
//! The demo series is deterministic so `--demo` runs and the generated
//! observation file are stable across machines and reruns.

use crate::utils::TimeUtils;

/// The Master Demo Configuration
pub struct DemoConfig {
    /// Price scale the planted levels are built around
    pub base_price: f64,
    /// Spacing between demo observations
    pub interval_ms: i64,
    /// Timestamp of the first demo observation (2024-01-01 UTC)
    pub first_timestamp_ms: i64,
    /// Default path the generator binary writes to
    pub output_path: &'static str,
}

pub const DEMO: DemoConfig = DemoConfig {
    base_price: 100.0,
    interval_ms: TimeUtils::MS_IN_D,
    first_timestamp_ms: 1_704_067_200_000,
    output_path: "demo_series.json",
};
