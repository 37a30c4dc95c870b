use serde::{Deserialize, Serialize};
use std::fmt;

/// One historical data point. Only the last price participates in detection;
/// the timestamp rides along for display and tooling output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Last traded price for the period. Must be positive.
    #[serde(rename = "lp")]
    pub last_price: f64,
    /// Millisecond epoch timestamp of the observation, when known.
    #[serde(rename = "ts", default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<i64>,
}

impl PriceObservation {
    pub fn new(last_price: f64) -> Self {
        Self {
            last_price,
            timestamp_ms: None,
        }
    }

    pub fn at(timestamp_ms: i64, last_price: f64) -> Self {
        Self {
            last_price,
            timestamp_ms: Some(timestamp_ms),
        }
    }
}

/// Which side of the price a level defends.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum ZoneKind {
    Support,
    Resistance,
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZoneKind::Support => write!(f, "support"),
            ZoneKind::Resistance => write!(f, "resistance"),
        }
    }
}
