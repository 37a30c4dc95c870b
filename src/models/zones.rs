//! Zone records emitted by the detector.
//!
//! Raw records carry the unrounded base price and exist only between the scan
//! and aggregation passes. Aggregated records are the public output: keyed by
//! the canonical two-decimal price string, immutable once the report is built.

use serde::Serialize;

use crate::domain::ZoneKind;

/// Type tag carried by every overlap record.
pub const OVERLAP_KIND: &str = "support-resistance overlap";

/// Scanner emission for one accepted support base index (pre-aggregation).
#[derive(Debug, Clone, PartialEq)]
pub struct RawSupport {
    pub price: f64,
    pub bounce_count: usize,
    pub confirmed_resistance: bool,
}

/// Scanner emission for one accepted resistance base index (pre-aggregation).
#[derive(Debug, Clone, PartialEq)]
pub struct RawResistance {
    pub price: f64,
    pub drop_count: usize,
}

/// A support level: declines reversed upward here at least three times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportZone {
    /// Canonical two-decimal price string; display value and aggregation key.
    pub zone: String,
    pub bounce_count: usize,
    /// True if the level also behaved as resistance earlier in the series.
    pub confirmed_resistance: bool,
    /// Numeric value of `zone`, kept for ordering and overlap matching.
    #[serde(skip)]
    pub price: f64,
}

/// A resistance level: advances reversed downward here at least three times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResistanceZone {
    /// Canonical two-decimal price string; display value and aggregation key.
    pub zone: String,
    pub drop_count: usize,
    /// Numeric value of `zone`, kept for ordering and overlap matching.
    #[serde(skip)]
    pub price: f64,
}

/// A level that acted as both support and resistance, keyed by the support's
/// canonical price. Counts accumulate once per matching support/resistance pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapZone {
    pub zone: String,
    pub support_bounce_count: usize,
    pub resistance_drop_count: usize,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip)]
    pub price: f64,
}

/// Full detector output. All three collections are sorted ascending by
/// numeric price and owned by the caller; the detector keeps no state.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneReport {
    pub support_zones: Vec<SupportZone>,
    pub resistance_zones: Vec<ResistanceZone>,
    pub highlighted_zones: Vec<OverlapZone>,
}

impl ZoneReport {
    pub fn is_empty(&self) -> bool {
        self.support_zones.is_empty()
            && self.resistance_zones.is_empty()
            && self.highlighted_zones.is_empty()
    }

    /// Number of aggregated zones on one side.
    pub fn count(&self, kind: ZoneKind) -> usize {
        match kind {
            ZoneKind::Support => self.support_zones.len(),
            ZoneKind::Resistance => self.resistance_zones.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_zone_json_shape() {
        let zone = SupportZone {
            zone: "100.00".to_string(),
            bounce_count: 3,
            confirmed_resistance: false,
            price: 100.0,
        };
        let json = serde_json::to_string(&zone).unwrap();
        assert_eq!(
            json,
            r#"{"zone":"100.00","bounceCount":3,"confirmedResistance":false}"#,
            "raw price must stay internal and field names must stay camelCase"
        );
    }

    #[test]
    fn test_overlap_zone_json_shape() {
        let zone = OverlapZone {
            zone: "100.00".to_string(),
            support_bounce_count: 3,
            resistance_drop_count: 2,
            kind: OVERLAP_KIND,
            price: 100.0,
        };
        let json = serde_json::to_string(&zone).unwrap();
        assert_eq!(
            json,
            r#"{"zone":"100.00","supportBounceCount":3,"resistanceDropCount":2,"type":"support-resistance overlap"}"#
        );
    }

    #[test]
    fn test_report_counts() {
        let report = ZoneReport {
            support_zones: vec![SupportZone {
                zone: "10.00".to_string(),
                bounce_count: 3,
                confirmed_resistance: true,
                price: 10.0,
            }],
            resistance_zones: Vec::new(),
            highlighted_zones: Vec::new(),
        };
        assert!(!report.is_empty());
        assert_eq!(report.count(ZoneKind::Support), 1);
        assert_eq!(report.count(ZoneKind::Resistance), 0);
    }

    #[test]
    fn test_report_serializes_with_camel_case_collections() {
        let json = serde_json::to_string(&ZoneReport::default()).unwrap();
        assert_eq!(
            json,
            r#"{"supportZones":[],"resistanceZones":[],"highlightedZones":[]}"#
        );
    }
}
