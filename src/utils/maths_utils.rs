/// Format a price to the canonical two-decimal display string.
///
/// Canonical strings are the aggregation keys for zone merging: nearby raw
/// prices that round to the same cents collapse into one zone, while prices
/// a cent apart stay distinct.
pub fn canonical_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Numeric value of a canonical price: the display string re-parsed, so the
/// number always agrees with what `canonical_price` shows. The fallback arm is
/// unreachable for strings we produced ourselves.
pub fn canonical_value(price: f64) -> f64 {
    canonical_price(price).parse().unwrap_or(price)
}

/// Relative difference between `value` and `reference`, as a fraction of
/// `reference`. The denominator choice matters for tolerance checks and is
/// always the reference level, never the probe value.
pub fn relative_diff(value: f64, reference: f64) -> f64 {
    (value - reference).abs() / reference
}

/// Fractional rise from `from` to `to` (positive when price went up).
pub fn rise_pct(from: f64, to: f64) -> f64 {
    (to - from) / from
}

/// Fractional fall from `from` to `to` (positive when price went down).
pub fn fall_pct(from: f64, to: f64) -> f64 {
    (from - to) / from
}
