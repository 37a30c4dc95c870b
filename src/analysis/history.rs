//! Prior-resistance detection for candidate support levels.

use crate::config::DetectorConfig;
use crate::domain::PriceObservation;
use crate::utils::maths_utils::{fall_pct, relative_diff};

/// Returns true when `price` already behaved as resistance somewhere before
/// `before_index`: an earlier observation touched the level (within the touch
/// tolerance of `price`) and the series then fell at least the reversal
/// fraction below that touch before reaching `before_index`.
///
/// Touches at or after `before_index` are never considered, and neither are
/// falls that happen at the boundary index itself.
pub fn acted_as_resistance(
    series: &[PriceObservation],
    before_index: usize,
    price: f64,
    config: &DetectorConfig,
) -> bool {
    for touch in 0..before_index {
        if relative_diff(series[touch].last_price, price) > config.touch.tolerance_pct {
            continue;
        }
        let touch_price = series[touch].last_price;
        for later in (touch + 1)..before_index {
            if fall_pct(touch_price, series[later].last_price) >= config.touch.reversal_pct {
                return true;
            }
        }
    }

    false
}
