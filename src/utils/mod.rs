// Small numeric and display helpers shared across the crate
pub mod maths_utils;
pub mod time_utils;

// Re-export commonly used items
pub use maths_utils::{canonical_price, canonical_value, fall_pct, relative_diff, rise_pct};
pub use time_utils::{TimeUtils, epoch_ms_to_utc};
