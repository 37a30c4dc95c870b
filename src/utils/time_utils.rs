use chrono::{TimeZone, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Format a millisecond epoch timestamp for display. Invalid timestamps
/// render as an empty string rather than failing a report line.
pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    if let chrono::LocalResult::Single(datetime) = Utc.timestamp_millis_opt(epoch_ms) {
        datetime.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
    } else {
        String::new()
    }
}
