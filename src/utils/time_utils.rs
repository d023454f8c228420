use chrono::DateTime;
use web_time::{SystemTime, UNIX_EPOCH};

/// `Instant` that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const CLOCK_FORMAT: &str = "%H:%M";
    pub const CLOCK_FORMAT_SECS: &str = "%H:%M:%S";
}

pub fn now_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Start of the `interval_ms` bucket containing `ts_ms` (UTC grid aligned).
pub fn bucket_start(ts_ms: i64, interval_ms: i64) -> i64 {
    if interval_ms <= 0 {
        return ts_ms;
    }
    ts_ms.div_euclid(interval_ms) * interval_ms
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    format_epoch_ms(epoch_ms, TimeUtils::STANDARD_TIME_FORMAT)
}

/// "HH:MM" for minute buckets and above, "HH:MM:SS" for sub-minute ones.
pub fn epoch_ms_to_clock(epoch_ms: i64, interval_ms: i64) -> String {
    let fmt = if interval_ms < TimeUtils::MS_IN_MIN {
        TimeUtils::CLOCK_FORMAT_SECS
    } else {
        TimeUtils::CLOCK_FORMAT
    };
    format_epoch_ms(epoch_ms, fmt)
}

fn format_epoch_ms(epoch_ms: i64, fmt: &str) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(fmt).to_string(),
        None => "--".to_string(),
    }
}
