mod perf;
mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, bucket_start, epoch_ms_to_clock, epoch_ms_to_utc, now_timestamp_ms,
};
