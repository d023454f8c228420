/// Runs `$block`, warning if it took longer than the threshold (microseconds).
/// Timing is skipped entirely unless `DF.log_performance` is on.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $block:block) => {
        $crate::trace_time!($name, $crate::config::DF.slow_frame_micros, $block)
    };
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        if $crate::config::DF.log_performance {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            let micros = start.elapsed().as_micros();
            if micros > $threshold_micros {
                log::warn!(
                    "Slow {}: {:.3}ms (limit {:.3}ms, {})",
                    $name,
                    micros as f64 / 1000.0,
                    $threshold_micros as f64 / 1000.0,
                    if cfg!(debug_assertions) { "debug" } else { "release" }
                );
            }
            result
        } else {
            $block
        }
    }};
}
