// src/test_util.rs

use crate::domain::Bar;

/// Asserts that two `f64` values are approximately equal using a
/// relative epsilon of `16 * f64::EPSILON`.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e): (f64, f64) = ($actual, $expected);
        assert!(
            (a - e).abs() <= e.abs().max(f64::MIN_POSITIVE) * 16.0 * f64::EPSILON,
            "assert_approx failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

pub(crate) use assert_approx;

/// Bar at `time_ms` with the given OHLC.
pub(crate) fn bar(time_ms: i64, open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar {
        time_ms,
        open,
        high,
        low,
        close,
    }
}

/// `count` flat bars one minute apart starting at zero.
pub(crate) fn flat_bars(count: usize, price: f64) -> Vec<Bar> {
    (0..count)
        .map(|i| Bar::flat(i as i64 * 60_000, price))
        .collect()
}
