//! Rolling, fixed-length sequence of OHLC bars owned by one session.

use serde::Serialize;
use thiserror::Error;

use crate::domain::Bar;

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("a bar series needs at least one bar")]
    Empty,
    #[error("bar {index} is not later than the bar before it")]
    NotChronological { index: usize },
}

/// Never empty. Strictly increasing by `time_ms`.
#[derive(Debug, Clone, Serialize)]
pub struct BarSeries {
    bars: Vec<Bar>,
    capacity: usize,
}

impl BarSeries {
    /// `len` flat bars at `price`, one `interval_ms` apart, the last one opening at `last_open_ms`.
    pub fn seeded(last_open_ms: i64, price: f64, len: usize, interval_ms: i64) -> Self {
        let len = len.max(1);
        let bars = (0..len)
            .map(|i| {
                let steps_back = (len - 1 - i) as i64;
                Bar::flat(last_open_ms - steps_back * interval_ms, price)
            })
            .collect();
        Self { bars, capacity: len }
    }

    /// Wraps existing bars. The series keeps at most `capacity` bars (at least the number given).
    pub fn from_bars(bars: Vec<Bar>, capacity: usize) -> Result<Self, SeriesError> {
        if bars.is_empty() {
            return Err(SeriesError::Empty);
        }
        if let Some(index) = bars
            .windows(2)
            .position(|w| w[1].time_ms <= w[0].time_ms)
        {
            return Err(SeriesError::NotChronological { index: index + 1 });
        }
        let capacity = capacity.max(bars.len());
        Ok(Self { bars, capacity })
    }

    /// Folds a trade into the tail bar. Length and ordering are untouched; opening new
    /// buckets is [`BarSeries::rotate`]'s job.
    pub fn fold_trade(&mut self, price: f64) {
        if let Some(last) = self.bars.last_mut() {
            last.fold(price);
        }
    }

    /// Opens a flat bar at `open_ms` seeded from the previous close, dropping the oldest bar
    /// once the series is full. Returns false (and does nothing) unless `open_ms` is later
    /// than the current tail.
    pub fn rotate(&mut self, open_ms: i64) -> bool {
        let Some(last) = self.bars.last() else {
            return false;
        };
        if open_ms <= last.time_ms {
            return false;
        }
        let next = Bar::flat(open_ms, last.close);
        self.bars.push(next);
        if self.bars.len() > self.capacity {
            self.bars.remove(0);
        }
        true
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn last(&self) -> &Bar {
        // Constructors guarantee at least one bar.
        &self.bars[self.bars.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{bar, flat_bars};

    mod construction {
        use super::*;

        #[test]
        fn seeded_series_ends_at_requested_bucket() {
            let s = BarSeries::seeded(600_000, 2.0, 5, 60_000);
            assert_eq!(s.len(), 5);
            assert_eq!(s.bars()[0].time_ms, 360_000);
            assert_eq!(s.last().time_ms, 600_000);
            assert!(s.bars().iter().all(|b| b.close == 2.0));
        }

        #[test]
        fn rejects_empty_and_unordered() {
            assert_eq!(BarSeries::from_bars(vec![], 4).unwrap_err(), SeriesError::Empty);
            let bars = vec![Bar::flat(10, 1.0), Bar::flat(10, 1.0)];
            assert_eq!(
                BarSeries::from_bars(bars, 4).unwrap_err(),
                SeriesError::NotChronological { index: 1 }
            );
        }

        #[test]
        fn capacity_never_below_initial_len() {
            let s = BarSeries::from_bars(flat_bars(6, 1.0), 2).unwrap();
            assert_eq!(s.capacity(), 6);
        }
    }

    mod folding {
        use super::*;

        #[test]
        fn only_tail_bar_changes() {
            let mut s = BarSeries::from_bars(flat_bars(3, 10.0), 3).unwrap();
            let before = s.bars()[..2].to_vec();
            s.fold_trade(11.0);
            s.fold_trade(9.5);
            assert_eq!(s.len(), 3);
            assert_eq!(&s.bars()[..2], before.as_slice());
            assert_eq!(*s.last(), bar(120_000, 10.0, 11.0, 9.5, 9.5));
        }

        #[test]
        fn tail_stays_well_formed_for_any_price() {
            let mut s = BarSeries::from_bars(flat_bars(1, 1.0), 1).unwrap();
            for p in [0.5, 3.0, 1e-12, 42.0, 1.0] {
                s.fold_trade(p);
                let last = s.last();
                assert!(last.low <= last.open.min(last.close));
                assert!(last.open.max(last.close) <= last.high);
            }
        }
    }

    mod rotation {
        use super::*;

        #[test]
        fn opens_from_previous_close_and_drops_oldest() {
            let mut s = BarSeries::from_bars(flat_bars(3, 10.0), 3).unwrap();
            s.fold_trade(12.0);
            assert!(s.rotate(180_000));
            assert_eq!(s.len(), 3);
            assert_eq!(s.bars()[0].time_ms, 60_000);
            assert_eq!(*s.last(), Bar::flat(180_000, 12.0));
        }

        #[test]
        fn grows_until_capacity() {
            let mut s = BarSeries::from_bars(flat_bars(1, 1.0), 3).unwrap();
            assert!(s.rotate(60_000));
            assert!(s.rotate(120_000));
            assert!(s.rotate(180_000));
            assert_eq!(s.len(), 3);
        }

        #[test]
        fn ignores_same_or_earlier_bucket() {
            let mut s = BarSeries::from_bars(flat_bars(2, 1.0), 2).unwrap();
            assert!(!s.rotate(60_000));
            assert!(!s.rotate(0));
            assert_eq!(s.last().time_ms, 60_000);
        }
    }
}
