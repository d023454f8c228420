use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One OHLC bucket.
///
/// Invariant: `low <= min(open, close)` and `high >= max(open, close)`.
/// Only `high`, `low` and `close` move once the bar is open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    /// A bar where every price equals `price`.
    pub fn flat(time_ms: i64, price: f64) -> Self {
        Self {
            time_ms,
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    /// Folds a trade price into the bar. `open` never changes.
    pub fn fold(&mut self, price: f64) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
    }

    pub fn get_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open, self.close),
            CandleType::Bearish => (self.close, self.open),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        let (body_lo, body_hi) = self.body_range();
        self.low <= body_lo && body_hi <= self.high
    }
}
