//! Displayed order book: two sides of price levels.
//!
//! - **Asks**: sorted by price ascending (best ask first)
//! - **Bids**: sorted by price descending (best bid first)
//!
//! Books are regenerated wholesale on every price change, never patched.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceLevel {
    pub price: f64,
    pub size: f64,
}

impl PriceLevel {
    pub const fn new(price: f64, size: f64) -> Self {
        Self { price, size }
    }

    /// Quote value of the whole level.
    pub fn notional(&self) -> f64 {
        self.price * self.size
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderBook {
    pub asks: Vec<PriceLevel>,
    pub bids: Vec<PriceLevel>,
}

impl OrderBook {
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }

    /// Checks the ordering contract the book table relies on.
    pub fn is_well_ordered(&self) -> bool {
        let asks_up = self.asks.windows(2).all(|w| w[0].price < w[1].price);
        let bids_down = self.bids.windows(2).all(|w| w[0].price > w[1].price);
        let not_crossed = match (self.best_ask(), self.best_bid()) {
            (Some(a), Some(b)) => a.price > b.price,
            _ => true,
        };
        asks_up && bids_down && not_crossed
    }
}
