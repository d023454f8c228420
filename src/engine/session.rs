//! Per-session market state. Price, balances, candles and the displayed book change together
//! or not at all.

use std::collections::VecDeque;

use serde::Serialize;
use thiserror::Error;

use crate::{
    config::{DF, MarketConfig, TradeDirection},
    domain::{BarSeries, OrderBook},
    engine::{adjust, synthesize},
    utils::bucket_start,
};

#[derive(Debug, Error, PartialEq)]
pub enum TradeError {
    #[error("'{0}' is not a valid quantity")]
    NotANumber(String),
    #[error("quantity must be greater than zero")]
    NonPositiveQuantity,
    #[error("insufficient {asset} balance: need {needed}, have {available}")]
    InsufficientBalance {
        asset: &'static str,
        needed: f64,
        available: f64,
    },
}

/// Consumed immediately by [`SessionState::execute`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeIntent {
    pub direction: TradeDirection,
    pub quantity: f64,
}

impl TradeIntent {
    pub fn new(direction: TradeDirection, quantity: f64) -> Result<Self, TradeError> {
        // `!(q > 0)` also rejects NaN
        if !(quantity > 0.0) || !quantity.is_finite() {
            return Err(TradeError::NonPositiveQuantity);
        }
        Ok(Self {
            direction,
            quantity,
        })
    }

    /// Parses raw form input.
    pub fn parse(direction: TradeDirection, input: &str) -> Result<Self, TradeError> {
        let trimmed = input.trim();
        let quantity: f64 = trimmed
            .parse()
            .map_err(|_| TradeError::NotANumber(trimmed.to_string()))?;
        if quantity.is_nan() {
            return Err(TradeError::NotANumber(trimmed.to_string()));
        }
        Self::new(direction, quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Balances {
    /// Traded token (e.g. MYT).
    pub base: f64,
    /// Settlement token (e.g. USDC).
    pub quote: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    pub time_ms: i64,
    pub direction: TradeDirection,
    pub quantity: f64,
    /// Reference price the trade executed at.
    pub price: f64,
    /// Quote paid (buy) or received (sell).
    pub notional: f64,
    /// Reference price after the trade's impact.
    pub new_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub base_symbol: &'static str,
    pub quote_symbol: &'static str,
    price: f64,
    balances: Balances,
    series: BarSeries,
    book: OrderBook,
    /// Newest first.
    fills: VecDeque<Fill>,
    #[serde(skip)]
    bar_interval_ms: i64,
    #[serde(skip)]
    max_fills: usize,
}

impl SessionState {
    pub fn new(market: &MarketConfig, now_ms: i64) -> Self {
        let interval_ms = market.bar_interval_ms();
        let price = market.initial_price;
        Self {
            base_symbol: market.base_symbol,
            quote_symbol: market.quote_symbol,
            price,
            balances: Balances {
                base: market.initial_base,
                quote: market.initial_quote,
            },
            series: BarSeries::seeded(
                bucket_start(now_ms, interval_ms),
                price,
                market.series_len,
                interval_ms,
            ),
            book: synthesize(price),
            fills: VecDeque::new(),
            bar_interval_ms: interval_ms,
            max_fills: market.max_fills,
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn balances(&self) -> Balances {
        self.balances
    }

    pub fn series(&self) -> &BarSeries {
        &self.series
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn fills(&self) -> impl Iterator<Item = &Fill> {
        self.fills.iter()
    }

    pub fn bar_interval_ms(&self) -> i64 {
        self.bar_interval_ms
    }

    /// Opens a new candle if `now_ms` has moved into a later bucket. Buckets skipped while
    /// nobody traded are filled with flat bars so every chart slot spans one interval.
    pub fn roll_to(&mut self, now_ms: i64) -> bool {
        let step = self.bar_interval_ms;
        let target = bucket_start(now_ms, step);
        let last = self.series.last().time_ms;
        if target <= last {
            return false;
        }
        // Only the newest `capacity` buckets survive anyway
        let window = self.series.capacity() as i64 * step;
        let mut open = (last + step).max(target - window + step);
        while open <= target {
            self.series.rotate(open);
            open += step;
        }
        true
    }

    /// Runs one trade against the session.
    ///
    /// Every check happens before any field is written, so a rejected trade leaves the
    /// session exactly as it was.
    pub fn execute(&mut self, intent: TradeIntent, now_ms: i64) -> Result<Fill, TradeError> {
        let TradeIntent {
            direction,
            quantity,
        } = intent;
        let notional = self.price * quantity;

        let balances = match direction {
            TradeDirection::Buy => {
                if notional > self.balances.quote {
                    return Err(self.reject(TradeError::InsufficientBalance {
                        asset: self.quote_symbol,
                        needed: notional,
                        available: self.balances.quote,
                    }));
                }
                Balances {
                    base: self.balances.base + quantity,
                    quote: self.balances.quote - notional,
                }
            }
            TradeDirection::Sell => {
                if quantity > self.balances.base {
                    return Err(self.reject(TradeError::InsufficientBalance {
                        asset: self.base_symbol,
                        needed: quantity,
                        available: self.balances.base,
                    }));
                }
                Balances {
                    base: self.balances.base - quantity,
                    quote: self.balances.quote + notional,
                }
            }
        };

        let new_price = adjust(self.price, direction, quantity);
        let fill = Fill {
            time_ms: now_ms,
            direction,
            quantity,
            price: self.price,
            notional,
            new_price,
        };

        // --- COMMIT ---
        self.balances = balances;
        self.roll_to(now_ms);
        self.series.fold_trade(new_price);
        self.book = synthesize(new_price);
        self.price = new_price;
        self.fills.push_front(fill.clone());
        self.fills.truncate(self.max_fills);

        if DF.log_trades {
            log::info!(
                "{} {} {} @ {:e} -> {:e} | {} {} / {} {}",
                direction,
                quantity,
                self.base_symbol,
                fill.price,
                new_price,
                self.balances.base,
                self.base_symbol,
                self.balances.quote,
                self.quote_symbol
            );
        }
        Ok(fill)
    }

    fn reject(&self, err: TradeError) -> TradeError {
        if DF.log_trades {
            log::warn!("Trade rejected: {}", err);
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEMO;
    use crate::domain::Bar;
    use crate::test_util::assert_approx;

    const T0: i64 = 1_700_000_000_000;

    fn session() -> SessionState {
        SessionState::new(&DEMO.market, T0)
    }

    mod intent {
        use super::*;

        #[test]
        fn parses_trimmed_numbers() {
            let i = TradeIntent::parse(TradeDirection::Buy, " 10 ").unwrap();
            assert_eq!(i.quantity, 10.0);
        }

        #[test]
        fn rejects_garbage_zero_negative_and_nan() {
            assert_eq!(
                TradeIntent::parse(TradeDirection::Buy, "ten"),
                Err(TradeError::NotANumber("ten".into()))
            );
            assert_eq!(
                TradeIntent::parse(TradeDirection::Buy, ""),
                Err(TradeError::NotANumber("".into()))
            );
            assert_eq!(
                TradeIntent::parse(TradeDirection::Sell, "0"),
                Err(TradeError::NonPositiveQuantity)
            );
            assert_eq!(
                TradeIntent::parse(TradeDirection::Sell, "-3"),
                Err(TradeError::NonPositiveQuantity)
            );
            assert!(TradeIntent::parse(TradeDirection::Buy, "NaN").is_err());
            assert!(TradeIntent::new(TradeDirection::Buy, f64::INFINITY).is_err());
        }
    }

    mod initial_state {
        use super::*;

        #[test]
        fn starts_from_demo_market() {
            let s = session();
            assert_eq!(s.price(), 1e-9);
            assert_eq!(s.balances(), Balances { base: 0.0, quote: 1000.0 });
            assert_eq!(s.series().len(), DEMO.market.series_len);
            assert_eq!(s.book(), &synthesize(1e-9));
            assert_eq!(s.fills().count(), 0);
        }

        #[test]
        fn last_bar_is_current_bucket() {
            let s = session();
            let interval = DEMO.market.bar_interval_ms();
            assert_eq!(s.series().last().time_ms, bucket_start(T0, interval));
        }
    }

    mod buying {
        use super::*;

        #[test]
        fn buy_ten_at_one_nano_debits_cost_and_credits_tokens() {
            let mut s = session();
            let fill = s
                .execute(TradeIntent::new(TradeDirection::Buy, 10.0).unwrap(), T0)
                .unwrap();
            assert_approx!(fill.notional, 1e-8);
            assert_approx!(s.balances().quote, 999.999_999_99);
            assert_eq!(s.balances().base, 10.0);
        }

        #[test]
        fn price_candle_and_book_move_together() {
            let mut s = session();
            let fill = s
                .execute(TradeIntent::new(TradeDirection::Buy, 100.0).unwrap(), T0)
                .unwrap();
            assert_approx!(fill.new_price, 1.01e-9);
            assert_eq!(s.price(), fill.new_price);
            assert_eq!(s.series().last().close, fill.new_price);
            assert_eq!(s.series().last().high, fill.new_price);
            assert_eq!(s.book(), &synthesize(fill.new_price));
        }

        #[test]
        fn over_budget_buy_changes_nothing() {
            let mut s = session();
            let before = s.clone();
            // 1e9 * 1e-9 = 1 USDC per 1e9 MYT; 2e12 MYT costs 2000 USDC.
            let err = s
                .execute(TradeIntent::new(TradeDirection::Buy, 2e12).unwrap(), T0)
                .unwrap_err();
            assert!(matches!(
                err,
                TradeError::InsufficientBalance { asset: "USDC", .. }
            ));
            assert_eq!(s.price(), before.price());
            assert_eq!(s.balances(), before.balances());
            assert_eq!(s.series().bars(), before.series().bars());
            assert_eq!(s.fills().count(), 0);
        }
    }

    mod selling {
        use super::*;

        #[test]
        fn cannot_sell_more_than_held() {
            let mut s = session();
            let err = s
                .execute(TradeIntent::new(TradeDirection::Sell, 1.0).unwrap(), T0)
                .unwrap_err();
            assert_eq!(
                err,
                TradeError::InsufficientBalance {
                    asset: "MYT",
                    needed: 1.0,
                    available: 0.0
                }
            );
        }

        #[test]
        fn round_trip_credits_proceeds_at_new_price() {
            let mut s = session();
            s.execute(TradeIntent::new(TradeDirection::Buy, 100.0).unwrap(), T0)
                .unwrap();
            let fill = s
                .execute(TradeIntent::new(TradeDirection::Sell, 100.0).unwrap(), T0)
                .unwrap();
            assert_approx!(fill.price, 1.01e-9);
            assert_eq!(s.balances().base, 0.0);
            assert!(s.price() < fill.price);
            assert_eq!(s.fills().next(), Some(&fill));
        }
    }

    mod buckets {
        use super::*;

        #[test]
        fn trade_in_later_bucket_opens_new_candle() {
            let mut s = session();
            let interval = s.bar_interval_ms();
            let first_time = s.series().bars()[0].time_ms;
            let later = T0 + interval;
            s.execute(TradeIntent::new(TradeDirection::Buy, 100.0).unwrap(), later)
                .unwrap();
            let last = s.series().last();
            assert_eq!(last.time_ms, bucket_start(later, interval));
            assert_eq!(last.open, 1e-9);
            assert_approx!(last.close, 1.01e-9);
            assert_eq!(s.series().len(), DEMO.market.series_len);
            assert!(s.series().bars()[0].time_ms > first_time);
        }

        #[test]
        fn idle_gap_is_filled_with_flat_bars() {
            let mut s = session();
            s.execute(TradeIntent::new(TradeDirection::Buy, 100.0).unwrap(), T0)
                .unwrap();
            let interval = s.bar_interval_ms();
            let close = s.price();
            assert!(s.roll_to(T0 + 3 * interval));

            let bars = s.series().bars();
            assert_eq!(bars.len(), DEMO.market.series_len);
            assert!(bars.windows(2).all(|w| w[1].time_ms - w[0].time_ms == interval));
            assert!(bars[bars.len() - 3..].iter().all(|b| *b == Bar::flat(b.time_ms, close)));
        }

        #[test]
        fn long_idle_replaces_whole_series() {
            let mut s = session();
            let interval = s.bar_interval_ms();
            let far = T0 + 1_000 * interval;
            assert!(s.roll_to(far));
            assert_eq!(s.series().len(), DEMO.market.series_len);
            assert_eq!(s.series().last().time_ms, bucket_start(far, interval));
            assert_eq!(
                s.series().bars()[0].time_ms,
                bucket_start(far, interval) - (DEMO.market.series_len as i64 - 1) * interval
            );
        }

        #[test]
        fn roll_is_noop_within_bucket() {
            let mut s = session();
            assert!(!s.roll_to(T0));
            assert!(s.roll_to(T0 + s.bar_interval_ms()));
        }
    }

    #[test]
    fn fill_history_is_bounded() {
        let mut s = session();
        for _ in 0..(DEMO.market.max_fills + 5) {
            s.execute(TradeIntent::new(TradeDirection::Buy, 1.0).unwrap(), T0)
                .unwrap();
        }
        assert_eq!(s.fills().count(), DEMO.market.max_fills);
    }
}
