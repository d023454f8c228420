use crate::{
    config::SIM,
    domain::{OrderBook, PriceLevel},
};

/// Fixed ladder of display levels around `reference_price`.
///
/// Pure: same input, same book. Sizes are the static `SIM.nominal_level_size`, not a
/// liquidity model.
pub fn synthesize(reference_price: f64) -> OrderBook {
    let level = |mult: &f64| PriceLevel::new(reference_price * mult, SIM.nominal_level_size);
    OrderBook {
        asks: SIM.ask_multipliers.iter().map(level).collect(),
        bids: SIM.bid_multipliers.iter().map(level).collect(),
    }
}
