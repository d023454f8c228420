use crate::config::{SIM, TradeDirection};

/// New reference price after a trade of `quantity` in `direction`.
///
/// `price * (1 + sign * impact * quantity)`, clamped to `SIM.price_floor` whenever the
/// result is not strictly positive (a large enough sell would otherwise zero the price).
pub fn adjust(current_price: f64, direction: TradeDirection, quantity: f64) -> f64 {
    let delta = direction.sign() * SIM.price_impact_per_unit * quantity;
    let next = current_price * (1.0 + delta);
    if next > 0.0 { next } else { SIM.price_floor }
}
