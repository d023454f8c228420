//! Simulation constants (Immutable Blueprints)

/// Knobs for the synthetic price / order book model.
pub struct SimConfig {
    /// Fractional price move per unit traded (signed by direction).
    pub price_impact_per_unit: f64,
    /// Smallest price the simulator will ever report.
    pub price_floor: f64,
    /// Ask levels as multiples of the reference price. Must be ascending.
    pub ask_multipliers: &'static [f64],
    /// Bid levels as multiples of the reference price. Must be descending.
    pub bid_multipliers: &'static [f64],
    /// Static size shown at every synthetic level.
    pub nominal_level_size: f64,
}

pub const SIM: SimConfig = SimConfig {
    price_impact_per_unit: 0.0001,
    price_floor: 1e-12,
    ask_multipliers: &[1.1, 1.2, 1.3],
    bid_multipliers: &[0.9, 0.8, 0.7],
    nominal_level_size: 1_000.0,
};
