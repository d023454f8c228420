use std::time::Duration;

pub struct MarketConfig {
    pub base_symbol: &'static str,
    pub quote_symbol: &'static str,
    pub initial_price: f64,
    pub initial_base: f64,
    pub initial_quote: f64,
    pub bar_interval: Duration,
    pub series_len: usize,
    pub max_fills: usize,
}

impl MarketConfig {
    pub fn pair_name(&self) -> String {
        format!("{}/{}", self.base_symbol, self.quote_symbol)
    }

    pub fn bar_interval_ms(&self) -> i64 {
        self.bar_interval.as_millis() as i64
    }
}

pub struct DemoConfig {
    pub market: MarketConfig,
    /// Price shown on the trading dashboard until a program feed exists.
    pub mock_market_price: f64,
    /// Namespace seed for deriving demo wallet addresses.
    pub wallet_seed: &'static str,
}

pub const DEMO: DemoConfig = DemoConfig {
    market: MarketConfig {
        base_symbol: "MYT",
        quote_symbol: "USDC",
        initial_price: 1e-9,
        initial_base: 0.0,
        initial_quote: 1_000.0,
        bar_interval: Duration::from_secs(60),
        series_len: 30,
        max_fills: 20,
    },
    mock_market_price: 100.0,
    wallet_seed: "stablex-demo-wallet",
};
