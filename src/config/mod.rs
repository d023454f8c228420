//! Configuration module for the Stablex demo exchange.

// Can all be private now because we have a public re-export.
mod debug;
mod demo;
mod types;

// Public
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use constants::SIM;
pub use debug::DF;
pub use demo::{DEMO, DemoConfig, MarketConfig};
pub use plot::PLOT_CONFIG;
pub use types::{Route, TradeDirection};
