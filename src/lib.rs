#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_util;

// Re-export commonly used types outside of crate (for the sim binary and integration tests)
pub use app::{App, resolve_route};
pub use config::{DEMO, Route, TradeDirection};
pub use domain::{Bar, BarSeries, ListingRequest, OrderBook, PriceLevel, WalletSession};
pub use engine::{Fill, SessionState, TradeError, TradeIntent};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(version, about = "Stablex demo exchange")]
pub struct Cli {
    /// Start with this wallet address already connected
    #[arg(long)]
    pub wallet: Option<String>,

    /// View to open on launch (gated views fall back to landing without a wallet)
    #[arg(long, value_enum)]
    pub view: Option<Route>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
