// Domain types and value objects
mod bar_series;
mod candle;
mod listing;
mod order_book;
mod wallet;

// Re-export commonly used types to the world
pub use bar_series::{BarSeries, SeriesError};
pub use candle::{Bar, CandleType};
pub use listing::{ListingError, ListingField, ListingRequest};
pub use order_book::{OrderBook, PriceLevel};
pub use wallet::{WalletError, WalletSession, demo_address};
