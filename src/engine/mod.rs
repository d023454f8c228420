//! Synthetic market: price impact, order book stand-in and the per-session aggregate that
//! ties them to the candle series.

mod book_synth;
mod price_sim;
mod program;
mod session;

pub use book_synth::synthesize;
pub use price_sim::adjust;
pub use program::{OrderTicket, ProgramError, place_order};
pub use session::{Balances, Fill, SessionState, TradeError, TradeIntent};
