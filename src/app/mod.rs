mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, ExchangeForm, LandingState, ListingForm, TradeForm};

pub use root::App;
pub use state::resolve_route;
