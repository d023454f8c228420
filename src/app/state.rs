// src/app/state.rs

use crate::{
    config::{Route, TradeDirection},
    domain::{ListingRequest, WalletSession},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct LandingState;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ListingForm {
    pub(crate) request: ListingRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ExchangeForm {
    pub(crate) direction: TradeDirection,
    pub(crate) quantity_input: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TradeForm {
    pub(crate) side: TradeDirection,
    pub(crate) price_input: String,
    pub(crate) amount_input: String,
}

/// One variant per page. Form contents live in the variant and are dropped on navigation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppState {
    Landing(LandingState),
    ListCoin(ListingForm),
    Exchange(ExchangeForm),
    Trade(TradeForm),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Landing(LandingState)
    }
}

impl AppState {
    pub(crate) fn enter(route: Route) -> Self {
        match route {
            Route::Landing => Self::Landing(LandingState),
            Route::ListCoin => Self::ListCoin(ListingForm::default()),
            Route::Exchange => Self::Exchange(ExchangeForm::default()),
            Route::Trade => Self::Trade(TradeForm::default()),
        }
    }

    pub(crate) fn route(&self) -> Route {
        match self {
            Self::Landing(_) => Route::Landing,
            Self::ListCoin(_) => Route::ListCoin,
            Self::Exchange(_) => Route::Exchange,
            Self::Trade(_) => Route::Trade,
        }
    }
}

/// Gated routes fall back to the landing page while no wallet is connected.
pub fn resolve_route(requested: Route, wallet: &WalletSession) -> Route {
    if requested.requires_wallet() && !wallet.is_connected() {
        Route::Landing
    } else {
        requested
    }
}
