use eframe::egui::Context;

use crate::app::{App, state::{AppState, TradeForm}, phases::phase_view::PhaseView};

impl PhaseView for TradeForm {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_trade_state(ctx, self);
        AppState::Trade(std::mem::take(self))
    }
}
