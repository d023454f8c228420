use eframe::egui::Context;

use crate::app::{App, state::{AppState, ExchangeForm}, phases::phase_view::PhaseView};

impl PhaseView for ExchangeForm {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_exchange_state(ctx, self);
        AppState::Exchange(std::mem::take(self))
    }
}
