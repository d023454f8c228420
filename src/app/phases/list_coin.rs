use eframe::egui::Context;

use crate::app::{App, state::{AppState, ListingForm}, phases::phase_view::PhaseView};

impl PhaseView for ListingForm {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_list_coin_state(ctx, self);
        AppState::ListCoin(std::mem::take(self))
    }
}
