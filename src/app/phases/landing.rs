use eframe::egui::Context;

use crate::app::{App, state::{AppState, LandingState}, phases::phase_view::PhaseView};

impl PhaseView for LandingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_landing_state(ctx)
            .unwrap_or(AppState::Landing(LandingState))
    }
}
