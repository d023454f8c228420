use eframe::egui::{CentralPanel, Context, RichText, ScrollArea};

use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LandingAction {
    GetStarted,
    ListNow,
}

pub(crate) fn render_landing(ctx: &Context) -> Option<LandingAction> {
    let mut action = None;

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(UI_CONFIG.content_max_width);

                    // Hero
                    ui.add_space(32.0);
                    ui.label(
                        RichText::new(&UI_TEXT.ld_hero_title)
                            .size(32.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.add_space(12.0);
                    ui.label(RichText::new(&UI_TEXT.ld_hero_body).size(16.0));
                    ui.add_space(16.0);
                    if ui.button_primary(&UI_TEXT.ld_get_started).clicked() {
                        action = Some(LandingAction::GetStarted);
                    }

                    // Features
                    ui.add_space(40.0);
                    ui.heading(&UI_TEXT.ld_why_title);
                    ui.add_space(12.0);
                    let features = UI_TEXT.ld_features;
                    ui.columns(features.len().max(1), |cols| {
                        for (col, (title, body)) in cols.iter_mut().zip(features) {
                            UI_CONFIG.card_frame().show(col, |ui| {
                                ui.label_subheader(*title);
                                ui.add_space(4.0);
                                ui.label(*body);
                            });
                        }
                    });

                    // Listing call-to-action
                    ui.add_space(40.0);
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.heading(&UI_TEXT.ld_list_title);
                            ui.add_space(8.0);
                            ui.label(&UI_TEXT.ld_list_body);
                            ui.add_space(12.0);
                            if ui.button_primary(&UI_TEXT.ld_list_now).clicked() {
                                action = Some(LandingAction::ListNow);
                            }
                        });
                    });
                    ui.add_space(24.0);
                });
            });
        });

    action
}
