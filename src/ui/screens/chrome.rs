use eframe::egui::{Align, Button, Context, Layout, RichText, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::{
    config::{PLOT_CONFIG, Route},
    domain::WalletSession,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderAction {
    Navigate(Route),
    Connect,
    Disconnect,
}

pub(crate) fn render_header(
    ctx: &Context,
    current: Route,
    wallet: &WalletSession,
) -> Option<HeaderAction> {
    let mut action = None;

    TopBottomPanel::top("header")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = RichText::new(&UI_TEXT.brand)
                    .heading()
                    .strong()
                    .color(UI_CONFIG.colors.subsection_heading);
                if ui.add(Button::new(brand).frame(false)).clicked() {
                    action = Some(HeaderAction::Navigate(Route::Landing));
                }
                ui.add_space(16.0);

                for route in Route::iter().filter(|r| *r != Route::Landing) {
                    // Gated links stay visible but inert until a wallet is connected
                    let enabled = !route.requires_wallet() || wallet.is_connected();
                    let link = ui.add_enabled(
                        enabled,
                        Button::selectable(current == route, route.to_string()),
                    );
                    if link.clicked() {
                        action = Some(HeaderAction::Navigate(route));
                    }
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    match wallet.short_address() {
                        Some(short) => {
                            if ui.button_secondary(&UI_TEXT.hdr_disconnect).clicked() {
                                action = Some(HeaderAction::Disconnect);
                            }
                            ui.label(
                                RichText::new(short)
                                    .monospace()
                                    .color(PLOT_CONFIG.color_profit),
                            )
                            .on_hover_text(wallet.address().unwrap_or_default());
                        }
                        None => {
                            if ui.button_secondary(&UI_TEXT.hdr_connect_wallet).clicked() {
                                action = Some(HeaderAction::Connect);
                            }
                        }
                    }
                });
            });
        });

    action
}

pub(crate) fn render_footer(ctx: &Context) {
    TopBottomPanel::bottom("footer")
        .frame(UI_CONFIG.bottom_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label_subdued(&UI_TEXT.footer);
            });
        });
}
