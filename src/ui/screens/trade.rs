use eframe::egui::{CentralPanel, Context, Grid, RichText, TextEdit};
use strum::IntoEnumIterator;

use crate::{
    app::TradeForm,
    config::{DEMO, PLOT_CONFIG, TradeDirection},
    ui::{DirectionColor, UI_CONFIG, UI_TEXT, UiStyleExt, format_price},
};

/// On-chain trading dashboard. Returns true when the order form was submitted.
pub(crate) fn render_trade(ctx: &Context, wallet: Option<&str>, form: &mut TradeForm) -> bool {
    let mut submitted = false;

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.heading(&UI_TEXT.td_title);
            ui.add_space(12.0);

            ui.horizontal_top(|ui| {
                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.label_subheader(&UI_TEXT.td_market_overview);
                    ui.metric(
                        &UI_TEXT.td_current_price,
                        &format!("{} {}", format_price(DEMO.mock_market_price), DEMO.market.quote_symbol),
                        PLOT_CONFIG.color_text_primary,
                    );
                });

                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.label_subheader(&UI_TEXT.td_wallet_info);
                    ui.metric(
                        &UI_TEXT.label_wallet,
                        wallet.unwrap_or("-"),
                        PLOT_CONFIG.color_text_neutral,
                    );
                    ui.metric(
                        &UI_TEXT.ex_balances,
                        &UI_TEXT.td_balance_unavailable,
                        PLOT_CONFIG.color_warning,
                    );
                });
            });
            ui.add_space(12.0);

            UI_CONFIG.card_frame().show(ui, |ui| {
                ui.set_max_width(UI_CONFIG.form_max_width);
                ui.label_subheader(&UI_TEXT.ex_place_order);
                Grid::new("trade_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label_subdued(&UI_TEXT.td_order_type);
                        ui.horizontal(|ui| {
                            for side in TradeDirection::iter() {
                                ui.selectable_value(
                                    &mut form.side,
                                    side,
                                    RichText::new(side.to_string()).color(side.color()),
                                );
                            }
                        });
                        ui.end_row();

                        ui.label_subdued(&UI_TEXT.ex_price);
                        ui.add(TextEdit::singleline(&mut form.price_input).desired_width(180.0));
                        ui.end_row();

                        ui.label_subdued(&UI_TEXT.td_amount);
                        ui.add(TextEdit::singleline(&mut form.amount_input).desired_width(180.0));
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button_primary(&UI_TEXT.ex_place_order).clicked() {
                    submitted = true;
                }
            });
        });

    submitted
}
