use eframe::egui::{
    CentralPanel, Context, Grid, Key, RichText, ScrollArea, Sense, TextEdit, Ui, vec2,
};
use strum::IntoEnumIterator;

use crate::{
    app::ExchangeForm,
    config::{DEMO, PLOT_CONFIG, TradeDirection},
    domain::PriceLevel,
    engine::SessionState,
    ui::{
        DirectionColor, PainterSurface, UI_CONFIG, UI_TEXT, UiStyleExt, format_amount,
        format_price, render,
    },
    utils::epoch_ms_to_clock,
};

/// Returns true when the user submitted the order form.
pub(crate) fn render_exchange(
    ctx: &Context,
    session: &SessionState,
    form: &mut ExchangeForm,
) -> bool {
    let mut submitted = false;

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(&UI_TEXT.ex_title);
                    ui.add_space(12.0);
                    ui.label_subheader(DEMO.market.pair_name());
                    ui.add_space(12.0);
                    ui.metric(
                        &UI_TEXT.ex_price,
                        &format_price(session.price()),
                        PLOT_CONFIG.color_text_primary,
                    );
                });
                ui.add_space(12.0);

                ui.horizontal_top(|ui| {
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.label_subheader(&UI_TEXT.ex_chart);
                        draw_chart(ui, session);
                    });
                    ui.vertical(|ui| {
                        UI_CONFIG.card_frame().show(ui, |ui| {
                            draw_order_book(ui, session);
                        });
                    });
                });
                ui.add_space(12.0);

                ui.horizontal_top(|ui| {
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        draw_balances(ui, session);
                    });
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        submitted = draw_order_form(ui, session, form);
                    });
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        draw_fills(ui, session);
                    });
                });
            });
        });

    submitted
}

fn draw_chart(ui: &mut Ui, session: &SessionState) {
    let (response, painter) = ui.allocate_painter(
        vec2(PLOT_CONFIG.canvas_width, PLOT_CONFIG.canvas_height),
        Sense::hover(),
    );
    let mut surface = PainterSurface::new(&painter, response.rect);
    render(Some(&mut surface), session.series().bars());
}

fn draw_order_book(ui: &mut Ui, session: &SessionState) {
    let book = session.book();
    ui.label_subheader(&UI_TEXT.ex_order_book);
    ui.add_space(6.0);

    // Asks are what a buyer lifts, bids what a seller hits
    draw_book_side(ui, "book_asks", &UI_TEXT.ex_asks, &book.asks, TradeDirection::Sell);
    ui.add_space(6.0);
    if let Some(spread) = book.spread() {
        ui.metric(
            &UI_TEXT.ex_spread,
            &format_price(spread),
            PLOT_CONFIG.color_text_neutral,
        );
    }
    ui.add_space(6.0);
    draw_book_side(ui, "book_bids", &UI_TEXT.ex_bids, &book.bids, TradeDirection::Buy);
}

fn draw_book_side(ui: &mut Ui, id: &str, title: &str, levels: &[PriceLevel], dir: TradeDirection) {
    ui.label(RichText::new(title).strong().color(dir.color()));
    Grid::new(id).num_columns(2).striped(true).show(ui, |ui| {
        ui.label_subdued(&UI_TEXT.ex_price);
        ui.label_subdued(&UI_TEXT.ex_size);
        ui.end_row();
        for level in levels {
            ui.label(
                RichText::new(format_price(level.price))
                    .monospace()
                    .color(dir.color()),
            );
            ui.label(RichText::new(format_amount(level.size)).monospace());
            ui.end_row();
        }
    });
}

fn draw_balances(ui: &mut Ui, session: &SessionState) {
    let balances = session.balances();
    ui.label_subheader(&UI_TEXT.ex_balances);
    ui.add_space(6.0);
    ui.metric(
        session.base_symbol,
        &format_amount(balances.base),
        PLOT_CONFIG.color_text_primary,
    );
    ui.metric(
        session.quote_symbol,
        &format_amount(balances.quote),
        PLOT_CONFIG.color_text_primary,
    );
}

fn draw_order_form(ui: &mut Ui, session: &SessionState, form: &mut ExchangeForm) -> bool {
    ui.label_subheader(&UI_TEXT.ex_place_order);
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        for dir in TradeDirection::iter() {
            ui.selectable_value(
                &mut form.direction,
                dir,
                RichText::new(dir.to_string()).strong().color(dir.color()),
            );
        }
    });

    ui.label_subdued(&UI_TEXT.ex_quantity);
    let edit = ui.add(
        TextEdit::singleline(&mut form.quantity_input)
            .hint_text(&UI_TEXT.ex_quantity_hint)
            .desired_width(180.0),
    );
    let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

    if let Ok(qty) = form.quantity_input.trim().parse::<f64>() {
        if qty.is_finite() && qty > 0.0 {
            ui.metric(
                &UI_TEXT.ex_cost,
                &format!(
                    "{} {}",
                    format_amount(session.price() * qty),
                    session.quote_symbol
                ),
                PLOT_CONFIG.color_text_neutral,
            );
        }
    }

    ui.add_space(6.0);
    let label = format!("{} {}", form.direction, session.base_symbol);
    ui.button_primary(label).clicked() || enter
}

fn draw_fills(ui: &mut Ui, session: &SessionState) {
    ui.label_subheader(&UI_TEXT.ex_recent_fills);
    ui.add_space(6.0);

    if session.fills().next().is_none() {
        ui.label_subdued(&UI_TEXT.ex_no_fills);
        return;
    }

    let interval = session.bar_interval_ms();
    Grid::new("recent_fills")
        .num_columns(4)
        .striped(true)
        .show(ui, |ui| {
            for fill in session.fills() {
                ui.label(RichText::new(epoch_ms_to_clock(fill.time_ms, interval)).monospace());
                ui.label(
                    RichText::new(fill.direction.to_string()).color(fill.direction.color()),
                );
                ui.label(RichText::new(format_amount(fill.quantity)).monospace());
                ui.label(RichText::new(format_price(fill.price)).monospace());
                ui.end_row();
            }
        });
}
