use eframe::egui::{CentralPanel, Context, Grid, ScrollArea, TextEdit};
use strum::IntoEnumIterator;

use crate::{
    domain::{ListingField, ListingRequest},
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
};

/// Returns true when the user pressed submit.
pub(crate) fn render_list_coin(ctx: &Context, request: &mut ListingRequest) -> bool {
    let mut submitted = false;

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(UI_CONFIG.form_max_width);
                    ui.add_space(16.0);
                    ui.heading(&UI_TEXT.lc_title);
                    ui.add_space(8.0);
                    ui.label(&UI_TEXT.lc_intro);
                    ui.add_space(16.0);

                    UI_CONFIG.card_frame().show(ui, |ui| {
                        Grid::new("listing_form")
                            .num_columns(2)
                            .spacing([12.0, 10.0])
                            .show(ui, |ui| {
                                for (field, hint) in
                                    ListingField::iter().zip(UI_TEXT.lc_placeholders)
                                {
                                    ui.label_subheader(field.to_string());
                                    let value = request.field_mut(field);
                                    let edit = if field == ListingField::Description {
                                        TextEdit::multiline(value).desired_rows(4)
                                    } else {
                                        TextEdit::singleline(value)
                                    };
                                    ui.add(edit.hint_text(*hint).desired_width(320.0));
                                    ui.end_row();
                                }
                            });
                        ui.add_space(12.0);
                        if ui.button_primary(&UI_TEXT.lc_submit).clicked() {
                            submitted = true;
                        }
                    });
                });
            });
        });

    submitted
}
