use {
    crate::{
        config::{PLOT_CONFIG, TradeDirection},
        ui::UI_CONFIG,
    },
    eframe::egui::{Button, Color32, Response, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .strong()
        .color(UI_CONFIG.colors.subsection_heading)
}

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for TradeDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Buy => PLOT_CONFIG.color_buy,
            Self::Sell => PLOT_CONFIG.color_sell,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    /// Filled orange call-to-action button.
    fn button_primary(&mut self, text: impl Into<String>) -> Response;
    /// Filled blue button (wallet / navigation).
    fn button_secondary(&mut self, text: impl Into<String>) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).monospace().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn button_primary(&mut self, text: impl Into<String>) -> Response {
        self.add(
            Button::new(RichText::new(text).strong().color(Color32::WHITE))
                .fill(UI_CONFIG.colors.primary_button),
        )
    }

    fn button_secondary(&mut self, text: impl Into<String>) -> Response {
        self.add(
            Button::new(RichText::new(text).color(Color32::WHITE))
                .fill(UI_CONFIG.colors.secondary_button),
        )
    }
}
