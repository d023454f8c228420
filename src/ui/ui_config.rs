use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub primary_button: Color32,
    pub secondary_button: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub content_max_width: f32,
    pub form_max_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_gray(209),                  // gray-300
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(249, 115, 22), // orange-500
        central_panel: Color32::from_rgb(17, 24, 39),     // gray-900
        side_panel: Color32::from_rgb(31, 41, 55),        // gray-800
        card: Color32::from_rgb(31, 41, 55),
        primary_button: Color32::from_rgb(249, 115, 22),  // orange-500
        secondary_button: Color32::from_rgb(59, 130, 246), // blue-500
    },
    content_max_width: 1100.0,
    form_max_width: 520.0,
};

impl UiConfig {
    /// Frame for the header bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: Color32::BLACK,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the footer (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 6),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Rounded card used for feature tiles, forms and exchange panels
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, Color32::from_gray(60)),
            inner_margin: Margin::same(16),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
