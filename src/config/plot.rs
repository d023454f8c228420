//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Fixed canvas handed to the chart renderer (pixels).
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Room reserved for axis labels around the plot area (pixels).
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,

    /// Y-Axis padding factor (0.05 = 5% of the price range above and below)
    pub plot_y_padding_pct: f64,

    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f32, // 0.0 to 1.0 (relative to slot width)
    pub candle_wick_width: f32, // Pixels
    pub candle_min_body_px: f32,

    // --- GRID ---
    pub horizontal_gridlines: usize,
    /// Above this many bars only every Nth bar gets a vertical gridline.
    pub max_time_labels: usize,
    pub grid_color: Color32,
    pub grid_width: f32,
    pub label_color: Color32,
    pub label_font_size: f32,
    pub background_color: Color32,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_buy: Color32,
    pub color_sell: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32,
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    canvas_width: 800.0,
    canvas_height: 400.0,

    margin_left: 84.0, // wide enough for "1.0100e-9"
    margin_right: 8.0,
    margin_top: 8.0,
    margin_bottom: 22.0,

    plot_y_padding_pct: 0.05,

    candle_bullish_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // TradingView Red
    candle_width_pct: 0.7,
    candle_wick_width: 1.0,
    candle_min_body_px: 1.0,

    horizontal_gridlines: 5,
    max_time_labels: 10,
    grid_color: Color32::from_gray(50),
    grid_width: 1.0,
    label_color: Color32::from_gray(160),
    label_font_size: 10.0,
    background_color: Color32::from_rgb(17, 24, 39), // gray-900

    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_buy: Color32::from_rgb(38, 166, 154),
    color_sell: Color32::from_rgb(239, 83, 80),
    color_info: Color32::from_rgb(96, 165, 250), // blue-400
    color_warning: Color32::from_rgb(249, 115, 22), // orange-500

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
