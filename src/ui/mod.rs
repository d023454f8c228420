mod chart;
mod notice;
mod painter_surface;
mod screens;
mod styles;
mod ui_config;
mod ui_text;
mod utils;

pub use chart::{
    BackgroundLayer, CandlestickLayer, ChartLayer, ChartLayout, ChartSurface, GridLayer,
    candle_color, render,
};
pub use painter_surface::PainterSurface;
pub use utils::{format_amount, format_price};

pub use notice::{Notice, NoticeKind};
pub(crate) use notice::render_notice;
pub(crate) use screens::{
    HeaderAction, LandingAction, render_exchange, render_footer, render_header, render_landing,
    render_list_coin, render_trade,
};
pub(crate) use styles::{DirectionColor, UiStyleExt};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
