//! Candlestick chart drawn onto a fixed pixel surface.
//!
//! Pixel space has its origin at the top-left of the surface, y growing downwards.
//! Drawing is split into layers (background, grid, candles) that all read the same
//! [`ChartLayout`].

use eframe::egui::{Align2, Color32, Pos2, Rect, Stroke, Vec2, pos2, vec2};
use itertools::Itertools;

use crate::{
    config::{DF, PLOT_CONFIG, SIM},
    domain::{Bar, CandleType},
    ui::utils::format_price,
    utils::{TimeUtils, epoch_ms_to_clock},
};

/// The 2D primitives the renderer needs. Coordinates are surface-local pixels.
pub trait ChartSurface {
    fn size(&self) -> Vec2;
    fn fill_rect(&mut self, rect: Rect, color: Color32);
    fn stroke_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);
    fn draw_text(&mut self, pos: Pos2, anchor: Align2, text: &str, color: Color32);
}

/// Price/time to pixel mapping for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub surface: Rect,
    pub plot: Rect,
    /// Padded price range shown on the y axis.
    pub price_min: f64,
    pub price_max: f64,
    pub bar_count: usize,
    pub slot_width: f32,
}

impl ChartLayout {
    /// `None` for an empty series or a surface too small to hold the plot area.
    pub fn compute(size: Vec2, series: &[Bar]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }
        let surface = Rect::from_min_size(Pos2::ZERO, size);
        let plot = Rect::from_min_max(
            pos2(PLOT_CONFIG.margin_left, PLOT_CONFIG.margin_top),
            pos2(
                size.x - PLOT_CONFIG.margin_right,
                size.y - PLOT_CONFIG.margin_bottom,
            ),
        );
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return None;
        }

        let (low, high) = series
            .iter()
            .flat_map(|b| [b.low, b.high])
            .minmax_by(f64::total_cmp)
            .into_option()?;

        let range = high - low;
        let pad = if range > 0.0 {
            range * PLOT_CONFIG.plot_y_padding_pct
        } else {
            // Flat series: pad around the price itself so the mapping stays finite.
            (high.abs() * PLOT_CONFIG.plot_y_padding_pct).max(SIM.price_floor)
        };

        Some(Self {
            surface,
            plot,
            price_min: low - pad,
            price_max: high + pad,
            bar_count: series.len(),
            slot_width: plot.width() / series.len() as f32,
        })
    }

    pub fn price_to_y(&self, price: f64) -> f32 {
        let frac = (self.price_max - price) / (self.price_max - self.price_min);
        self.plot.top() + (frac as f32) * self.plot.height()
    }

    pub fn slot_center_x(&self, index: usize) -> f32 {
        self.plot.left() + self.slot_width * (index as f32 + 0.5)
    }

    pub fn body_width(&self) -> f32 {
        self.slot_width * PLOT_CONFIG.candle_width_pct
    }

    /// Every Nth bar gets a vertical gridline and time label.
    pub fn label_stride(&self) -> usize {
        self.bar_count
            .div_ceil(PLOT_CONFIG.max_time_labels.max(1))
            .max(1)
    }

    /// Evenly spaced gridline prices from bottom to top, both ends included.
    pub fn gridline_prices(&self) -> Vec<f64> {
        let n = PLOT_CONFIG.horizontal_gridlines;
        if n < 2 {
            return vec![self.price_min; n];
        }
        let step = (self.price_max - self.price_min) / (n - 1) as f64;
        (0..n).map(|k| self.price_min + step * k as f64).collect()
    }
}

pub trait ChartLayer {
    fn draw(&self, surface: &mut dyn ChartSurface, layout: &ChartLayout, series: &[Bar]);
}

pub struct BackgroundLayer;

impl ChartLayer for BackgroundLayer {
    fn draw(&self, surface: &mut dyn ChartSurface, layout: &ChartLayout, _series: &[Bar]) {
        surface.fill_rect(layout.surface, PLOT_CONFIG.background_color);
    }
}

pub struct GridLayer;

impl ChartLayer for GridLayer {
    fn draw(&self, surface: &mut dyn ChartSurface, layout: &ChartLayout, series: &[Bar]) {
        let stroke = Stroke::new(PLOT_CONFIG.grid_width, PLOT_CONFIG.grid_color);
        let plot = layout.plot;

        for price in layout.gridline_prices() {
            let y = layout.price_to_y(price);
            surface.stroke_line(pos2(plot.left(), y), pos2(plot.right(), y), stroke);
            surface.draw_text(
                pos2(plot.left() - 4.0, y),
                Align2::RIGHT_CENTER,
                &format_price(price),
                PLOT_CONFIG.label_color,
            );
        }

        let interval_ms = match series {
            [a, b, ..] => b.time_ms - a.time_ms,
            _ => TimeUtils::MS_IN_MIN,
        };
        for (i, bar) in series.iter().enumerate().step_by(layout.label_stride()) {
            let x = layout.slot_center_x(i);
            surface.stroke_line(pos2(x, plot.top()), pos2(x, plot.bottom()), stroke);
            surface.draw_text(
                pos2(x, plot.bottom() + 4.0),
                Align2::CENTER_TOP,
                &epoch_ms_to_clock(bar.time_ms, interval_ms),
                PLOT_CONFIG.label_color,
            );
        }
    }
}

pub struct CandlestickLayer;

impl ChartLayer for CandlestickLayer {
    fn draw(&self, surface: &mut dyn ChartSurface, layout: &ChartLayout, series: &[Bar]) {
        let body_w = layout.body_width();
        for (i, bar) in series.iter().enumerate() {
            let color = candle_color(bar);
            let x = layout.slot_center_x(i);

            surface.stroke_line(
                pos2(x, layout.price_to_y(bar.high)),
                pos2(x, layout.price_to_y(bar.low)),
                Stroke::new(PLOT_CONFIG.candle_wick_width, color),
            );

            let top = layout.price_to_y(bar.open.max(bar.close));
            let bottom = layout.price_to_y(bar.open.min(bar.close));
            // Doji: keep a visible body
            let height = (bottom - top).max(PLOT_CONFIG.candle_min_body_px);
            surface.fill_rect(
                Rect::from_min_size(pos2(x - body_w / 2.0, top), vec2(body_w, height)),
                color,
            );
        }
    }
}

pub fn candle_color(bar: &Bar) -> Color32 {
    match bar.get_type() {
        CandleType::Bullish => PLOT_CONFIG.candle_bullish_color,
        CandleType::Bearish => PLOT_CONFIG.candle_bearish_color,
    }
}

/// Draws `series` onto `surface`. A missing surface or an empty series draws nothing.
pub fn render(surface: Option<&mut dyn ChartSurface>, series: &[Bar]) {
    let Some(surface) = surface else {
        return;
    };
    let Some(layout) = ChartLayout::compute(surface.size(), series) else {
        return;
    };

    if DF.log_render {
        log::info!(
            "render {} bars, y [{:e}, {:e}], slot {:.1}px",
            layout.bar_count,
            layout.price_min,
            layout.price_max,
            layout.slot_width
        );
    }

    let layers: [&dyn ChartLayer; 3] = [&BackgroundLayer, &GridLayer, &CandlestickLayer];
    for layer in layers {
        layer.draw(surface, &layout, series);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{bar, flat_bars};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect(Rect, Color32),
        Line(Pos2, Pos2, Stroke),
        Text(Pos2, String),
    }

    struct Recorder {
        size: Vec2,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                size: vec2(PLOT_CONFIG.canvas_width, PLOT_CONFIG.canvas_height),
                ops: Vec::new(),
            }
        }

        fn rects(&self) -> Vec<(Rect, Color32)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Rect(r, c) => Some((*r, *c)),
                    _ => None,
                })
                .collect()
        }

        fn lines(&self) -> Vec<(Pos2, Pos2, Stroke)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Line(a, b, s) => Some((*a, *b, *s)),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<String> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(_, t) => Some(t.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl ChartSurface for Recorder {
        fn size(&self) -> Vec2 {
            self.size
        }
        fn fill_rect(&mut self, rect: Rect, color: Color32) {
            self.ops.push(Op::Rect(rect, color));
        }
        fn stroke_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
            self.ops.push(Op::Line(from, to, stroke));
        }
        fn draw_text(&mut self, pos: Pos2, _anchor: Align2, text: &str, _color: Color32) {
            self.ops.push(Op::Text(pos, text.to_string()));
        }
    }

    fn sample() -> Vec<Bar> {
        vec![
            bar(0, 10.0, 12.0, 9.0, 11.0),
            bar(60_000, 11.0, 11.5, 8.0, 8.5),
            bar(120_000, 8.5, 8.5, 8.5, 8.5),
        ]
    }

    mod no_ops {
        use super::*;

        #[test]
        fn empty_series_draws_nothing() {
            let mut rec = Recorder::new();
            render(Some(&mut rec), &[]);
            assert!(rec.ops.is_empty());
        }

        #[test]
        fn missing_surface_is_silent() {
            render(None, &sample());
        }

        #[test]
        fn surface_smaller_than_margins_draws_nothing() {
            let mut rec = Recorder::new();
            rec.size = vec2(20.0, 10.0);
            render(Some(&mut rec), &sample());
            assert!(rec.ops.is_empty());
        }
    }

    mod layout {
        use super::*;

        #[test]
        fn range_is_padded_five_percent() {
            let l = ChartLayout::compute(vec2(800.0, 400.0), &sample()).unwrap();
            // low 8, high 12, range 4 -> pad 0.2
            assert!((l.price_min - 7.8).abs() < 1e-9);
            assert!((l.price_max - 12.2).abs() < 1e-9);
        }

        #[test]
        fn extremes_stay_inside_plot() {
            let l = ChartLayout::compute(vec2(800.0, 400.0), &sample()).unwrap();
            assert!(l.price_to_y(12.0) > l.plot.top());
            assert!(l.price_to_y(8.0) < l.plot.bottom());
            assert!(l.price_to_y(12.0) < l.price_to_y(8.0));
        }

        #[test]
        fn flat_series_has_finite_mapping() {
            let bars = flat_bars(4, 1e-9);
            let l = ChartLayout::compute(vec2(800.0, 400.0), &bars).unwrap();
            assert!(l.price_max > l.price_min);
            let y = l.price_to_y(1e-9);
            assert!(y.is_finite());
            assert!((y - l.plot.center().y).abs() < 0.5);
        }

        #[test]
        fn slots_partition_plot_width() {
            let l = ChartLayout::compute(vec2(800.0, 400.0), &sample()).unwrap();
            assert!((l.slot_width * 3.0 - l.plot.width()).abs() < 1e-3);
            assert!((l.body_width() - l.slot_width * 0.7).abs() < 1e-3);
        }

        #[test]
        fn dense_series_labels_every_nth_bar() {
            let l = ChartLayout::compute(vec2(800.0, 400.0), &flat_bars(100, 1.0)).unwrap();
            assert_eq!(l.label_stride(), 10);
            let l = ChartLayout::compute(vec2(800.0, 400.0), &flat_bars(7, 1.0)).unwrap();
            assert_eq!(l.label_stride(), 1);
        }
    }

    mod drawing {
        use super::*;

        #[test]
        fn one_wick_and_one_body_per_bar() {
            let mut rec = Recorder::new();
            render(Some(&mut rec), &sample());
            // background + 3 bodies
            assert_eq!(rec.rects().len(), 4);
            // 5 price gridlines + 3 time gridlines + 3 wicks
            assert_eq!(rec.lines().len(), 11);
            assert_eq!(rec.texts().len(), 8);
        }

        #[test]
        fn bodies_are_centered_in_slots_and_colored_by_direction() {
            let bars = sample();
            let mut rec = Recorder::new();
            render(Some(&mut rec), &bars);
            let layout = ChartLayout::compute(rec.size, &bars).unwrap();
            let bodies = &rec.rects()[1..];
            for (i, (rect, color)) in bodies.iter().enumerate() {
                assert!((rect.center().x - layout.slot_center_x(i)).abs() < 1e-3);
                assert_eq!(*color, candle_color(&bars[i]));
            }
            assert_eq!(bodies[0].1, PLOT_CONFIG.candle_bullish_color);
            assert_eq!(bodies[1].1, PLOT_CONFIG.candle_bearish_color);
        }

        #[test]
        fn doji_gets_a_one_pixel_body() {
            let mut rec = Recorder::new();
            render(Some(&mut rec), &sample());
            let doji = rec.rects()[3].0;
            assert!(doji.height() >= 1.0);
        }

        #[test]
        fn wick_spans_high_to_low() {
            let bars = sample();
            let mut rec = Recorder::new();
            render(Some(&mut rec), &bars);
            let layout = ChartLayout::compute(rec.size, &bars).unwrap();
            let wicks: Vec<_> = rec.lines().into_iter().rev().take(3).collect();
            // reversed: last bar first
            let (top, bottom, _) = wicks[2];
            assert!((top.y - layout.price_to_y(12.0)).abs() < 1e-3);
            assert!((bottom.y - layout.price_to_y(9.0)).abs() < 1e-3);
        }

        #[test]
        fn gridline_labels_cover_padded_range() {
            let mut rec = Recorder::new();
            render(Some(&mut rec), &sample());
            let texts = rec.texts();
            assert_eq!(texts[0], format_price(7.8));
            assert_eq!(texts[4], format_price(12.2));
            assert_eq!(texts[5], "00:00");
        }
    }
}
