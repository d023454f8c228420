use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::{config::PLOT_CONFIG, ui::ChartSurface};

/// Chart surface backed by an egui painter clipped to `rect`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Pos2) -> Pos2 {
        self.rect.min + p.to_vec2()
    }
}

impl ChartSurface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let rect = rect.translate(self.rect.min.to_vec2());
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }

    fn draw_text(&mut self, pos: Pos2, anchor: Align2, text: &str, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            anchor,
            text,
            FontId::monospace(PLOT_CONFIG.label_font_size),
            color,
        );
    }
}
