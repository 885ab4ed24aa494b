//! Zeichen-Backend auf Basis von `egui::Painter`.

use glam::Vec2;

use super::DrawBackend;
use crate::shared::Rgb;

/// Zeichnet in ein Viewport-Rechteck eines egui-Painters.
///
/// Rechnet Y-up-Weltkoordinaten (Ursprung unten links) in egui-Screen-
/// Koordinaten (Ursprung oben links) um.
pub struct PainterBackend<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> PainterBackend<'a> {
    /// Erstellt ein Backend für den gegebenen Viewport-Bereich.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + p.x, self.rect.max.y - p.y)
    }

    fn screen_points(&self, points: &[Vec2]) -> Vec<egui::Pos2> {
        points.iter().map(|p| self.to_screen(*p)).collect()
    }

    fn stroke(color: Rgb, width: f32) -> egui::Stroke {
        egui::Stroke::new(width, to_color32(color))
    }
}

/// Wandelt eine RGB-Farbe (0.0–1.0) in `Color32` um.
pub fn to_color32(color: Rgb) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(color[0]), channel(color[1]), channel(color[2]))
}

impl DrawBackend for PainterBackend<'_> {
    fn clear(&mut self, color: Rgb) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn draw_points(&mut self, points: &[Vec2], color: Rgb, size: f32) {
        let fill = to_color32(color);
        for p in points {
            let square = egui::Rect::from_center_size(self.to_screen(*p), egui::vec2(size, size));
            self.painter.rect_filled(square, 0.0, fill);
        }
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        if points.len() < 2 {
            return;
        }
        self.painter.add(egui::Shape::line(
            self.screen_points(points),
            Self::stroke(color, width),
        ));
    }

    fn draw_closed_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        if points.len() < 2 {
            return;
        }
        self.painter.add(egui::Shape::closed_line(
            self.screen_points(points),
            Self::stroke(color, width),
        ));
    }

    fn draw_ellipse_approx(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        self.draw_closed_polygon(points, color, width);
    }
}
