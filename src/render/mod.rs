//! Rendering: spielt eine `RenderScene` auf einem Zeichen-Backend ab.
//!
//! Der Renderer kennt nur die Zeichenfähigkeiten des Backends; alle
//! Entscheidungen (Clipping, Umfärben, Hervorhebung, Vorschau) stecken
//! bereits in der Szene.

mod painter_backend;

pub use crate::shared::RenderScene;
pub use painter_backend::PainterBackend;

use glam::Vec2;

use crate::shared::{DrawPrimitive, Rgb};

/// Zeichenfähigkeiten eines Backends in Y-up-Weltkoordinaten.
pub trait DrawBackend {
    /// Löscht die Zeichenfläche.
    fn clear(&mut self, color: Rgb);
    /// Zeichnet einzelne Punkte der Größe `size`.
    fn draw_points(&mut self, points: &[Vec2], color: Rgb, size: f32);
    /// Zeichnet einen offenen Linienzug.
    fn draw_polyline(&mut self, points: &[Vec2], color: Rgb, width: f32);
    /// Zeichnet einen geschlossenen Umlauf als Outline.
    fn draw_closed_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32);
    /// Zeichnet eine durch Stützpunkte approximierte Ellipse als Outline.
    fn draw_ellipse_approx(&mut self, points: &[Vec2], color: Rgb, width: f32);
    /// Schließt den Frame ab.
    fn present(&mut self) {}
}

/// Haupt-Renderer für den Vektor-Editor.
#[derive(Debug, Default)]
pub struct Renderer {
    frames_rendered: u64,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl bisher gerenderter Frames
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Rendert die komplette Szene: löschen, Befehle in Reihenfolge, präsentieren.
    pub fn render_scene(&mut self, backend: &mut impl DrawBackend, scene: &RenderScene) {
        backend.clear(scene.background);

        for command in &scene.commands {
            let vertices = command.vertices.as_slice();
            let (color, width) = (command.color, command.width);
            match command.primitive {
                DrawPrimitive::Points => backend.draw_points(vertices, color, width),
                DrawPrimitive::Polyline => backend.draw_polyline(vertices, color, width),
                DrawPrimitive::ClosedPolygon => backend.draw_closed_polygon(vertices, color, width),
                DrawPrimitive::EllipseApprox => backend.draw_ellipse_approx(vertices, color, width),
            }
        }

        backend.present();
        self.frames_rendered += 1;
        log::trace!(
            "Frame {} gerendert ({} Befehle)",
            self.frames_rendered,
            scene.commands.len()
        );
    }
}
