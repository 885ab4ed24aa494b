//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use glam::Vec2;

use crate::core::Rgb;

/// Zeichenprimitive des Backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPrimitive {
    /// Einzelne Punkte, `width` = Punktgröße
    Points,
    /// Offener Linienzug
    Polyline,
    /// Geschlossener Umlauf (letzter Punkt wird mit dem ersten verbunden)
    ClosedPolygon,
    /// Ellipse als geschlossener Linienzug aus Stützpunkten
    EllipseApprox,
}

/// Ebene, aus der ein Zeichenbefehl stammt (Reihenfolge = Zeichenreihenfolge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawLayer {
    /// Form der Szene
    Shape,
    /// Selektions-Hervorhebung
    Highlight,
    /// Outline des Clip-Windows
    ClipWindow,
    /// Live-Vorschau des laufenden Mehrfach-Klicks
    Preview,
}

/// Ein Zeichenbefehl in Y-up-Weltkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Art des Primitivs
    pub primitive: DrawPrimitive,
    /// Stützpunkte
    pub vertices: Vec<Vec2>,
    /// Zeichenfarbe
    pub color: Rgb,
    /// Strichbreite bzw. Punktgröße
    pub width: f32,
    /// Herkunft des Befehls
    pub layer: DrawLayer,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Hintergrundfarbe zum Löschen der Fläche
    pub background: Rgb,
    /// Zeichenbefehle in Ausführungsreihenfolge
    pub commands: Vec<DrawCommand>,
}

impl RenderScene {
    /// Alle Befehle einer Ebene.
    pub fn commands_in(&self, layer: DrawLayer) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |command| command.layer == layer)
    }
}
