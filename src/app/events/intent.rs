use super::super::state::{EditorTool, TransformMode};
use crate::core::Rgb;

/// Richtung eines Verschiebe-Schritts (Pfeiltasten).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateDirection {
    /// +y
    Up,
    /// −y
    Down,
    /// −x
    Left,
    /// +x
    Right,
}

impl TranslateDirection {
    /// Einheitsvektor im Y-up-Raum.
    pub fn unit(self) -> glam::Vec2 {
        match self {
            TranslateDirection::Up => glam::Vec2::Y,
            TranslateDirection::Down => glam::Vec2::NEG_Y,
            TranslateDirection::Left => glam::Vec2::NEG_X,
            TranslateDirection::Right => glam::Vec2::X,
        }
    }
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Zeiger bewegt (Y-up-Weltkoordinaten)
    PointerMoved { world_pos: glam::Vec2 },
    /// Primärklick in den Viewport (Y-up-Weltkoordinaten)
    ViewportClicked { world_pos: glam::Vec2 },
    /// Selektionsmodus umschalten
    SelectionModeToggled,
    /// Zeichenwerkzeug wählen
    SetToolRequested { tool: EditorTool },
    /// Zeichenfarbe wählen
    SetColorRequested { color: Rgb },
    /// Strichbreite erhöhen
    IncreaseWidthRequested,
    /// Strichbreite verringern
    DecreaseWidthRequested,
    /// Clip-Window über die nächsten zwei Klicks definieren
    ClipWindowDefinitionRequested,
    /// Transformationsmodus für die Selektion wählen
    SetTransformModeRequested { mode: TransformMode },
    /// Selektion um einen Schritt verschieben
    TranslateStepRequested { direction: TranslateDirection },
    /// Selektion um einen Schritt drehen
    RotateStepRequested { counter_clockwise: bool },
    /// Selektion um einen Schritt skalieren
    ScaleStepRequested { grow: bool },
    /// Transformation der Selektion zurücksetzen
    ResetTransformRequested,
    /// Alles löschen (Szene, Transformationen, Selektion, Clip-Window)
    ClearAllRequested,
    /// Selektierte Form löschen
    DeleteSelectedRequested,
}
