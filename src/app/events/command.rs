use super::super::state::{EditorTool, TransformMode};
use crate::core::Rgb;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Zeigerposition für die Live-Vorschau merken
    SetPointerPosition { world_pos: glam::Vec2 },
    /// Selektionsmodus umschalten (Ausschalten hebt die Selektion auf)
    ToggleSelectionMode,
    /// Zeichenwerkzeug wechseln (verwirft gepufferte Klicks)
    SetEditorTool { tool: EditorTool },
    /// Zeichenfarbe setzen
    SetDrawColor { color: Rgb },
    /// Strichbreite um `delta` ändern (begrenzt)
    AdjustStrokeWidth { delta: f32 },
    /// Fensterdefinition starten (verwirft gepufferte Klicks)
    BeginClipWindowDefinition,
    /// Ecke des Clip-Windows erfassen
    AddClipWindowCorner { world_pos: glam::Vec2 },
    /// Oberste Form unter dem Klick selektieren oder Selektion aufheben
    SelectShapeAt {
        world_pos: glam::Vec2,
        tolerance: f32,
    },
    /// Punkt sofort anlegen
    AddPointShape { world_pos: glam::Vec2 },
    /// Klick für Mehrfach-Klick-Werkzeug puffern bzw. Form anlegen
    AddToolClick { world_pos: glam::Vec2 },
    /// Transformationsmodus setzen
    SetTransformMode { mode: TransformMode },
    /// Selektion verschieben
    TranslateSelected { delta: glam::Vec2 },
    /// Selektion drehen (Grad, gegen den Uhrzeigersinn positiv)
    RotateSelected { degrees: f32 },
    /// Selektion skalieren (multiplikativ)
    ScaleSelected { factor: f32 },
    /// Transformation der Selektion entfernen
    ResetSelectedTransform,
    /// Szene, Transformationen, Selektion und Clip-Window leeren
    ClearAll,
    /// Selektierte Form löschen
    DeleteSelected,
}
