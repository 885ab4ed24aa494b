//! Tastenbelegung des Editors.
//!
//! Bildet logische Tasten zustandslos auf `AppIntent`s ab; ob eine Taste im
//! aktuellen Modus wirkt, entscheidet das Intent-Mapping im App-Layer.

use crate::app::{AppIntent, EditorTool, TransformMode, TranslateDirection};

/// Logische Tasten, die der Editor auswertet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// V: Selektionsmodus umschalten
    ToggleSelection,
    /// 1–4: Werkzeug wählen
    Tool(EditorTool),
    /// R/G/B/W: Farbe wählen
    Color(ColorKey),
    /// `+`/`=`: Breite erhöhen
    WidthUp,
    /// `-`: Breite verringern
    WidthDown,
    /// Leertaste: Clip-Window definieren
    DefineWindow,
    /// T/O/S: Transformationsmodus
    Mode(TransformMode),
    /// Pfeiltasten
    Arrow(TranslateDirection),
    /// Q: +5°
    RotateCcw,
    /// E: −5°
    RotateCw,
    /// Z: ×1.1
    ScaleUp,
    /// X: ×0.9
    ScaleDown,
    /// Backspace: Transformation zurücksetzen
    ResetTransform,
    /// C: alles löschen
    ClearAll,
    /// Entf: Selektion löschen
    Delete,
}

/// Farbtasten der festen Palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    /// (1, 0, 0)
    Red,
    /// (0, 1, 0)
    Green,
    /// (0, 0, 1)
    Blue,
    /// (1, 1, 1)
    White,
}

impl ColorKey {
    /// RGB-Wert der Palettenfarbe.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            ColorKey::Red => [1.0, 0.0, 0.0],
            ColorKey::Green => [0.0, 1.0, 0.0],
            ColorKey::Blue => [0.0, 0.0, 1.0],
            ColorKey::White => [1.0, 1.0, 1.0],
        }
    }
}

impl EditorKey {
    /// Übersetzt eine egui-Taste; unbelegte Tasten liefern `None`.
    pub fn from_egui(key: egui::Key) -> Option<Self> {
        use egui::Key;

        let mapped = match key {
            Key::V => EditorKey::ToggleSelection,
            Key::Num1 => EditorKey::Tool(EditorTool::Point),
            Key::Num2 => EditorKey::Tool(EditorTool::Line),
            Key::Num3 => EditorKey::Tool(EditorTool::Rectangle),
            Key::Num4 => EditorKey::Tool(EditorTool::Ellipse),
            Key::R => EditorKey::Color(ColorKey::Red),
            Key::G => EditorKey::Color(ColorKey::Green),
            Key::B => EditorKey::Color(ColorKey::Blue),
            Key::W => EditorKey::Color(ColorKey::White),
            Key::Plus | Key::Equals => EditorKey::WidthUp,
            Key::Minus => EditorKey::WidthDown,
            Key::Space => EditorKey::DefineWindow,
            Key::T => EditorKey::Mode(TransformMode::Translate),
            Key::O => EditorKey::Mode(TransformMode::Rotate),
            Key::S => EditorKey::Mode(TransformMode::Scale),
            Key::ArrowUp => EditorKey::Arrow(TranslateDirection::Up),
            Key::ArrowDown => EditorKey::Arrow(TranslateDirection::Down),
            Key::ArrowLeft => EditorKey::Arrow(TranslateDirection::Left),
            Key::ArrowRight => EditorKey::Arrow(TranslateDirection::Right),
            Key::Q => EditorKey::RotateCcw,
            Key::E => EditorKey::RotateCw,
            Key::Z => EditorKey::ScaleUp,
            Key::X => EditorKey::ScaleDown,
            Key::Backspace => EditorKey::ResetTransform,
            Key::C => EditorKey::ClearAll,
            Key::Delete => EditorKey::Delete,
            _ => return None,
        };
        Some(mapped)
    }
}

/// Bildet eine logische Taste auf den zugehörigen Intent ab.
pub fn intent_for_key(key: EditorKey) -> AppIntent {
    match key {
        EditorKey::ToggleSelection => AppIntent::SelectionModeToggled,
        EditorKey::Tool(tool) => AppIntent::SetToolRequested { tool },
        EditorKey::Color(color) => AppIntent::SetColorRequested { color: color.rgb() },
        EditorKey::WidthUp => AppIntent::IncreaseWidthRequested,
        EditorKey::WidthDown => AppIntent::DecreaseWidthRequested,
        EditorKey::DefineWindow => AppIntent::ClipWindowDefinitionRequested,
        EditorKey::Mode(mode) => AppIntent::SetTransformModeRequested { mode },
        EditorKey::Arrow(direction) => AppIntent::TranslateStepRequested { direction },
        EditorKey::RotateCcw => AppIntent::RotateStepRequested {
            counter_clockwise: true,
        },
        EditorKey::RotateCw => AppIntent::RotateStepRequested {
            counter_clockwise: false,
        },
        EditorKey::ScaleUp => AppIntent::ScaleStepRequested { grow: true },
        EditorKey::ScaleDown => AppIntent::ScaleStepRequested { grow: false },
        EditorKey::ResetTransform => AppIntent::ResetTransformRequested,
        EditorKey::ClearAll => AppIntent::ClearAllRequested,
        EditorKey::Delete => AppIntent::DeleteSelectedRequested,
    }
}

/// Tastenübersicht (Taste, Wirkung) für Log und Hilfe.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("V", "Selektionsmodus an/aus"),
    ("1-4", "Werkzeug: Punkt, Linie, Rechteck, Ellipse"),
    ("R/G/B/W", "Farbe: Rot, Grün, Blau, Weiß"),
    ("+ / -", "Strichbreite erhöhen/verringern (1-10)"),
    ("Leertaste", "Clip-Window über zwei Klicks definieren"),
    ("T/O/S", "Modus: Verschieben, Drehen, Skalieren"),
    ("Pfeiltasten", "Verschieben (Translate)"),
    ("Q/E", "Drehen +5° / -5° (Rotate)"),
    ("Z/X", "Skalieren x1.1 / x0.9 (Scale)"),
    ("Backspace", "Transformation zurücksetzen"),
    ("C", "Alles löschen"),
    ("Entf", "Selektierte Form löschen"),
];

/// Schreibt die Tastenübersicht einmalig ins Log.
pub fn log_key_bindings() {
    log::info!("Tastenbelegung:");
    for (key, action) in KEY_BINDINGS {
        log::info!("  {key:<12} {action}");
    }
}
