use glam::Vec2;

use crate::core::Rgb;
use crate::shared::EditorOptions;

/// Aktives Zeichenwerkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Punkt mit einem Klick setzen
    #[default]
    Point,
    /// Linie aus zwei Klicks
    Line,
    /// Rechteck aus zwei Gegenecken
    Rectangle,
    /// Ellipse aus zwei Ecken der Bounding-Box
    Ellipse,
}

impl EditorTool {
    /// Anzahl der Klicks bis zum Anlegen der Form.
    pub fn clicks_to_commit(self) -> usize {
        match self {
            EditorTool::Point => 1,
            EditorTool::Line | EditorTool::Rectangle | EditorTool::Ellipse => 2,
        }
    }

    /// Großgeschriebener Name für die Statuszeile.
    pub fn label(self) -> &'static str {
        match self {
            EditorTool::Point => "POINT",
            EditorTool::Line => "LINE",
            EditorTool::Rectangle => "RECTANGLE",
            EditorTool::Ellipse => "ELLIPSE",
        }
    }
}

/// Bearbeitungsmodus für die Transformation der selektierten Form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    /// Pfeiltasten verschieben
    Translate,
    /// Q/E drehen
    Rotate,
    /// Z/X skalieren
    Scale,
}

impl TransformMode {
    /// Großgeschriebener Name für die Statuszeile.
    pub fn label(self) -> &'static str {
        match self {
            TransformMode::Translate => "TRANSLATE",
            TransformMode::Rotate => "ROTATE",
            TransformMode::Scale => "SCALE",
        }
    }
}

/// Zustand der Interaktions-Zustandsmaschine
#[derive(Debug, Clone)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Klicks selektieren statt zu zeichnen
    pub selection_mode: bool,
    /// Aktiver Transformationsmodus (`None` = keiner)
    pub transform_mode: Option<TransformMode>,
    /// Die nächsten zwei Klicks definieren das Clip-Window
    pub window_defining: bool,
    /// Gepufferte Klicks für Mehrfach-Klick-Werkzeuge bzw. Fensterdefinition
    pub pending_clicks: Vec<Vec2>,
    /// Farbe für neue Formen
    pub current_color: Rgb,
    /// Breite für neue Formen
    pub current_width: f32,
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorToolState {
    /// Erstellt den Startzustand mit Standard-Optionen (Punkt-Werkzeug aktiv).
    pub fn new() -> Self {
        Self::with_options(&EditorOptions::default())
    }

    /// Erstellt den Startzustand mit Farbe und Breite aus den Optionen.
    pub fn with_options(options: &EditorOptions) -> Self {
        Self {
            active_tool: EditorTool::Point,
            selection_mode: false,
            transform_mode: None,
            window_defining: false,
            pending_clicks: Vec::with_capacity(2),
            current_color: options.default_color,
            current_width: options.clamp_width(options.default_width),
        }
    }

    /// Erster gepufferter Klick eines Mehrfach-Klick-Werkzeugs, falls genau einer vorliegt.
    pub fn single_pending_click(&self) -> Option<Vec2> {
        match self.pending_clicks.as_slice() {
            [first] => Some(*first),
            _ => None,
        }
    }
}
