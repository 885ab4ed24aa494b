use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Letzte Zeigerposition (Y-up-Weltkoordinaten) für die Live-Vorschau
    pub pointer_pos: Option<Vec2>,
}

impl ViewState {
    /// Erstellt den View-Zustand für eine Startgröße.
    pub fn new(viewport_size: [f32; 2]) -> Self {
        Self {
            viewport_size,
            pointer_pos: None,
        }
    }
}
