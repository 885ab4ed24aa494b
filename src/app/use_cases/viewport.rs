//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Merkt die letzte Zeigerposition für die Live-Vorschau.
pub fn set_pointer_position(state: &mut AppState, world_pos: glam::Vec2) {
    state.view.pointer_pos = Some(world_pos);
}
