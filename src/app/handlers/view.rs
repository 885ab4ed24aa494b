//! Handler für Viewport, Zeiger und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Merkt die Zeigerposition.
pub fn set_pointer_position(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::viewport::set_pointer_position(state, world_pos);
}

/// Signalisiert dem Host das Beenden.
///
/// Ein gepufferter erster Klick wird verworfen, nie angelegt.
pub fn request_exit(state: &mut AppState) {
    state.editor.pending_clicks.clear();
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
