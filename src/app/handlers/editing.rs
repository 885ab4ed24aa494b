//! Handler für Zeichenwerkzeuge, Stil und Löschen.

use crate::app::use_cases;
use crate::app::{AppState, EditorTool};
use crate::core::Rgb;

/// Wechselt das Zeichenwerkzeug.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    use_cases::drawing::set_tool(state, tool);
}

/// Setzt die Zeichenfarbe.
pub fn set_draw_color(state: &mut AppState, color: Rgb) {
    use_cases::drawing::set_color(state, color);
}

/// Ändert die Strichbreite.
pub fn adjust_stroke_width(state: &mut AppState, delta: f32) {
    use_cases::drawing::adjust_width(state, delta);
}

/// Legt einen Punkt an.
pub fn add_point(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::drawing::add_point(state, world_pos);
}

/// Verarbeitet einen Klick eines Mehrfach-Klick-Werkzeugs.
pub fn add_tool_click(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::drawing::add_tool_click(state, world_pos);
}

/// Leert die Szene samt Selektion und Clip-Window.
pub fn clear_all(state: &mut AppState) {
    use_cases::drawing::clear_all(state);
}

/// Löscht die selektierte Form.
pub fn delete_selected(state: &mut AppState) {
    use_cases::drawing::delete_selected(state);
}
