//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet den Selektionsmodus um.
pub fn toggle_mode(state: &mut AppState) {
    use_cases::selection::toggle_selection_mode(state);
}

/// Selektiert die oberste Form unter dem Klickpunkt.
pub fn select_shape_at(state: &mut AppState, world_pos: glam::Vec2, tolerance: f32) {
    use_cases::selection::select_shape_at(state, world_pos, tolerance);
}
