//! Handler für das Clip-Window.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet die Fensterdefinition.
pub fn begin_definition(state: &mut AppState) {
    use_cases::clip_window::begin_definition(state);
}

/// Erfasst eine Fensterecke.
pub fn add_corner(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::clip_window::add_corner(state, world_pos);
}
