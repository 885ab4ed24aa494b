//! Handler für die Transformation der Selektion.

use crate::app::use_cases;
use crate::app::{AppState, TransformMode};

/// Setzt den Transformationsmodus.
pub fn set_mode(state: &mut AppState, mode: TransformMode) {
    use_cases::transform::set_transform_mode(state, mode);
}

/// Verschiebt die Selektion.
pub fn translate(state: &mut AppState, delta: glam::Vec2) {
    use_cases::transform::translate_selected(state, delta);
}

/// Dreht die Selektion.
pub fn rotate(state: &mut AppState, degrees: f32) {
    use_cases::transform::rotate_selected(state, degrees);
}

/// Skaliert die Selektion.
pub fn scale(state: &mut AppState, factor: f32) {
    use_cases::transform::scale_selected(state, factor);
}

/// Setzt die Transformation der Selektion zurück.
pub fn reset(state: &mut AppState) {
    use_cases::transform::reset_selected(state);
}
