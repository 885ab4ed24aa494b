//! Use-Case-Funktionen für Selektionsmodus und Hit-Test-Selektion.

use crate::app::AppState;
use crate::core::hit_test_with_ellipse_band;

/// Schaltet den Selektionsmodus um; Ausschalten hebt die Selektion auf.
pub fn toggle_selection_mode(state: &mut AppState) {
    state.editor.selection_mode = !state.editor.selection_mode;
    if state.editor.selection_mode {
        log::info!("Selektionsmodus: AN");
    } else {
        state.selection.clear();
        log::info!("Selektionsmodus: AUS");
    }
}

/// Selektiert die oberste Form unter `world_pos` oder hebt die Selektion auf.
///
/// Die Szene wird dabei nicht verändert.
pub fn select_shape_at(state: &mut AppState, world_pos: glam::Vec2, tolerance: f32) {
    let hit = hit_test_with_ellipse_band(
        &state.scene,
        world_pos,
        tolerance,
        state.options.ellipse_band_tolerance,
    );

    match hit.and_then(|index| state.scene.get(index).map(|shape| (index, shape))) {
        Some((index, shape)) => {
            log::info!("Objekt {} ausgewählt ({})", index + 1, shape.kind().name());
            state.selection.select(shape.id());
        }
        None => {
            state.selection.clear();
            log::info!("Kein Objekt ausgewählt");
        }
    }
}
