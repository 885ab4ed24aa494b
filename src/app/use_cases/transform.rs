//! Use-Case-Funktionen für die Transformation der selektierten Form.

use crate::app::{AppState, TransformMode};
use crate::core::Transform;

/// Setzt den Transformationsmodus (nur mit gültiger Selektion).
pub fn set_transform_mode(state: &mut AppState, mode: TransformMode) {
    if state.validated_selection().is_none() {
        return;
    }
    state.editor.transform_mode = Some(mode);
    log::info!("Transformationsmodus: {}", mode.label());
}

/// Wendet `edit` auf die (ggf. neu angelegte) Transformation der Selektion an.
fn edit_selected_transform(state: &mut AppState, edit: impl FnOnce(&mut Transform)) {
    let Some((_, id)) = state.validated_selection() else {
        return;
    };
    if let Some(transform) = state.scene.transform_mut_or_identity(id) {
        edit(transform);
        log::debug!("Transformation {id}: {transform:?}");
    }
}

/// Verschiebt die Selektion.
pub fn translate_selected(state: &mut AppState, delta: glam::Vec2) {
    edit_selected_transform(state, |transform| transform.translate(delta));
}

/// Dreht die Selektion um `degrees` (gegen den Uhrzeigersinn positiv).
pub fn rotate_selected(state: &mut AppState, degrees: f32) {
    edit_selected_transform(state, |transform| transform.rotate(degrees));
}

/// Skaliert die Selektion multiplikativ.
pub fn scale_selected(state: &mut AppState, factor: f32) {
    edit_selected_transform(state, |transform| transform.scale_by(factor));
}

/// Entfernt die Transformation der Selektion; der Modus bleibt.
pub fn reset_selected(state: &mut AppState) {
    let Some((index, id)) = state.validated_selection() else {
        return;
    };
    if state.scene.reset_transform(id) {
        log::info!("Transformation von Objekt {} zurückgesetzt", index + 1);
    }
}
