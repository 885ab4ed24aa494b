//! Use-Case-Funktionen für Zeichenwerkzeuge, Farbe, Breite und Löschen.

use crate::app::{AppState, EditorTool};
use crate::core::{Rgb, ShapeGeometry};

/// Wechselt das Zeichenwerkzeug und verwirft gepufferte Klicks.
pub fn set_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.active_tool = tool;
    state.editor.pending_clicks.clear();
    log::info!("Werkzeug: {}", tool.label());
}

/// Setzt die Farbe für neue Formen.
pub fn set_color(state: &mut AppState, color: Rgb) {
    state.editor.current_color = color;
    log::info!("Farbe: ({:.1}, {:.1}, {:.1})", color[0], color[1], color[2]);
}

/// Ändert die Breite für neue Formen, begrenzt auf die konfigurierten Grenzen.
pub fn adjust_width(state: &mut AppState, delta: f32) {
    let width = state.options.clamp_width(state.editor.current_width + delta);
    state.editor.current_width = width;
    log::info!("Breite: {width}");
}

/// Legt sofort einen Punkt an.
pub fn add_point(state: &mut AppState, world_pos: glam::Vec2) {
    commit_shape(state, ShapeGeometry::point(world_pos));
}

/// Puffert einen Klick des aktiven Werkzeugs und legt die Form an, sobald
/// genug Klicks vorliegen.
pub fn add_tool_click(state: &mut AppState, world_pos: glam::Vec2) {
    let tool = state.editor.active_tool;
    state.editor.pending_clicks.push(world_pos);
    if state.editor.pending_clicks.len() < tool.clicks_to_commit() {
        log::debug!("Erster Punkt gepuffert: ({:.1}, {:.1})", world_pos.x, world_pos.y);
        return;
    }

    let clicks = std::mem::take(&mut state.editor.pending_clicks);
    let geometry = match (tool, clicks.as_slice()) {
        (EditorTool::Line, [a, b]) => ShapeGeometry::line(*a, *b),
        (EditorTool::Rectangle, [a, b]) => ShapeGeometry::rectangle(*a, *b),
        (EditorTool::Ellipse, [a, b]) => ShapeGeometry::ellipse(*a, *b),
        (_, [.., last]) => ShapeGeometry::point(*last),
        (_, []) => return,
    };
    commit_shape(state, geometry);
}

fn commit_shape(state: &mut AppState, geometry: ShapeGeometry) {
    let kind = geometry.kind();
    let id = state.scene.add_shape(
        geometry,
        state.editor.current_color,
        state.editor.current_width,
    );
    log::info!(
        "Objekt {} angelegt ({}, ID {})",
        state.scene.len(),
        kind.name(),
        id
    );
}

/// Leert Szene, Transformationen, Selektion und Clip-Window.
///
/// Modus, Werkzeug, Farbe, Breite und gepufferte Klicks bleiben erhalten.
pub fn clear_all(state: &mut AppState) {
    state.scene.clear();
    state.selection.clear();
    state.clip_window = None;
    log::info!("Alles gelöscht");
}

/// Löscht die selektierte Form samt Transformation und hebt die Selektion auf.
pub fn delete_selected(state: &mut AppState) {
    let Some((index, _)) = state.validated_selection() else {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    };
    if let Some(shape) = state.scene.remove_at(index) {
        log::info!("Objekt {} gelöscht ({})", index + 1, shape.kind().name());
    }
    state.selection.clear();
}
