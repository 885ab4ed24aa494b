//! Use-Case-Funktionen für die Definition des Clip-Windows.

use crate::app::AppState;
use crate::core::ClipRect;

/// Startet die Fensterdefinition und verwirft gepufferte Klicks.
pub fn begin_definition(state: &mut AppState) {
    state.editor.window_defining = true;
    state.editor.pending_clicks.clear();
    log::info!("Clip-Window definieren: zwei Ecken anklicken");
}

/// Erfasst eine Fensterecke; die zweite Ecke schließt die Definition ab.
///
/// Identische Ecken ergeben ein entartetes Fenster, gegen das jede Linie verworfen wird.
pub fn add_corner(state: &mut AppState, world_pos: glam::Vec2) {
    if !state.editor.window_defining {
        return;
    }
    state.editor.pending_clicks.push(world_pos);
    let corners = match state.editor.pending_clicks.as_slice() {
        [first, second] => Some((*first, *second)),
        _ => None,
    };
    if let Some((first, second)) = corners {
        let rect = ClipRect::from_corners(first, second);
        state.clip_window = Some(rect);
        state.editor.window_defining = false;
        state.editor.pending_clicks.clear();
        log::info!(
            "Clip-Window definiert: ({:.1}, {:.1}) bis ({:.1}, {:.1})",
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y
        );
    }
}
