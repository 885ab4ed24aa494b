//! Gemeinsame Hilfen der Controller-Flow-Tests.

mod clip_window;
mod drawing;
mod selection_transform;

use glam::Vec2;
use vektor2d_editor::{AppController, AppIntent, AppState, EditorTool};

/// Frischer Controller und State.
pub fn setup() -> (AppController, AppState) {
    (AppController::new(), AppState::new())
}

/// Klick an einer Weltposition (Y-up).
pub fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller.handle_intent(
        state,
        AppIntent::ViewportClicked {
            world_pos: Vec2::new(x, y),
        },
    );
}

/// Wählt ein Werkzeug.
pub fn select_tool(controller: &mut AppController, state: &mut AppState, tool: EditorTool) {
    controller.handle_intent(state, AppIntent::SetToolRequested { tool });
}

/// Zeichnet eine Form mit zwei Klicks.
pub fn draw_two_click_shape(
    controller: &mut AppController,
    state: &mut AppState,
    tool: EditorTool,
    a: Vec2,
    b: Vec2,
) {
    select_tool(controller, state, tool);
    click(controller, state, a.x, a.y);
    click(controller, state, b.x, b.y);
}

/// Schaltet den Selektionsmodus an und klickt auf `p`.
pub fn select_at(controller: &mut AppController, state: &mut AppState, p: Vec2) {
    if !state.editor.selection_mode {
        controller.handle_intent(state, AppIntent::SelectionModeToggled);
    }
    click(controller, state, p.x, p.y);
}
