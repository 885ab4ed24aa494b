//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command);
        }
    }

    /// Faltet alle Intents eines Frames nacheinander in den State.
    pub fn handle_intents(
        &mut self,
        state: &mut AppState,
        intents: impl IntoIterator<Item = AppIntent>,
    ) {
        for intent in intents {
            self.handle_intent(state, intent);
        }
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, state: &mut AppState, command: AppCommand) {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Anwendungssteuerung & Viewport ===
            AppCommand::RequestExit => handlers::view::request_exit(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetPointerPosition { world_pos } => {
                handlers::view::set_pointer_position(state, world_pos)
            }

            // === Selektion ===
            AppCommand::ToggleSelectionMode => handlers::selection::toggle_mode(state),
            AppCommand::SelectShapeAt {
                world_pos,
                tolerance,
            } => handlers::selection::select_shape_at(state, world_pos, tolerance),

            // === Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::SetDrawColor { color } => handlers::editing::set_draw_color(state, color),
            AppCommand::AdjustStrokeWidth { delta } => {
                handlers::editing::adjust_stroke_width(state, delta)
            }
            AppCommand::AddPointShape { world_pos } => {
                handlers::editing::add_point(state, world_pos)
            }
            AppCommand::AddToolClick { world_pos } => {
                handlers::editing::add_tool_click(state, world_pos)
            }
            AppCommand::ClearAll => handlers::editing::clear_all(state),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),

            // === Clip-Window ===
            AppCommand::BeginClipWindowDefinition => handlers::clip_window::begin_definition(state),
            AppCommand::AddClipWindowCorner { world_pos } => {
                handlers::clip_window::add_corner(state, world_pos)
            }

            // === Transformation ===
            AppCommand::SetTransformMode { mode } => handlers::transform::set_mode(state, mode),
            AppCommand::TranslateSelected { delta } => handlers::transform::translate(state, delta),
            AppCommand::RotateSelected { degrees } => handlers::transform::rotate(state, degrees),
            AppCommand::ScaleSelected { factor } => handlers::transform::scale(state, factor),
            AppCommand::ResetSelectedTransform => handlers::transform::reset(state),
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
