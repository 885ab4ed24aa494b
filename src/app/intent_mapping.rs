//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die zustandsabhängige Freigabe der Zustandsmaschine: Tasten,
//! die im aktuellen Modus wirkungslos sind, erzeugen keine Commands.

use super::state::TransformMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let has_selection = state.selected_index().is_some();
    let transform_mode = state.editor.transform_mode;

    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerMoved { world_pos } => {
            vec![AppCommand::SetPointerPosition { world_pos }]
        }
        AppIntent::ViewportClicked { world_pos } => map_click(state, world_pos),
        AppIntent::SelectionModeToggled => vec![AppCommand::ToggleSelectionMode],
        AppIntent::SetToolRequested { tool } => {
            if state.editor.selection_mode {
                log::debug!("Werkzeugwechsel im Selektionsmodus ignoriert");
                vec![]
            } else {
                vec![AppCommand::SetEditorTool { tool }]
            }
        }
        AppIntent::SetColorRequested { color } => vec![AppCommand::SetDrawColor { color }],
        AppIntent::IncreaseWidthRequested => vec![AppCommand::AdjustStrokeWidth {
            delta: state.options.width_step,
        }],
        AppIntent::DecreaseWidthRequested => vec![AppCommand::AdjustStrokeWidth {
            delta: -state.options.width_step,
        }],
        AppIntent::ClipWindowDefinitionRequested => vec![AppCommand::BeginClipWindowDefinition],
        AppIntent::SetTransformModeRequested { mode } if has_selection => {
            vec![AppCommand::SetTransformMode { mode }]
        }
        AppIntent::TranslateStepRequested { direction }
            if has_selection && transform_mode == Some(TransformMode::Translate) =>
        {
            vec![AppCommand::TranslateSelected {
                delta: direction.unit() * state.options.translate_step,
            }]
        }
        AppIntent::RotateStepRequested { counter_clockwise }
            if has_selection && transform_mode == Some(TransformMode::Rotate) =>
        {
            let step = state.options.rotate_step_deg;
            vec![AppCommand::RotateSelected {
                degrees: if counter_clockwise { step } else { -step },
            }]
        }
        AppIntent::ScaleStepRequested { grow }
            if has_selection && transform_mode == Some(TransformMode::Scale) =>
        {
            vec![AppCommand::ScaleSelected {
                factor: if grow {
                    state.options.scale_up_factor
                } else {
                    state.options.scale_down_factor
                },
            }]
        }
        AppIntent::ResetTransformRequested if has_selection => {
            vec![AppCommand::ResetSelectedTransform]
        }
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::DeleteSelectedRequested if has_selection => vec![AppCommand::DeleteSelected],

        // Ohne Selektion bzw. passenden Transformationsmodus wirkungslos
        AppIntent::SetTransformModeRequested { .. }
        | AppIntent::TranslateStepRequested { .. }
        | AppIntent::RotateStepRequested { .. }
        | AppIntent::ScaleStepRequested { .. }
        | AppIntent::ResetTransformRequested
        | AppIntent::DeleteSelectedRequested => vec![],
    }
}

/// Klick-Priorität: Fensterdefinition, dann Selektion, dann Werkzeug.
fn map_click(state: &AppState, world_pos: glam::Vec2) -> Vec<AppCommand> {
    let editor = &state.editor;
    if editor.window_defining {
        vec![AppCommand::AddClipWindowCorner { world_pos }]
    } else if editor.selection_mode {
        vec![AppCommand::SelectShapeAt {
            world_pos,
            tolerance: state.options.hit_tolerance,
        }]
    } else if editor.active_tool.clicks_to_commit() == 1 {
        vec![AppCommand::AddPointShape { world_pos }]
    } else {
        vec![AppCommand::AddToolClick { world_pos }]
    }
}
