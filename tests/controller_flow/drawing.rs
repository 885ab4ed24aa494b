use glam::Vec2;
use vektor2d_editor::{AppCommand, AppIntent, EditorTool, ShapeKind};

use super::{click, draw_two_click_shape, select_at, select_tool, setup};

#[test]
fn test_point_is_committed_on_first_click() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 15.0, 25.0);

    assert_eq!(state.scene.len(), 1);
    let shape = state.scene.get(0).expect("Punkt sollte existieren");
    assert_eq!(shape.kind(), ShapeKind::Point);
    assert_eq!(shape.control_points(), &[Vec2::new(15.0, 25.0)]);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::AddPointShape { .. })
    ));
}

#[test]
fn test_multi_click_tools_commit_on_second_click() {
    let (mut controller, mut state) = setup();

    for (tool, kind) in [
        (EditorTool::Line, ShapeKind::Line),
        (EditorTool::Rectangle, ShapeKind::Rectangle),
        (EditorTool::Ellipse, ShapeKind::Ellipse),
    ] {
        select_tool(&mut controller, &mut state, tool);
        let before = state.scene.len();

        click(&mut controller, &mut state, 0.0, 0.0);
        assert_eq!(state.scene.len(), before, "{kind:?}: puffert nur");

        click(&mut controller, &mut state, 40.0, 30.0);
        assert_eq!(state.scene.len(), before + 1);
        let shape = state.scene.get(before).expect("Form angelegt");
        assert_eq!(shape.kind(), kind);
        assert_eq!(
            shape.control_points(),
            &[Vec2::new(0.0, 0.0), Vec2::new(40.0, 30.0)]
        );
        assert!(state.editor.pending_clicks.is_empty());
    }
}

#[test]
fn test_tool_change_resets_click_buffer() {
    let (mut controller, mut state) = setup();

    select_tool(&mut controller, &mut state, EditorTool::Line);
    click(&mut controller, &mut state, 1.0, 1.0);
    select_tool(&mut controller, &mut state, EditorTool::Rectangle);
    click(&mut controller, &mut state, 2.0, 2.0);

    assert!(state.scene.is_empty());
    assert_eq!(state.editor.pending_clicks, vec![Vec2::new(2.0, 2.0)]);
}

#[test]
fn test_tool_keys_ignored_in_selection_mode() {
    let (mut controller, mut state) = setup();

    controller.handle_intent(&mut state, AppIntent::SelectionModeToggled);
    select_tool(&mut controller, &mut state, EditorTool::Ellipse);

    assert_eq!(state.editor.active_tool, EditorTool::Point);
}

#[test]
fn test_color_and_width_apply_to_new_shapes_only() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 0.0, 0.0);
    controller.handle_intent(
        &mut state,
        AppIntent::SetColorRequested {
            color: [1.0, 0.0, 0.0],
        },
    );
    controller.handle_intent(&mut state, AppIntent::IncreaseWidthRequested);
    controller.handle_intent(&mut state, AppIntent::IncreaseWidthRequested);
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Line,
        Vec2::ZERO,
        Vec2::splat(10.0),
    );

    let first = state.scene.get(0).expect("Punkt");
    let second = state.scene.get(1).expect("Linie");
    assert_eq!(first.color(), [1.0, 1.0, 1.0]);
    assert_eq!(first.width(), 1.0);
    assert_eq!(second.color(), [1.0, 0.0, 0.0]);
    assert_eq!(second.width(), 3.0);
}

#[test]
fn test_width_stays_within_limits() {
    let (mut controller, mut state) = setup();

    controller.handle_intent(&mut state, AppIntent::DecreaseWidthRequested);
    assert_eq!(state.editor.current_width, 1.0);

    for _ in 0..15 {
        controller.handle_intent(&mut state, AppIntent::IncreaseWidthRequested);
    }
    assert_eq!(state.editor.current_width, 10.0);
}

#[test]
fn test_clear_all_empties_scene_selection_and_window() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 5.0, 5.0);
    controller.handle_intent(&mut state, AppIntent::ClipWindowDefinitionRequested);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 50.0, 50.0);
    select_at(&mut controller, &mut state, Vec2::new(5.0, 5.0));
    assert!(state.selection.selected_shape_id.is_some());

    controller.handle_intent(&mut state, AppIntent::ClearAllRequested);

    assert!(state.scene.is_empty());
    assert_eq!(state.scene.transform_count(), 0);
    assert!(state.selection.selected_shape_id.is_none());
    assert!(state.clip_window.is_none());
    assert!(state.editor.selection_mode, "Modus bleibt erhalten");
}

#[test]
fn test_delete_selected_removes_shape_and_clears_selection() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 100.0, 0.0);
    select_at(&mut controller, &mut state, Vec2::new(0.0, 0.0));

    controller.handle_intent(&mut state, AppIntent::DeleteSelectedRequested);

    assert_eq!(state.scene.len(), 1);
    assert_eq!(
        state.scene.get(0).map(|shape| shape.control_points()[0]),
        Some(Vec2::new(100.0, 0.0))
    );
    assert!(state.selection.selected_shape_id.is_none());
}
