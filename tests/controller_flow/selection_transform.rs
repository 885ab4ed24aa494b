use approx::assert_relative_eq;
use glam::Vec2;
use vektor2d_editor::{AppIntent, DrawLayer, EditorTool, TransformMode, TranslateDirection};

use super::{click, draw_two_click_shape, select_at, setup};

#[test]
fn test_rectangle_selected_on_edge_but_not_interior() {
    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Rectangle,
        Vec2::new(0.0, 0.0),
        Vec2::new(20.0, 20.0),
    );
    let id = state.scene.get(0).map(|shape| shape.id());

    select_at(&mut controller, &mut state, Vec2::new(10.0, 0.0));
    assert_eq!(state.selection.selected_shape_id, id);

    click(&mut controller, &mut state, 10.0, 10.0);
    // (10,10) liegt genau 10 von jeder Kante entfernt: innerhalb der Toleranz
    assert_eq!(state.selection.selected_shape_id, id);

    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Rectangle,
        Vec2::new(0.0, 0.0),
        Vec2::new(60.0, 60.0),
    );
    select_at(&mut controller, &mut state, Vec2::new(30.0, 30.0));
    assert!(state.selection.selected_shape_id.is_none());
    assert_eq!(state.scene.len(), 1, "Selektion verändert die Szene nicht");
}

#[test]
fn test_translate_three_steps_then_reset() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, 0.0, 0.0);
    select_at(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    let id = state.selection.selected_shape_id.expect("Punkt selektiert");

    controller.handle_intent(
        &mut state,
        AppIntent::SetTransformModeRequested {
            mode: TransformMode::Translate,
        },
    );
    for _ in 0..3 {
        controller.handle_intent(
            &mut state,
            AppIntent::TranslateStepRequested {
                direction: TranslateDirection::Right,
            },
        );
    }

    let translation = state.scene.transform(id).map(|t| t.translation);
    assert_eq!(translation, Some(Vec2::new(30.0, 0.0)));

    controller.handle_intent(&mut state, AppIntent::ResetTransformRequested);

    assert!(state.scene.transform(id).is_none());
    assert_eq!(state.editor.transform_mode, Some(TransformMode::Translate));
    let scene = controller.build_render_scene(&state);
    let point = scene
        .commands_in(DrawLayer::Shape)
        .next()
        .expect("Punkt wird gezeichnet");
    assert_eq!(point.vertices, vec![Vec2::new(0.0, 0.0)]);
}

#[test]
fn test_scale_steps_compound() {
    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Line,
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
    );
    select_at(&mut controller, &mut state, Vec2::new(50.0, 0.0));
    controller.handle_intent(
        &mut state,
        AppIntent::SetTransformModeRequested {
            mode: TransformMode::Scale,
        },
    );
    controller.handle_intent(&mut state, AppIntent::ScaleStepRequested { grow: true });
    controller.handle_intent(&mut state, AppIntent::ScaleStepRequested { grow: true });

    let transform = state.scene.transform_at(0).copied().unwrap_or_default();
    assert_relative_eq!(transform.scale, 1.21, epsilon = 1e-5);

    let points = state.scene.transformed_points(0).expect("Linie");
    assert_relative_eq!(points[1].x - points[0].x, 121.0, epsilon = 1e-3);
}

#[test]
fn test_rotate_steps_accumulate_in_degrees() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, 10.0, 10.0);
    select_at(&mut controller, &mut state, Vec2::new(10.0, 10.0));
    controller.handle_intent(
        &mut state,
        AppIntent::SetTransformModeRequested {
            mode: TransformMode::Rotate,
        },
    );

    for _ in 0..4 {
        controller.handle_intent(
            &mut state,
            AppIntent::RotateStepRequested {
                counter_clockwise: true,
            },
        );
    }
    controller.handle_intent(
        &mut state,
        AppIntent::RotateStepRequested {
            counter_clockwise: false,
        },
    );

    let transform = state.scene.transform_at(0).copied().unwrap_or_default();
    assert_relative_eq!(transform.rotation_deg, 15.0);
}

#[test]
fn test_steps_without_matching_mode_do_nothing() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, 0.0, 0.0);
    select_at(&mut controller, &mut state, Vec2::new(0.0, 0.0));

    controller.handle_intent(
        &mut state,
        AppIntent::TranslateStepRequested {
            direction: TranslateDirection::Up,
        },
    );
    controller.handle_intent(
        &mut state,
        AppIntent::SetTransformModeRequested {
            mode: TransformMode::Rotate,
        },
    );
    controller.handle_intent(&mut state, AppIntent::ScaleStepRequested { grow: true });

    assert_eq!(state.scene.transform_count(), 0);
}

#[test]
fn test_transform_mode_requires_selection() {
    let (mut controller, mut state) = setup();

    controller.handle_intent(
        &mut state,
        AppIntent::SetTransformModeRequested {
            mode: TransformMode::Scale,
        },
    );

    assert!(state.editor.transform_mode.is_none());
}

#[test]
fn test_toggling_selection_mode_off_clears_selection() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, 0.0, 0.0);
    select_at(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    assert!(state.selection.selected_shape_id.is_some());

    controller.handle_intent(&mut state, AppIntent::SelectionModeToggled);

    assert!(!state.editor.selection_mode);
    assert!(state.selection.selected_shape_id.is_none());
}

#[test]
fn test_delete_keeps_transforms_with_their_shapes() {
    let (mut controller, mut state) = setup();
    for x in [0.0, 100.0, 200.0, 300.0] {
        click(&mut controller, &mut state, x, 0.0);
    }

    // Transformationen an Index 0, 2 und 3 mit unterscheidbarer Verschiebung
    for (x, steps) in [(0.0, 1), (200.0, 2), (300.0, 3)] {
        select_at(&mut controller, &mut state, Vec2::new(x, 0.0));
        controller.handle_intent(
            &mut state,
            AppIntent::SetTransformModeRequested {
                mode: TransformMode::Translate,
            },
        );
        for _ in 0..steps {
            controller.handle_intent(
                &mut state,
                AppIntent::TranslateStepRequested {
                    direction: TranslateDirection::Up,
                },
            );
        }
    }

    select_at(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    controller.handle_intent(&mut state, AppIntent::DeleteSelectedRequested);

    let dy = |index: usize| state.scene.transform_at(index).map(|t| t.translation.y);
    assert_eq!(state.scene.len(), 3);
    assert_eq!(state.scene.transform_count(), 3);
    assert_eq!(dy(0), Some(10.0));
    assert_eq!(dy(1), Some(20.0));
    assert_eq!(dy(2), Some(30.0));
}
