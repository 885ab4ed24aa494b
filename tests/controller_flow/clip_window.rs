use glam::Vec2;
use vektor2d_editor::{
    AppController, AppIntent, AppState, DrawLayer, DrawPrimitive, EditorTool, TransformMode,
    TranslateDirection,
};

use super::{click, draw_two_click_shape, select_at, setup};

fn define_window(controller: &mut AppController, state: &mut AppState, a: Vec2, b: Vec2) {
    controller.handle_intent(state, AppIntent::ClipWindowDefinitionRequested);
    click(controller, state, a.x, a.y);
    click(controller, state, b.x, b.y);
}

fn select_tool_line_and_click(controller: &mut AppController, state: &mut AppState) {
    controller.handle_intent(
        state,
        AppIntent::SetToolRequested {
            tool: EditorTool::Line,
        },
    );
    click(controller, state, 5.0, 5.0);
    assert_eq!(state.editor.pending_clicks.len(), 1);
}

/// Verschiebt die Selektion schrittweise in eine Richtung.
fn translate_selected(
    controller: &mut AppController,
    state: &mut AppState,
    direction: TranslateDirection,
    steps: usize,
) {
    controller.handle_intent(
        state,
        AppIntent::SetTransformModeRequested {
            mode: TransformMode::Translate,
        },
    );
    for _ in 0..steps {
        controller.handle_intent(state, AppIntent::TranslateStepRequested { direction });
    }
}

#[test]
fn test_line_is_clipped_and_recolored_by_window() {
    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Line,
        Vec2::new(10.0, 10.0),
        Vec2::new(100.0, 10.0),
    );
    define_window(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );

    let scene = controller.build_render_scene(&state);

    let line = scene
        .commands_in(DrawLayer::Shape)
        .next()
        .expect("Linie wird gezeichnet");
    assert_eq!(line.primitive, DrawPrimitive::Polyline);
    assert_eq!(
        line.vertices,
        vec![Vec2::new(10.0, 10.0), Vec2::new(50.0, 10.0)]
    );
    assert_eq!(line.color, [0.0, 1.0, 0.0]);
    assert_eq!(
        state.scene.get(0).map(|shape| shape.color()),
        Some([1.0, 1.0, 1.0]),
        "gespeicherte Farbe bleibt erhalten"
    );
    assert_eq!(scene.commands_in(DrawLayer::ClipWindow).count(), 1);
}

#[test]
fn test_window_corners_do_not_create_shapes() {
    let (mut controller, mut state) = setup();
    select_tool_line_and_click(&mut controller, &mut state);

    define_window(
        &mut controller,
        &mut state,
        Vec2::new(50.0, 50.0),
        Vec2::new(0.0, 0.0),
    );

    assert!(state.scene.is_empty());
    assert!(state.editor.pending_clicks.is_empty());
    assert!(!state.editor.window_defining);
    let window = state.clip_window.expect("Fenster definiert");
    assert_eq!(window.min(), Vec2::ZERO);
    assert_eq!(window.max(), Vec2::splat(50.0));
}

#[test]
fn test_line_outside_window_is_not_drawn() {
    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Line,
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 150.0),
    );
    define_window(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );

    let scene = controller.build_render_scene(&state);

    assert_eq!(scene.commands_in(DrawLayer::Shape).count(), 0);
    assert_eq!(state.scene.len(), 1);
}

#[test]
fn test_degenerate_window_rejects_every_line() {
    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Line,
        Vec2::new(0.0, 20.0),
        Vec2::new(100.0, 20.0),
    );
    define_window(
        &mut controller,
        &mut state,
        Vec2::new(30.0, 30.0),
        Vec2::new(30.0, 30.0),
    );

    let scene = controller.build_render_scene(&state);

    assert_eq!(scene.commands_in(DrawLayer::Shape).count(), 0);
}

#[test]
fn test_points_inside_window_are_recolored() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 80.0, 80.0);
    define_window(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );

    let scene = controller.build_render_scene(&state);

    let colors: Vec<_> = scene
        .commands_in(DrawLayer::Shape)
        .map(|command| command.color)
        .collect();
    assert_eq!(colors, vec![[0.0, 1.0, 0.0], [1.0, 1.0, 1.0]]);
}

#[test]
fn test_rectangle_inside_window_keeps_its_color() {
    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Rectangle,
        Vec2::new(10.0, 10.0),
        Vec2::new(20.0, 20.0),
    );
    define_window(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );

    let scene = controller.build_render_scene(&state);

    let rect = scene
        .commands_in(DrawLayer::Shape)
        .next()
        .expect("Rechteck wird gezeichnet");
    assert_eq!(rect.primitive, DrawPrimitive::ClosedPolygon);
    assert_eq!(rect.color, [1.0, 1.0, 1.0]);
}

#[test]
fn test_line_moved_into_window_is_clipped_in_transformed_space() {
    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Line,
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 100.0),
    );
    define_window(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );
    let untransformed = controller.build_render_scene(&state);
    assert_eq!(untransformed.commands_in(DrawLayer::Shape).count(), 0);

    select_at(&mut controller, &mut state, Vec2::new(150.0, 100.0));
    translate_selected(&mut controller, &mut state, TranslateDirection::Left, 9);
    translate_selected(&mut controller, &mut state, TranslateDirection::Down, 8);

    let scene = controller.build_render_scene(&state);

    let line = scene
        .commands_in(DrawLayer::Shape)
        .next()
        .expect("verschobene Linie wird gezeichnet");
    assert_eq!(
        line.vertices,
        vec![Vec2::new(10.0, 20.0), Vec2::new(50.0, 20.0)]
    );
    assert_eq!(line.color, [0.0, 1.0, 0.0]);
}

#[test]
fn test_point_moved_out_of_window_keeps_its_color() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, 10.0, 10.0);
    define_window(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );

    select_at(&mut controller, &mut state, Vec2::new(10.0, 10.0));
    translate_selected(&mut controller, &mut state, TranslateDirection::Right, 10);

    let scene = controller.build_render_scene(&state);

    let point = scene
        .commands_in(DrawLayer::Shape)
        .next()
        .expect("Punkt wird gezeichnet");
    assert_eq!(point.vertices, vec![Vec2::new(110.0, 10.0)]);
    assert_eq!(point.color, [1.0, 1.0, 1.0]);
}

#[test]
fn test_line_moved_out_of_window_is_not_drawn() {
    let (mut controller, mut state) = setup();
    draw_two_click_shape(
        &mut controller,
        &mut state,
        EditorTool::Line,
        Vec2::new(10.0, 10.0),
        Vec2::new(40.0, 10.0),
    );
    define_window(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );

    select_at(&mut controller, &mut state, Vec2::new(20.0, 10.0));
    translate_selected(&mut controller, &mut state, TranslateDirection::Up, 10);

    let scene = controller.build_render_scene(&state);

    assert_eq!(scene.commands_in(DrawLayer::Shape).count(), 0);
    assert_eq!(scene.commands_in(DrawLayer::Highlight).count(), 1);
}
