//! Builder für Render-Szenen aus dem AppState.
//!
//! Reihenfolge pro Frame: Formen (inkl. Hervorhebung der Selektion direkt
//! nach der selektierten Form), dann die Outline des Clip-Windows, dann die
//! Live-Vorschau des laufenden Mehrfach-Klicks.

use glam::Vec2;

use crate::app::{AppState, EditorTool};
use crate::core::geometry::{ellipse_from_bounds, ellipse_outline, rect_corners};
use crate::core::{cohen_sutherland_clip, ClipRect, Rgb, Shape, ShapeKind};
use crate::shared::{DrawCommand, DrawLayer, DrawPrimitive, EditorOptions, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;
    let selected_index = state.selected_index();
    let mut commands = Vec::with_capacity(state.scene.len() + 3);

    for (index, shape) in state.scene.shapes().iter().enumerate() {
        let Some(points) = state.scene.transformed_points(index) else {
            continue;
        };
        let color = effective_color(shape, &points, state.clip_window.as_ref(), options);
        push_shape(
            &mut commands,
            shape,
            &points,
            color,
            state.clip_window.as_ref(),
            options,
        );

        if selected_index == Some(index) {
            push_highlight(&mut commands, shape.kind(), &points, options);
        }
    }

    if let Some(window) = state.clip_window.as_ref() {
        commands.push(DrawCommand {
            primitive: DrawPrimitive::ClosedPolygon,
            vertices: window.corners().to_vec(),
            color: options.window_outline_color,
            width: options.window_outline_width,
            layer: DrawLayer::ClipWindow,
        });
    }

    if let Some(preview) = preview_command(state) {
        commands.push(preview);
    }

    log::trace!("RenderScene mit {} Zeichenbefehlen", commands.len());

    RenderScene {
        viewport_size: state.view.viewport_size,
        background: options.background_color,
        commands,
    }
}

/// Punkte und Linien mit mindestens einem Stützpunkt im Fenster erhalten die Fensterfarbe.
///
/// Die gespeicherte Farbe der Form bleibt unverändert.
fn effective_color(
    shape: &Shape,
    points: &[Vec2],
    window: Option<&ClipRect>,
    options: &EditorOptions,
) -> Rgb {
    let recolorable = matches!(shape.kind(), ShapeKind::Point | ShapeKind::Line);
    match window {
        Some(window) if recolorable && points.iter().any(|p| window.contains(*p)) => {
            options.window_recolor
        }
        _ => shape.color(),
    }
}

fn push_shape(
    commands: &mut Vec<DrawCommand>,
    shape: &Shape,
    points: &[Vec2],
    color: Rgb,
    window: Option<&ClipRect>,
    options: &EditorOptions,
) {
    let width = shape.width();
    let command = match (shape.kind(), points) {
        (ShapeKind::Point, _) => DrawCommand {
            primitive: DrawPrimitive::Points,
            vertices: points.to_vec(),
            color,
            width: options.point_size,
            layer: DrawLayer::Shape,
        },
        (ShapeKind::Line, [a, b]) => {
            let segment = match window {
                Some(window) => cohen_sutherland_clip(*a, *b, window),
                None => Some((*a, *b)),
            };
            let Some((start, end)) = segment else {
                log::debug!("Linie {} liegt außerhalb des Clip-Windows", shape.id());
                return;
            };
            DrawCommand {
                primitive: DrawPrimitive::Polyline,
                vertices: vec![start, end],
                color,
                width,
                layer: DrawLayer::Shape,
            }
        }
        (ShapeKind::Rectangle, [a, b]) => DrawCommand {
            primitive: DrawPrimitive::ClosedPolygon,
            vertices: rect_corners(*a, *b).to_vec(),
            color,
            width,
            layer: DrawLayer::Shape,
        },
        (ShapeKind::Ellipse, [a, b]) => DrawCommand {
            primitive: DrawPrimitive::EllipseApprox,
            vertices: ellipse_vertices(*a, *b, options),
            color,
            width,
            layer: DrawLayer::Shape,
        },
        _ => return,
    };
    commands.push(command);
}

/// Hervorhebung der Selektion: dieselbe Geometrie als Outline, für Punkte ein Ring.
fn push_highlight(
    commands: &mut Vec<DrawCommand>,
    kind: ShapeKind,
    points: &[Vec2],
    options: &EditorOptions,
) {
    let (primitive, vertices) = match (kind, points) {
        (ShapeKind::Point, [p]) => (
            DrawPrimitive::EllipseApprox,
            ellipse_outline(
                *p,
                Vec2::splat(options.point_highlight_radius),
                options.point_highlight_segments,
            ),
        ),
        (ShapeKind::Line, [a, b]) => (DrawPrimitive::Polyline, vec![*a, *b]),
        (ShapeKind::Rectangle, [a, b]) => {
            (DrawPrimitive::ClosedPolygon, rect_corners(*a, *b).to_vec())
        }
        (ShapeKind::Ellipse, [a, b]) => (
            DrawPrimitive::EllipseApprox,
            ellipse_vertices(*a, *b, options),
        ),
        _ => return,
    };
    commands.push(DrawCommand {
        primitive,
        vertices,
        color: options.highlight_color,
        width: options.highlight_width,
        layer: DrawLayer::Highlight,
    });
}

fn ellipse_vertices(a: Vec2, b: Vec2, options: &EditorOptions) -> Vec<Vec2> {
    let (center, radii) = ellipse_from_bounds(a, b);
    ellipse_outline(center, radii, options.ellipse_segments)
}

/// Live-Vorschau vom gepufferten Klick zur Zeigerposition (Linie bzw. Rechteck).
fn preview_command(state: &AppState) -> Option<DrawCommand> {
    let editor = &state.editor;
    if editor.selection_mode || editor.window_defining {
        return None;
    }
    let first = editor.single_pending_click()?;
    let pointer = state.view.pointer_pos?;

    let (primitive, vertices) = match editor.active_tool {
        EditorTool::Line => (DrawPrimitive::Polyline, vec![first, pointer]),
        EditorTool::Rectangle => (
            DrawPrimitive::ClosedPolygon,
            rect_corners(first, pointer).to_vec(),
        ),
        EditorTool::Point | EditorTool::Ellipse => return None,
    };
    Some(DrawCommand {
        primitive,
        vertices,
        color: editor.current_color,
        width: editor.current_width,
        layer: DrawLayer::Preview,
    })
}
