//! Vektor2D-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, SelectionState,
    TransformMode, TranslateDirection, ViewState,
};
pub use core::{
    apply_transform, cohen_sutherland_clip, hit_test, ClipRect, Rgb, Scene, Shape, ShapeGeometry,
    ShapeId, ShapeKind, Transform,
};
pub use render::{DrawBackend, Renderer};
pub use shared::{DrawCommand, DrawLayer, DrawPrimitive, EditorOptions, RenderScene};
