//! Core-Domänentypen: Geometrie, Formen, Szene, Transformationen, Hit-Test und Clipping.
//!
//! Alle Koordinaten liegen im Y-up-Raum mit Ursprung unten links.

pub mod clip;
pub mod geometry;
pub mod scene;
pub mod shape;
pub mod transform;

pub use clip::{cohen_sutherland_clip, ClipRect, OutCode};
pub use hit_test::{
    hit_test, hit_test_with_ellipse_band, DEFAULT_HIT_TOLERANCE, ELLIPSE_BAND_TOLERANCE,
};
pub use scene::Scene;
pub use shape::{Rgb, Shape, ShapeGeometry, ShapeId, ShapeKind};
pub use transform::{apply_transform, Transform};
