//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use crate::core::Rgb;
pub use options::EditorOptions;
pub use render_scene::{DrawCommand, DrawLayer, DrawPrimitive, RenderScene};
