//! Use-Cases der Application-Layer-Orchestrierung.

pub mod clip_window;
pub mod drawing;
pub mod selection;
pub mod transform;
pub mod viewport;
