//! UI-Layer mit egui.
//!
//! Übersetzt egui-Eingaben in `InputEvent`s und weiter in `AppIntent`s.
//! Tastenbelegung und Statuszeile sind in eigene Dateien ausgelagert.

pub mod input;
pub mod keyboard;
pub mod status;

pub use input::{screen_to_world, InputEvent, InputState, PointerButton};
pub use keyboard::{intent_for_key, log_key_bindings, EditorKey, KEY_BINDINGS};
pub use status::{render_status_bar, status_text};
