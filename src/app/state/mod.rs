//! Application State: zentrale Datenhaltung des Editors.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState, TransformMode};
pub use selection::SelectionState;
pub use view::ViewState;
