use crate::app::CommandLog;
use crate::core::{ClipRect, Scene, ShapeId};
use crate::shared::EditorOptions;

use super::{EditorToolState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
///
/// Einziger veränderlicher Zustand des Editors; der Controller erhält ihn
/// per `&mut` und der Render-Szenen-Aufbau per `&`.
pub struct AppState {
    /// Formen und Transformationen
    pub scene: Scene,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State (Zustandsmaschine)
    pub editor: EditorToolState,
    /// Definiertes Clip-Window
    pub clip_window: Option<ClipRect>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Schrittweiten)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen, leeren App-State mit geladenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: Scene::new(),
            view: ViewState::new(options.viewport_size),
            selection: SelectionState::new(),
            editor: EditorToolState::with_options(&options),
            clip_window: None,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl der Formen (für UI-Anzeige)
    pub fn shape_count(&self) -> usize {
        self.scene.len()
    }

    /// Liefert Index und ID der Selektion, falls sie noch gültig ist.
    ///
    /// Eine veraltete Selektion wird dabei stillschweigend aufgehoben.
    pub fn validated_selection(&mut self) -> Option<(usize, ShapeId)> {
        let id = self.selection.selected_shape_id?;
        match self.scene.index_of(id) {
            Some(index) => Some((index, id)),
            None => {
                self.selection.clear();
                None
            }
        }
    }

    /// Position der gültigen Selektion (nur lesend, ohne Bereinigung)
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index(&self.scene)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
