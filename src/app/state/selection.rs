use crate::core::{Scene, ShapeId};

/// Auswahlbezogener Anwendungszustand (höchstens eine Form)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Stabile ID der selektierten Form
    pub selected_shape_id: Option<ShapeId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektiert die Form mit der gegebenen ID.
    pub fn select(&mut self, id: ShapeId) {
        self.selected_shape_id = Some(id);
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected_shape_id = None;
    }

    /// Aktuelle Position der selektierten Form in der Szene.
    ///
    /// `None`, wenn nichts selektiert ist oder die Form nicht mehr existiert.
    pub fn selected_index(&self, scene: &Scene) -> Option<usize> {
        self.selected_shape_id.and_then(|id| scene.index_of(id))
    }
}
