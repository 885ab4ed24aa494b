//! Scene-Modell: geordnete Formenliste plus Transformationen je ShapeId.

use glam::Vec2;
use std::borrow::Cow;
use std::collections::HashMap;

use super::shape::{Rgb, Shape, ShapeGeometry, ShapeId};
use super::transform::{apply_transform, Transform};

/// Alle Formen der Sitzung in Z-Reihenfolge.
///
/// Später eingefügte Formen liegen oben: sie werden zuletzt gezeichnet und
/// beim Hit-Test zuerst geprüft. Transformationen hängen an der stabilen
/// [`ShapeId`], nicht an der Listenposition; Löschungen verschieben deshalb
/// keine Zuordnung.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    transforms: HashMap<ShapeId, Transform>,
    next_id: u64,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine neue Form oben auf den Stapel und vergibt ihre ID.
    pub fn add_shape(&mut self, geometry: ShapeGeometry, color: Rgb, width: f32) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape::new(id, geometry, color, width));
        id
    }

    /// Anzahl der Formen
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// `true`, wenn keine Formen vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Alle Formen in Z-Reihenfolge (unten → oben)
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Form an Position `index`
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Aktuelle Position einer Form
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.id() == id)
    }

    /// Transformation einer Form, falls je eine gesetzt wurde
    pub fn transform(&self, id: ShapeId) -> Option<&Transform> {
        self.transforms.get(&id)
    }

    /// Transformation der Form an Position `index`
    pub fn transform_at(&self, index: usize) -> Option<&Transform> {
        self.get(index).and_then(|shape| self.transform(shape.id()))
    }

    /// Anzahl gespeicherter Transformationen
    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    /// Liefert die Transformation zum Bearbeiten und legt sie bei Bedarf als Identität an.
    ///
    /// `None`, wenn keine Form mit dieser ID existiert.
    pub fn transform_mut_or_identity(&mut self, id: ShapeId) -> Option<&mut Transform> {
        if self.index_of(id).is_none() {
            return None;
        }
        Some(self.transforms.entry(id).or_default())
    }

    /// Entfernt die Transformation einer Form. Liefert `true`, wenn eine existierte.
    pub fn reset_transform(&mut self, id: ShapeId) -> bool {
        self.transforms.remove(&id).is_some()
    }

    /// Entfernt die Form an `index` samt ihrer Transformation.
    pub fn remove_at(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let shape = self.shapes.remove(index);
        self.transforms.remove(&shape.id());
        Some(shape)
    }

    /// Leert Formen und Transformationen. Bereits vergebene IDs werden nicht erneut vergeben.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.transforms.clear();
    }

    /// Render-Geometrie der Form an `index` (Kontrollpunkte nach Transformation).
    pub fn transformed_points(&self, index: usize) -> Option<Cow<'_, [Vec2]>> {
        let shape = self.get(index)?;
        Some(apply_transform(shape, self.transform(shape.id())))
    }
}
