//! Transform-Engine: Translation, Rotation und Skalierung pro Form.

use glam::Vec2;
use std::borrow::Cow;

use super::geometry::centroid;
use super::shape::Shape;

/// Transformation einer Form: erst Translation, dann Rotation, dann Skalierung.
///
/// Rotation und Skalierung beziehen sich auf den untransformierten
/// Schwerpunkt plus Translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Verschiebung in Welteinheiten
    pub translation: Vec2,
    /// Drehwinkel in Grad, gegen den Uhrzeigersinn positiv
    pub rotation_deg: f32,
    /// Skalierungsfaktor (> 0)
    pub scale: f32,
}

impl Transform {
    /// Identität: keine Verschiebung, keine Drehung, Faktor 1.
    pub const IDENTITY: Transform = Transform {
        translation: Vec2::ZERO,
        rotation_deg: 0.0,
        scale: 1.0,
    };

    /// Addiert eine Verschiebung.
    pub fn translate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Addiert einen Drehwinkel in Grad.
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation_deg += degrees;
    }

    /// Multipliziert den Skalierungsfaktor (wiederholte Schritte kumulieren multiplikativ).
    ///
    /// Nicht-positive oder nicht-endliche Faktoren werden ignoriert.
    pub fn scale_by(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.scale *= factor;
        }
    }

    /// Wendet die Transformation auf Punkte mit gegebenem Referenz-Schwerpunkt an.
    fn apply_about(&self, points: &[Vec2], center: Vec2) -> Vec<Vec2> {
        let pivot = center + self.translation;
        let rotation =
            (self.rotation_deg != 0.0).then(|| Vec2::from_angle(self.rotation_deg.to_radians()));
        let scale = (self.scale != 1.0).then_some(self.scale);

        points
            .iter()
            .map(|&p| {
                let mut q = p + self.translation;
                if let Some(rotation) = rotation {
                    q = pivot + rotation.rotate(q - pivot);
                }
                if let Some(scale) = scale {
                    q = pivot + (q - pivot) * scale;
                }
                q
            })
            .collect()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Berechnet die Render-Geometrie einer Form.
///
/// Ohne Transformation werden die gespeicherten Kontrollpunkte unverändert
/// (und ohne Allokation) geliehen.
pub fn apply_transform<'a>(shape: &'a Shape, transform: Option<&Transform>) -> Cow<'a, [Vec2]> {
    let points = shape.control_points();
    match transform {
        None => Cow::Borrowed(points),
        Some(transform) => Cow::Owned(transform.apply_about(points, centroid(points))),
    }
}
