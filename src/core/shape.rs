//! Primitive Formen: Punkt, Linie, Rechteck, Ellipse.

use glam::Vec2;

/// RGB-Farbe, Komponenten im Bereich 0.0–1.0.
pub type Rgb = [f32; 3];

/// Unveränderliche Identität einer Form, vergeben beim Erstellen.
///
/// Bleibt über Löschungen anderer Formen hinweg stabil und wird nie wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Typ einer Form (ohne Geometrie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Einzelner Punkt
    Point,
    /// Strecke zwischen zwei Endpunkten
    Line,
    /// Achsenparalleles Rechteck aus zwei Gegenecken
    Rectangle,
    /// Ellipse innerhalb der Bounding-Box aus zwei Gegenecken
    Ellipse,
}

impl ShapeKind {
    /// Anzahl der Kontrollpunkte (fest je Typ).
    pub fn control_point_count(self) -> usize {
        match self {
            ShapeKind::Point => 1,
            ShapeKind::Line | ShapeKind::Rectangle | ShapeKind::Ellipse => 2,
        }
    }

    /// Kleingeschriebener Name für Logs.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

/// Kontrollpunkte einer Form, Anzahl über den Typ festgelegt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    /// Ein Punkt
    Point([Vec2; 1]),
    /// Start- und Endpunkt
    Line([Vec2; 2]),
    /// Zwei Gegenecken
    Rectangle([Vec2; 2]),
    /// Zwei Gegenecken der Bounding-Box
    Ellipse([Vec2; 2]),
}

impl ShapeGeometry {
    /// Punkt-Geometrie.
    pub fn point(p: Vec2) -> Self {
        ShapeGeometry::Point([p])
    }

    /// Linien-Geometrie.
    pub fn line(a: Vec2, b: Vec2) -> Self {
        ShapeGeometry::Line([a, b])
    }

    /// Rechteck-Geometrie.
    pub fn rectangle(a: Vec2, b: Vec2) -> Self {
        ShapeGeometry::Rectangle([a, b])
    }

    /// Ellipsen-Geometrie.
    pub fn ellipse(a: Vec2, b: Vec2) -> Self {
        ShapeGeometry::Ellipse([a, b])
    }

    /// Typ der Geometrie.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Point(_) => ShapeKind::Point,
            ShapeGeometry::Line(_) => ShapeKind::Line,
            ShapeGeometry::Rectangle(_) => ShapeKind::Rectangle,
            ShapeGeometry::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    /// Kontrollpunkte als Slice.
    pub fn control_points(&self) -> &[Vec2] {
        match self {
            ShapeGeometry::Point(points) => points.as_slice(),
            ShapeGeometry::Line(points)
            | ShapeGeometry::Rectangle(points)
            | ShapeGeometry::Ellipse(points) => points.as_slice(),
        }
    }
}

/// Eine gezeichnete Form in der Szene.
///
/// Nach dem Erstellen unveränderlich; Transformationen werden nicht
/// gespeichert, sondern pro Frame berechnet.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    geometry: ShapeGeometry,
    color: Rgb,
    width: f32,
}

impl Shape {
    /// Minimale Strich-/Punktbreite.
    pub const MIN_WIDTH: f32 = 1.0;

    pub(crate) fn new(id: ShapeId, geometry: ShapeGeometry, color: Rgb, width: f32) -> Self {
        debug_assert_eq!(
            geometry.control_points().len(),
            geometry.kind().control_point_count()
        );
        Self {
            id,
            geometry,
            color,
            width: width.max(Self::MIN_WIDTH),
        }
    }

    /// Stabile Identität
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Typ der Form
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Geometrie (untransformiert)
    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Untransformierte Kontrollpunkte
    pub fn control_points(&self) -> &[Vec2] {
        self.geometry.control_points()
    }

    /// Gespeicherte Farbe
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Strich-/Punktbreite (>= 1)
    pub fn width(&self) -> f32 {
        self.width
    }
}
