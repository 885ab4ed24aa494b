//! Clip-Window: achsenparalleles Rechteck und Cohen–Sutherland-Linien-Clipping.

use glam::Vec2;

use super::geometry::rect_corners;

/// Nenner unterhalb dieses Betrags gelten als "Segment schneidet diese Kante nicht".
const PARALLEL_EPSILON: f32 = 1e-6;

/// Maximale Clip-Schritte pro Endpunkt (eine Kante je Bit).
const MAX_CLIPS_PER_ENDPOINT: usize = 4;

/// 4-Bit-Regionscode eines Punkts relativ zum Clip-Rechteck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutCode(u8);

impl OutCode {
    /// Innerhalb des Rechtecks
    pub const INSIDE: OutCode = OutCode(0);
    /// Links von `min.x` (Bit 0)
    pub const LEFT: OutCode = OutCode(1);
    /// Rechts von `max.x` (Bit 1)
    pub const RIGHT: OutCode = OutCode(2);
    /// Unterhalb von `min.y` (Bit 2)
    pub const BOTTOM: OutCode = OutCode(4);
    /// Oberhalb von `max.y` (Bit 3)
    pub const TOP: OutCode = OutCode(8);

    /// Kanten in der Reihenfolge, in der ein außenliegender Endpunkt geclippt wird.
    const CLIP_PRIORITY: [OutCode; 4] = [Self::TOP, Self::BOTTOM, Self::RIGHT, Self::LEFT];

    /// Rohwert der vier Bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// `true`, wenn der Punkt im Rechteck liegt.
    pub fn is_inside(self) -> bool {
        self.bits() == 0
    }

    /// Prüft, ob alle Bits von `flag` gesetzt sind.
    pub fn contains(self, flag: OutCode) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// `true`, wenn beide Codes mindestens eine Außenseite teilen.
    pub fn shares_side_with(self, other: OutCode) -> bool {
        self.bits() & other.bits() != 0
    }
}

impl std::ops::BitOr for OutCode {
    type Output = OutCode;

    fn bitor(self, rhs: OutCode) -> OutCode {
        OutCode(self.0 | rhs.0)
    }
}

/// Achsenparalleles Clip-Rechteck, normalisiert (`min <= max` je Achse).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    min: Vec2,
    max: Vec2,
}

impl ClipRect {
    /// Erstellt ein Rechteck aus zwei beliebigen Gegenecken.
    ///
    /// Identische Ecken ergeben ein entartetes Rechteck ohne Fläche.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Untere linke Ecke.
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Obere rechte Ecke.
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Inklusiver Punkt-im-Rechteck-Test.
    pub fn contains(&self, p: Vec2) -> bool {
        self.outcode(p).is_inside()
    }

    /// Eckpunkte als geschlossener Umlauf (für die Outline).
    pub fn corners(&self) -> [Vec2; 4] {
        rect_corners(self.min, self.max)
    }

    /// Berechnet den Regionscode eines Punkts.
    pub fn outcode(&self, p: Vec2) -> OutCode {
        let mut code = OutCode::INSIDE;
        if p.x < self.min.x {
            code = code | OutCode::LEFT;
        }
        if p.x > self.max.x {
            code = code | OutCode::RIGHT;
        }
        if p.y < self.min.y {
            code = code | OutCode::BOTTOM;
        }
        if p.y > self.max.y {
            code = code | OutCode::TOP;
        }
        code
    }

    /// Schnittpunkt der Geraden `a`–`b` mit der durch `edge` gegebenen Kante.
    ///
    /// `None`, wenn das Segment parallel zur Kante verläuft.
    fn intersect(&self, a: Vec2, b: Vec2, edge: OutCode) -> Option<Vec2> {
        let d = b - a;
        if edge == OutCode::TOP || edge == OutCode::BOTTOM {
            if d.y.abs() < PARALLEL_EPSILON {
                return None;
            }
            let y = if edge == OutCode::TOP {
                self.max.y
            } else {
                self.min.y
            };
            Some(Vec2::new(a.x + d.x * (y - a.y) / d.y, y))
        } else {
            if d.x.abs() < PARALLEL_EPSILON {
                return None;
            }
            let x = if edge == OutCode::RIGHT {
                self.max.x
            } else {
                self.min.x
            };
            Some(Vec2::new(x, a.y + d.y * (x - a.x) / d.x))
        }
    }
}

/// Cohen–Sutherland-Clipping des Segments `a`–`b` gegen `rect`.
///
/// Liefert das (ggf. gekürzte) Segment oder `None`, wenn es vollständig
/// außerhalb liegt. Ein außenliegender Endpunkt wird gegen die erste
/// markierte Kante in der Reihenfolge oben, unten, rechts, links geclippt;
/// Kanten, zu denen das Segment parallel liegt, werden übersprungen.
pub fn cohen_sutherland_clip(a: Vec2, b: Vec2, rect: &ClipRect) -> Option<(Vec2, Vec2)> {
    let mut p1 = a;
    let mut p2 = b;
    let mut code1 = rect.outcode(p1);
    let mut code2 = rect.outcode(p2);

    for _ in 0..2 * MAX_CLIPS_PER_ENDPOINT {
        if code1.is_inside() && code2.is_inside() {
            return Some((p1, p2));
        }
        if code1.shares_side_with(code2) {
            return None;
        }

        let clip_first = !code1.is_inside();
        let code_out = if clip_first { code1 } else { code2 };

        let clipped = OutCode::CLIP_PRIORITY
            .iter()
            .filter(|edge| code_out.contains(**edge))
            .find_map(|edge| rect.intersect(p1, p2, *edge));

        // Keine schneidbare Kante: das Segment kann das Rechteck nicht treffen
        let point = clipped?;

        if clip_first {
            p1 = point;
            code1 = rect.outcode(p1);
        } else {
            p2 = point;
            code2 = rect.outcode(p2);
        }
    }

    (code1.is_inside() && code2.is_inside()).then_some((p1, p2))
}
