//! Geometrie-Kernel: Distanzen, Bereichstests, Schwerpunkt und Ellipsen-Hilfen.
//!
//! Reine Funktionen ohne Zustand. Alle Koordinaten liegen im Y-up-Raum
//! mit Ursprung unten links.

use glam::Vec2;
use std::f32::consts::TAU;

/// Euklidische Distanz zwischen zwei Punkten.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Distanz eines Punkts zum Segment `a`–`b`.
///
/// Fällt die Projektion von `p` in das Segment, wird der Lotabstand zur
/// Geraden geliefert, sonst der Abstand zum näheren Endpunkt.
/// Ein entartetes Segment (`a == b`) fällt auf die Punktdistanz zurück.
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq < f32::EPSILON {
        return distance(p, a);
    }

    let t = (p - a).dot(ab) / length_sq;
    if t < 0.0 {
        distance(p, a)
    } else if t > 1.0 {
        distance(p, b)
    } else {
        ab.perp_dot(p - a).abs() / length_sq.sqrt()
    }
}

/// Inklusiver Test, ob `p` im achsenparallelen Rechteck mit den Ecken `a` und `b` liegt.
///
/// Die Ecken dürfen in beliebiger Reihenfolge übergeben werden.
pub fn point_in_axis_aligned_rect(p: Vec2, a: Vec2, b: Vec2) -> bool {
    let min = a.min(b);
    let max = a.max(b);
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}

/// Arithmetisches Mittel aller Punkte (für Einzelpunkte der Punkt selbst).
pub fn centroid(points: &[Vec2]) -> Vec2 {
    match points {
        [] => Vec2::ZERO,
        [single] => *single,
        _ => points.iter().copied().sum::<Vec2>() / points.len() as f32,
    }
}

/// Die vier Ecken eines achsenparallelen Rechtecks aus zwei Gegenecken.
///
/// Reihenfolge: `a`, (b.x, a.y), `b`, (a.x, b.y); als geschlossener Umlauf zeichenbar.
pub fn rect_corners(a: Vec2, b: Vec2) -> [Vec2; 4] {
    [a, Vec2::new(b.x, a.y), b, Vec2::new(a.x, b.y)]
}

/// Die vier Kanten eines achsenparallelen Rechtecks aus zwei Gegenecken.
pub fn rect_edges(a: Vec2, b: Vec2) -> [(Vec2, Vec2); 4] {
    let [c0, c1, c2, c3] = rect_corners(a, b);
    [(c0, c1), (c1, c2), (c2, c3), (c3, c0)]
}

/// Mittelpunkt und Halbachsen einer Ellipse aus ihrer Bounding-Box.
pub fn ellipse_from_bounds(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    ((a + b) * 0.5, (b - a).abs() * 0.5)
}

/// Wert der normierten Ellipsengleichung `((x-cx)/rx)² + ((y-cy)/ry)²` für `p`.
///
/// Auf dem Rand ist der Wert 1. Entartete Ellipsen (`rx == 0` oder `ry == 0`)
/// liefern `None`.
pub fn normalized_ellipse_value(p: Vec2, center: Vec2, radii: Vec2) -> Option<f32> {
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return None;
    }
    let d = (p - center) / radii;
    Some(d.length_squared())
}

/// Tastet den Ellipsenrand parametrisch ab: `x = cx + rx·cos t`, `y = cy + ry·sin t`.
///
/// Liefert `segments` Punkte, beginnend bei `t = 0`, gegen den Uhrzeigersinn.
pub fn ellipse_outline(center: Vec2, radii: Vec2, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + radii * Vec2::new(angle.cos(), angle.sin())
        })
        .collect()
}
