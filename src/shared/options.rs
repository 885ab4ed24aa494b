//! Zentrale Konfiguration für den Vektor2D-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::Rgb;

// ── Selektion ───────────────────────────────────────────────────────

/// Hit-Test-Toleranz in Welteinheiten (Punkt, Linie, Rechteckkante).
pub const HIT_TOLERANCE: f32 = crate::core::DEFAULT_HIT_TOLERANCE;
/// Band um den Ellipsenrand in der normierten Ellipsengleichung.
pub const ELLIPSE_BAND_TOLERANCE: f32 = crate::core::ELLIPSE_BAND_TOLERANCE;

// ── Transformation ──────────────────────────────────────────────────

/// Verschiebung pro Pfeiltaste in Welteinheiten.
pub const TRANSLATE_STEP: f32 = 10.0;
/// Drehung pro Tastendruck in Grad.
pub const ROTATE_STEP_DEG: f32 = 5.0;
/// Faktor für "größer".
pub const SCALE_UP_FACTOR: f32 = 1.1;
/// Faktor für "kleiner".
pub const SCALE_DOWN_FACTOR: f32 = 0.9;

// ── Zeichnen ────────────────────────────────────────────────────────

/// Minimale Strichbreite.
pub const WIDTH_MIN: f32 = 1.0;
/// Maximale Strichbreite.
pub const WIDTH_MAX: f32 = 10.0;
/// Schrittweite der Breitentasten.
pub const WIDTH_STEP: f32 = 1.0;
/// Startfarbe für neue Formen (Weiß).
pub const DEFAULT_COLOR: Rgb = [1.0, 1.0, 1.0];
/// Startbreite für neue Formen.
pub const DEFAULT_WIDTH: f32 = 1.0;
/// Darstellungsgröße von Punkten in Pixeln.
pub const POINT_SIZE: f32 = 5.0;
/// Stützpunkte der Ellipsen-Approximation.
pub const ELLIPSE_SEGMENTS: usize = 360;

// ── Hervorhebung ────────────────────────────────────────────────────

/// Farbe der Selektions-Hervorhebung (Gelb).
pub const HIGHLIGHT_COLOR: Rgb = [1.0, 1.0, 0.0];
/// Linienstärke der Selektions-Hervorhebung.
pub const HIGHLIGHT_WIDTH: f32 = 3.0;
/// Radius des Rings um selektierte Punkte.
pub const POINT_HIGHLIGHT_RADIUS: f32 = 8.0;
/// Segmente des Rings um selektierte Punkte.
pub const POINT_HIGHLIGHT_SEGMENTS: usize = 20;

// ── Clip-Window ─────────────────────────────────────────────────────

/// Farbe der Fenster-Outline (Gelb).
pub const WINDOW_OUTLINE_COLOR: Rgb = [1.0, 1.0, 0.0];
/// Linienstärke der Fenster-Outline.
pub const WINDOW_OUTLINE_WIDTH: f32 = 2.0;
/// Ersatzfarbe für Punkte/Linien innerhalb des Fensters (Grün).
pub const WINDOW_RECOLOR: Rgb = [0.0, 1.0, 0.0];

// ── Viewport ────────────────────────────────────────────────────────

/// Hintergrundfarbe (Schwarz).
pub const BACKGROUND_COLOR: Rgb = [0.0, 0.0, 0.0];
/// Startgröße des Fensters in Pixeln [Breite, Höhe].
pub const VIEWPORT_SIZE: [f32; 2] = [800.0, 600.0];
/// Ziel-Bildrate.
pub const TARGET_FPS: u32 = 60;

/// Dateiname der Optionen-Datei.
const OPTIONS_FILE_NAME: &str = "vektor2d_editor.toml";

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `vektor2d_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Hit-Test-Toleranz in Welteinheiten
    pub hit_tolerance: f32,
    /// Band um den Ellipsenrand (normierte Gleichung)
    pub ellipse_band_tolerance: f32,

    // ── Transformation ──────────────────────────────────────────
    /// Verschiebung pro Schritt
    pub translate_step: f32,
    /// Drehung pro Schritt in Grad
    pub rotate_step_deg: f32,
    /// Faktor für "größer"
    pub scale_up_factor: f32,
    /// Faktor für "kleiner"
    pub scale_down_factor: f32,

    // ── Zeichnen ────────────────────────────────────────────────
    /// Untere Grenze der Strichbreite
    pub width_min: f32,
    /// Obere Grenze der Strichbreite
    pub width_max: f32,
    /// Schrittweite der Breitentasten
    pub width_step: f32,
    /// Startfarbe neuer Formen
    pub default_color: Rgb,
    /// Startbreite neuer Formen
    pub default_width: f32,
    /// Darstellungsgröße von Punkten
    pub point_size: f32,
    /// Stützpunkte der Ellipsen-Approximation
    pub ellipse_segments: usize,

    // ── Hervorhebung ────────────────────────────────────────────
    /// Farbe der Selektions-Hervorhebung
    pub highlight_color: Rgb,
    /// Linienstärke der Selektions-Hervorhebung
    pub highlight_width: f32,
    /// Radius des Rings um selektierte Punkte
    pub point_highlight_radius: f32,
    /// Segmente des Rings um selektierte Punkte
    pub point_highlight_segments: usize,

    // ── Clip-Window ─────────────────────────────────────────────
    /// Farbe der Fenster-Outline
    pub window_outline_color: Rgb,
    /// Linienstärke der Fenster-Outline
    pub window_outline_width: f32,
    /// Ersatzfarbe für Punkte/Linien im Fenster
    pub window_recolor: Rgb,

    // ── Viewport ────────────────────────────────────────────────
    /// Hintergrundfarbe
    pub background_color: Rgb,
    /// Startgröße des Fensters
    pub viewport_size: [f32; 2],
    /// Ziel-Bildrate
    pub target_fps: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            ellipse_band_tolerance: ELLIPSE_BAND_TOLERANCE,

            translate_step: TRANSLATE_STEP,
            rotate_step_deg: ROTATE_STEP_DEG,
            scale_up_factor: SCALE_UP_FACTOR,
            scale_down_factor: SCALE_DOWN_FACTOR,

            width_min: WIDTH_MIN,
            width_max: WIDTH_MAX,
            width_step: WIDTH_STEP,
            default_color: DEFAULT_COLOR,
            default_width: DEFAULT_WIDTH,
            point_size: POINT_SIZE,
            ellipse_segments: ELLIPSE_SEGMENTS,

            highlight_color: HIGHLIGHT_COLOR,
            highlight_width: HIGHLIGHT_WIDTH,
            point_highlight_radius: POINT_HIGHLIGHT_RADIUS,
            point_highlight_segments: POINT_HIGHLIGHT_SEGMENTS,

            window_outline_color: WINDOW_OUTLINE_COLOR,
            window_outline_width: WINDOW_OUTLINE_WIDTH,
            window_recolor: WINDOW_RECOLOR,

            background_color: BACKGROUND_COLOR,
            viewport_size: VIEWPORT_SIZE,
            target_fps: TARGET_FPS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("vektor2d_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Begrenzt eine Strichbreite auf `[width_min, width_max]`.
    pub fn clamp_width(&self, width: f32) -> f32 {
        width.clamp(self.width_min, self.width_max.max(self.width_min))
    }

    /// Pause zwischen zwei Frames in Sekunden.
    pub fn frame_interval_secs(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}
