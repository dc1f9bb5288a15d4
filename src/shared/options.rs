//! Zentrale Konfiguration für den Spline-Editor.
//!
//! `SplineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::shared::spline_geometry::validate_alpha;
use serde::{Deserialize, Serialize};

// ── Spline ──────────────────────────────────────────────────────────

/// Exponent der Knoten-Parametrisierung (0.5 = zentripetal).
pub const DEFAULT_ALPHA: f32 = 0.5;
/// Abstand (normalisiert), unterhalb dessen ein Klick als „auf dem Startpunkt" gilt.
pub const CLOSURE_TOLERANCE: f32 = 0.1;
/// Sampling-Schritte pro Segment (Schrittweite 0.02).
pub const SAMPLE_STEPS: usize = 50;

// ── Darstellung ─────────────────────────────────────────────────────

/// Standard-Fenstergröße in Pixeln [Breite, Höhe].
pub const VIEWPORT_SIZE: [f32; 2] = [1000.0, 700.0];
/// Zeit pro aufgedeckter Linie beim Nachzeichnen fertiger Kurven (ms).
pub const REVEAL_LINE_INTERVAL_MS: f32 = 3.0;
/// Durchmesser der Kontrollpunkt-Marker in Pixeln.
pub const MARKER_SIZE_PX: f32 = 50.0;
/// Linienstärke der Kurven in Pixeln.
pub const CURVE_LINE_WIDTH_PX: f32 = 10.0;
/// Kurvenfarbe (RGBA: Grau).
pub const CURVE_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.0];

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `catmull_rom_splines.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplineOptions {
    // ── Spline ──────────────────────────────────────────────────
    /// Parametrisierungs-Exponent (0 = uniform, 0.5 = zentripetal, 1 = chordal)
    pub alpha: f32,
    /// Schließ-Toleranz in normalisierten Koordinaten
    pub closure_tolerance: f32,
    /// Sampling-Schritte pro Segment
    pub sample_steps: usize,

    // ── Darstellung ─────────────────────────────────────────────
    /// Fenstergröße in Pixeln [Breite, Höhe]
    #[serde(default = "default_viewport_size")]
    pub viewport_size: [f32; 2],
    /// Millisekunden pro aufgedeckter Linie beim Nachzeichnen
    #[serde(default = "default_reveal_line_interval_ms")]
    pub reveal_line_interval_ms: f32,
    /// Marker-Durchmesser in Pixeln
    #[serde(default = "default_marker_size_px")]
    pub marker_size_px: f32,
    /// Linienstärke in Pixeln
    #[serde(default = "default_curve_line_width_px")]
    pub curve_line_width_px: f32,
    /// Kurvenfarbe (RGBA)
    #[serde(default = "default_curve_color")]
    pub curve_color: [f32; 4],
    /// Hintergrundfarbe (RGBA)
    #[serde(default = "default_background_color")]
    pub background_color: [f32; 4],
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            closure_tolerance: CLOSURE_TOLERANCE,
            sample_steps: SAMPLE_STEPS,
            viewport_size: VIEWPORT_SIZE,
            reveal_line_interval_ms: REVEAL_LINE_INTERVAL_MS,
            marker_size_px: MARKER_SIZE_PX,
            curve_line_width_px: CURVE_LINE_WIDTH_PX,
            curve_color: CURVE_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

/// Serde-Default für `viewport_size` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_viewport_size() -> [f32; 2] {
    VIEWPORT_SIZE
}

/// Serde-Default für `reveal_line_interval_ms`.
fn default_reveal_line_interval_ms() -> f32 {
    REVEAL_LINE_INTERVAL_MS
}

fn default_marker_size_px() -> f32 {
    MARKER_SIZE_PX
}

fn default_curve_line_width_px() -> f32 {
    CURVE_LINE_WIDTH_PX
}

fn default_curve_color() -> [f32; 4] {
    CURVE_COLOR
}

fn default_background_color() -> [f32; 4] {
    BACKGROUND_COLOR
}

impl SplineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<SplineOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
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
            .unwrap_or_else(|_| std::path::PathBuf::from("catmull_rom_splines"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("catmull_rom_splines.toml")
    }

    /// Ersetzt ungültige Werte durch Standardwerte (mit Warnung).
    pub fn validated(mut self) -> Self {
        if let Err(e) = validate_alpha(self.alpha) {
            log::warn!("{}, verwende {}", e, DEFAULT_ALPHA);
            self.alpha = DEFAULT_ALPHA;
        }
        if !self.closure_tolerance.is_finite() || self.closure_tolerance <= 0.0 {
            log::warn!(
                "Ungültige Schließ-Toleranz {}, verwende {}",
                self.closure_tolerance,
                CLOSURE_TOLERANCE
            );
            self.closure_tolerance = CLOSURE_TOLERANCE;
        }
        if self.sample_steps == 0 {
            log::warn!("sample_steps = 0, verwende {}", SAMPLE_STEPS);
            self.sample_steps = SAMPLE_STEPS;
        }
        if self.viewport_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            log::warn!("Ungültige Fenstergröße {:?}", self.viewport_size);
            self.viewport_size = VIEWPORT_SIZE;
        }
        if !self.reveal_line_interval_ms.is_finite() || self.reveal_line_interval_ms < 0.0 {
            self.reveal_line_interval_ms = REVEAL_LINE_INTERVAL_MS;
        }
        self
    }

    /// Schrittweite im Kurvenparameter (1 / `sample_steps`).
    pub fn sample_step(&self) -> f32 {
        1.0 / self.sample_steps.max(1) as f32
    }
}
