//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::SplineOptions;
use glam::Vec2;

/// Marker eines Kontrollpunkts der aktuell bearbeiteten Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    /// Position (normalisiert)
    pub position: Vec2,
    /// Einheits-Tangente, Nullvektor solange unbekannt
    pub tangent: Vec2,
}

/// Abgetastete Kurve: eine Polyline pro Segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledCurve {
    /// Sample-Punkte je Segment in Zeichenreihenfolge
    pub segments: Vec<Vec<Vec2>>,
}

impl SampledCurve {
    /// Anzahl der Linien (Sample-Paare) über alle Segmente.
    pub fn line_count(&self) -> usize {
        self.segments
            .iter()
            .map(|s| s.len().saturating_sub(1))
            .sum()
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte der Kurve in Arbeit
    pub control_points: Vec<PointMarker>,
    /// Fertig geschlossene Kurven
    pub finished_curves: Vec<SampledCurve>,
    /// Bereits erzeugte Segmente der Kurve in Arbeit
    pub in_progress: SampledCurve,
    /// Wie viele Linien der fertigen Kurven sichtbar sind (`None` = alle)
    pub visible_finished_lines: Option<usize>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: SplineOptions,
}

impl RenderScene {
    /// Gesamtzahl der Linien aller fertigen Kurven.
    pub fn finished_line_count(&self) -> usize {
        self.finished_curves.iter().map(|c| c.line_count()).sum()
    }

    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
            && self.finished_curves.is_empty()
            && self.in_progress.segments.is_empty()
    }
}
