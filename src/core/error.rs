//! Fehlertypen der Spline-Domäne.
//!
//! Alle Fehler sind lokal und behebbar, keiner beendet die Session.

use super::PointId;
use glam::Vec2;
use thiserror::Error;

/// Behebbare Fehler bei Tangenten-, Segment- und Parameter-Berechnungen.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SplineError {
    /// Vorgänger und Nachfolger fallen zusammen, die Richtung ist undefiniert.
    #[error("Tangente an {at} nicht berechenbar: Nachbarpunkte fallen zusammen")]
    DegenerateTangent {
        /// Position des Punkts, dessen Tangente aktualisiert werden sollte
        at: Vec2,
    },
    /// Exponent der Knoten-Parametrisierung liegt nicht in [0, 1].
    #[error("Ungültiger Alpha-Wert {0} (erlaubt: 0.0 bis 1.0)")]
    InvalidAlpha(f32),
    /// Segment referenziert einen Punkt, den die Arena nicht kennt.
    #[error("Unbekannter Kontrollpunkt {0:?}")]
    UnknownPoint(PointId),
    /// Sampling mit 0 Schritten angefordert.
    #[error("Schrittanzahl für das Sampling muss mindestens 1 sein")]
    InvalidStepCount,
}
