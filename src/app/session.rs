//! Session-Zustand: Kurve in Arbeit, fertige Kurven, Optionen, Command-Log.
//!
//! Ersetzt globalen Zustand; mehrere Sessions können unabhängig existieren.

use super::builder::{BuildStep, BuilderState, CurveBuilder, IgnoreReason};
use super::reveal::RevealAnimation;
use super::CommandLog;
use crate::core::{ClosedCurve, PointArena, SplineError, SplineSegment, Viewport};
use crate::shared::spline_geometry::validate_alpha;
use crate::shared::SplineOptions;
use glam::Vec2;

/// Beobachtbares Ergebnis eines hinzugefügten Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPointOutcome {
    /// Punkt in die Arbeitsliste übernommen
    Added {
        /// Index in der Arbeitsliste
        point_index: usize,
        /// Ob ein neues Segment entstanden ist
        segment_added: bool,
    },
    /// Schleife geschlossen und in die fertigen Kurven verschoben
    Closed {
        /// Index der neuen Kurve in `finished_curves()`
        curve_index: usize,
        /// Anzahl Segmente der geschlossenen Kurve
        segment_count: usize,
    },
    /// Klick verworfen
    Ignored(IgnoreReason),
}

/// Gesamter Zustand einer Zeichen-Session.
pub struct CurveSession {
    /// Kurve in Arbeit
    builder: CurveBuilder,
    /// Abgeschlossene Kurven in Schließ-Reihenfolge
    finished: Vec<ClosedCurve>,
    /// Laufzeit-Optionen (alpha, Toleranz, Sampling, Darstellung)
    options: SplineOptions,
    /// Nachzeichnen-Animation fertiger Kurven
    pub reveal: RevealAnimation,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ergebnis des zuletzt verarbeiteten Klicks
    pub last_add_outcome: Option<AddPointOutcome>,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl CurveSession {
    /// Erstellt eine leere Session mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SplineOptions::default())
    }

    /// Erstellt eine leere Session mit gegebenen Optionen.
    pub fn with_options(options: SplineOptions) -> Self {
        let options = options.validated();
        Self {
            builder: CurveBuilder::with_tolerance(options.closure_tolerance),
            finished: Vec::new(),
            reveal: RevealAnimation::new(options.reveal_line_interval_ms),
            options,
            command_log: CommandLog::new(),
            last_add_outcome: None,
            should_exit: false,
        }
    }

    // ── Eingaben ────────────────────────────────────────────────

    /// Fügt einen Kontrollpunkt (normalisierte Koordinaten) hinzu.
    pub fn add_control_point(&mut self, x: f32, y: f32) -> AddPointOutcome {
        match self.builder.add_point(Vec2::new(x, y)) {
            BuildStep::Added {
                point,
                segment_added,
            } => {
                // Neue Arbeitspunkte: fertige Kurven wieder vollständig zeigen
                self.reveal.stop();
                AddPointOutcome::Added {
                    point_index: point.index(),
                    segment_added,
                }
            }
            BuildStep::Closed(curve) => {
                let segment_count = curve.segment_count();
                self.finished.push(curve);
                self.reveal.restart();
                AddPointOutcome::Closed {
                    curve_index: self.finished.len() - 1,
                    segment_count,
                }
            }
            BuildStep::Ignored(reason) => AddPointOutcome::Ignored(reason),
        }
    }

    /// Verwirft die Kurve in Arbeit; fertige Kurven bleiben erhalten.
    pub fn reset_session(&mut self) {
        self.builder.reset();
    }

    /// Startet das Nachzeichnen fertiger Kurven, sofern keine Kurve in Arbeit ist.
    pub fn request_redraw(&mut self) {
        if self.builder.state() == BuilderState::Empty && !self.finished.is_empty() {
            self.reveal.restart();
        } else {
            self.reveal.stop();
        }
    }

    /// Schreibt die Nachzeichnen-Animation um einen Host-Frame fort.
    pub fn advance_frame(&mut self, elapsed_ms: f32) {
        let total = self.finished_line_count();
        self.reveal.advance(elapsed_ms, total);
    }

    /// Setzt den Parametrisierungs-Exponenten für alle Auswertungen.
    pub fn set_alpha(&mut self, alpha: f32) -> Result<(), SplineError> {
        self.options.alpha = validate_alpha(alpha)?;
        log::info!("Alpha auf {} gesetzt", alpha);
        Ok(())
    }

    /// Ersetzt die Optionen.
    ///
    /// Ein ungültiges Alpha wird verworfen und das bisherige behalten; alle
    /// übrigen ungültigen Werte fallen auf ihren Standard zurück.
    pub fn apply_options(&mut self, mut options: SplineOptions) {
        if let Err(e) = validate_alpha(options.alpha) {
            log::warn!("{}, behalte Alpha {}", e, self.options.alpha);
            options.alpha = self.options.alpha;
        }
        let options = options.validated();
        self.builder.closure_tolerance = options.closure_tolerance;
        self.reveal.line_interval_ms = options.reveal_line_interval_ms;
        self.options = options;
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Aktueller Parametrisierungs-Exponent.
    pub fn alpha(&self) -> f32 {
        self.options.alpha
    }

    /// Laufzeit-Optionen.
    pub fn options(&self) -> &SplineOptions {
        &self.options
    }

    /// Viewport aus der konfigurierten Fenstergröße.
    pub fn viewport(&self) -> Viewport {
        Viewport::from_size(self.options.viewport_size)
    }

    /// Kurve in Arbeit.
    pub fn builder(&self) -> &CurveBuilder {
        &self.builder
    }

    /// Positionen der Kontrollpunkte der Kurve in Arbeit.
    pub fn control_points(&self) -> Vec<Vec2> {
        self.builder.control_positions()
    }

    /// Alle abgeschlossenen Kurven.
    pub fn finished_curves(&self) -> &[ClosedCurve] {
        &self.finished
    }

    /// Tastet ein Segment mit dem Session-Alpha ab.
    pub fn sample_curve(
        &self,
        segment: &SplineSegment,
        points: &PointArena,
        step_count: usize,
    ) -> Result<Vec<Vec2>, SplineError> {
        segment.sample(points, step_count, self.options.alpha)
    }

    /// Tastet alle Segmente einer Kurve ab (eine Polyline pro Segment).
    pub fn sample_closed_curve(
        &self,
        curve: &ClosedCurve,
        step_count: usize,
    ) -> Result<Vec<Vec<Vec2>>, SplineError> {
        curve
            .segments()
            .iter()
            .map(|seg| self.sample_curve(seg, curve.points(), step_count))
            .collect()
    }

    /// Tastet die bereits erzeugten Segmente der Kurve in Arbeit ab.
    pub fn sample_in_progress(&self, step_count: usize) -> Result<Vec<Vec<Vec2>>, SplineError> {
        self.builder
            .segments()
            .iter()
            .map(|seg| self.sample_curve(seg, self.builder.points(), step_count))
            .collect()
    }

    /// Gesamtzahl der Linien aller fertigen Kurven beim aktuellen Sampling.
    pub fn finished_line_count(&self) -> usize {
        self.finished
            .iter()
            .map(|c| c.segment_count() * self.options.sample_steps)
            .sum()
    }
}

impl Default for CurveSession {
    fn default() -> Self {
        Self::new()
    }
}
