//! Render-Schnittstelle zum externen Zeichen-Host.
//!
//! Der Core liefert eine fertige `RenderScene`; ein `CurveRenderer` setzt sie
//! in Linien und Marker um. Fenster, Event-Loop und Rasterisierung gehören
//! dem Host.

mod text;

pub use text::TextRenderer;

use crate::core::Viewport;
use crate::shared::RenderScene;
use glam::Vec2;

/// Konsument einer RenderScene (ein Aufruf pro Frame).
pub trait CurveRenderer {
    /// Zeichnet die Szene.
    fn render(&mut self, scene: &RenderScene) -> anyhow::Result<()>;
}

/// Herkunft einer zu zeichnenden Linie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Teil einer fertig geschlossenen Kurve
    Finished,
    /// Teil der Kurve in Arbeit
    InProgress,
}

/// Eine Linie in Render-Koordinaten (y nach oben).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderLine {
    /// Startpunkt
    pub from: Vec2,
    /// Endpunkt
    pub to: Vec2,
    /// Fertige Kurve oder Kurve in Arbeit
    pub kind: LineKind,
}

/// Sammelt alle im aktuellen Frame sichtbaren Linien.
///
/// Reihenfolge: fertige Kurven (begrenzt durch `visible_finished_lines`),
/// danach die Kurve in Arbeit.
pub fn collect_lines(scene: &RenderScene, viewport: &Viewport) -> Vec<RenderLine> {
    let budget = scene
        .visible_finished_lines
        .unwrap_or_else(|| scene.finished_line_count());

    let finished = scene
        .finished_curves
        .iter()
        .flat_map(|curve| curve.segments.iter())
        .flat_map(|samples| samples.windows(2))
        .take(budget)
        .map(|w| (w[0], w[1], LineKind::Finished));

    let in_progress = scene
        .in_progress
        .segments
        .iter()
        .flat_map(|samples| samples.windows(2))
        .map(|w| (w[0], w[1], LineKind::InProgress));

    finished
        .chain(in_progress)
        .map(|(from, to, kind)| RenderLine {
            from: viewport.normalized_to_render(from),
            to: viewport.normalized_to_render(to),
            kind,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, CurveSession};

    fn closed_square_session() -> CurveSession {
        let mut session = CurveSession::new();
        for (x, y) in [(0.1, 0.1), (0.5, 0.1), (0.5, 0.5), (0.1, 0.5), (0.1, 0.1)] {
            session.add_control_point(x, y);
        }
        session
    }

    #[test]
    fn test_collect_lines_respects_reveal_budget() {
        let mut session = closed_square_session();
        session.advance_frame(15.0);
        let scene = build_render_scene(&session);
        let lines = collect_lines(&scene, &session.viewport());
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.kind == LineKind::Finished));
    }

    #[test]
    fn test_collect_lines_all_when_not_animating() {
        let mut session = closed_square_session();
        session.advance_frame(10_000.0);
        let scene = build_render_scene(&session);
        let lines = collect_lines(&scene, &session.viewport());
        assert_eq!(lines.len(), 200);
    }

    #[test]
    fn test_collect_lines_flips_y() {
        let mut session = CurveSession::new();
        for (x, y) in [(0.1, 0.1), (0.5, 0.1), (0.5, 0.5), (0.1, 0.5)] {
            session.add_control_point(x, y);
        }
        let scene = build_render_scene(&session);
        let lines = collect_lines(&scene, &session.viewport());
        assert_eq!(lines.len(), 50);
        // Segment startet bei (0.5, 0.1) → Render-y = 0.9
        assert!((lines[0].from - Vec2::new(0.5, 0.9)).length() < 1e-5);
        assert!(lines.iter().all(|l| l.kind == LineKind::InProgress));
    }
}
