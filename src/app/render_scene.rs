//! Builder für Render-Szenen aus der CurveSession.

use crate::app::CurveSession;
use crate::shared::{PointMarker, RenderScene, SampledCurve};

/// Baut eine RenderScene aus dem aktuellen Session-Zustand.
pub fn build(session: &CurveSession) -> RenderScene {
    let steps = session.options().sample_steps;

    let control_points = session
        .builder()
        .points()
        .points()
        .iter()
        .map(|p| PointMarker {
            position: p.position,
            tangent: p.tangent,
        })
        .collect();

    let finished_curves = session
        .finished_curves()
        .iter()
        .enumerate()
        .map(|(index, curve)| {
            let segments = session
                .sample_closed_curve(curve, steps)
                .unwrap_or_else(|e| {
                    log::warn!("Kurve {} nicht abtastbar: {}", index, e);
                    Vec::new()
                });
            SampledCurve { segments }
        })
        .collect();

    let in_progress = SampledCurve {
        segments: session.sample_in_progress(steps).unwrap_or_else(|e| {
            log::warn!("Kurve in Arbeit nicht abtastbar: {}", e);
            Vec::new()
        }),
    };

    let visible_finished_lines = session.reveal.visible_lines(session.finished_line_count());

    RenderScene {
        control_points,
        finished_curves,
        in_progress,
        visible_finished_lines,
        options: session.options().clone(),
    }
}
