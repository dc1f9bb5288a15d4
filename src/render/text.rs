//! Text-Renderer: schreibt Marker und Linien zeilenweise in einen `Write`.
//!
//! Format (Render-Koordinaten, y nach oben):
//! `style marker_size line_width r g b a` / `marker x y tx ty` /
//! `line kind x0 y0 x1 y1` / `end`

use super::{collect_lines, CurveRenderer, LineKind};
use crate::core::Viewport;
use crate::shared::RenderScene;
use std::io::Write;

/// Renderer für den Headless-Host und Tests.
///
/// Die Fenstergröße kommt pro Frame aus den Optionen der Szene.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    /// Erstellt einen Renderer, der nach `out` schreibt.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Anzahl bisher gezeichneter Frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Gibt das Ziel zurück.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CurveRenderer for TextRenderer<W> {
    fn render(&mut self, scene: &RenderScene) -> anyhow::Result<()> {
        writeln!(self.out, "frame {}", self.frames)?;
        let opts = &scene.options;
        let viewport = Viewport::from_size(opts.viewport_size);
        let [r, g, b, a] = opts.curve_color;
        writeln!(
            self.out,
            "style {:.4} {:.4} {:.2} {:.2} {:.2} {:.2}",
            viewport.px_to_normalized(opts.marker_size_px),
            viewport.px_to_normalized(opts.curve_line_width_px),
            r,
            g,
            b,
            a
        )?;
        for marker in &scene.control_points {
            let pos = viewport.normalized_to_render(marker.position);
            writeln!(
                self.out,
                "marker {:.4} {:.4} {:.4} {:.4}",
                pos.x, pos.y, marker.tangent.x, -marker.tangent.y
            )?;
        }
        for line in collect_lines(scene, &viewport) {
            let kind = match line.kind {
                LineKind::Finished => "finished",
                LineKind::InProgress => "progress",
            };
            writeln!(
                self.out,
                "line {} {:.4} {:.4} {:.4} {:.4}",
                kind, line.from.x, line.from.y, line.to.x, line.to.y
            )?;
        }
        writeln!(self.out, "end")?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}
