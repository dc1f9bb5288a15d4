//! Schrittweises Nachzeichnen fertiger Kurven, getaktet über Host-Frames.
//!
//! Der Host meldet pro Frame die vergangene Zeit; daraus ergibt sich, wie
//! viele Linien bereits sichtbar sind. Es wird nie aktiv gewartet.

/// Fortschritt einer laufenden Nachzeichnen-Animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAnimation {
    /// Vergangene Zeit seit dem Start (ms), `None` = keine Animation aktiv
    elapsed_ms: Option<f32>,
    /// Zeit pro aufgedeckter Linie (ms)
    pub line_interval_ms: f32,
}

impl RevealAnimation {
    /// Erstellt eine inaktive Animation.
    pub fn new(line_interval_ms: f32) -> Self {
        Self {
            elapsed_ms: None,
            line_interval_ms,
        }
    }

    /// Startet die Animation von vorn.
    pub fn restart(&mut self) {
        self.elapsed_ms = Some(0.0);
    }

    /// Bricht die Animation ab; danach ist alles sichtbar.
    pub fn stop(&mut self) {
        self.elapsed_ms = None;
    }

    /// Ob gerade animiert wird.
    pub fn is_running(&self) -> bool {
        self.elapsed_ms.is_some()
    }

    /// Schreibt einen Host-Frame fort.
    ///
    /// Beendet die Animation, sobald alle `total_lines` sichtbar sind.
    pub fn advance(&mut self, elapsed_ms: f32, total_lines: usize) {
        let Some(current) = self.elapsed_ms.as_mut() else {
            return;
        };
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            *current += elapsed_ms;
        }
        if self.visible_lines(total_lines).is_none() {
            self.elapsed_ms = None;
        }
    }

    /// Anzahl sichtbarer Linien; `None` = alle (keine Animation aktiv oder fertig).
    pub fn visible_lines(&self, total_lines: usize) -> Option<usize> {
        let elapsed = self.elapsed_ms?;
        if self.line_interval_ms <= 0.0 {
            return None;
        }
        let shown = (elapsed / self.line_interval_ms).floor() as usize;
        (shown < total_lines).then_some(shown)
    }
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self::new(crate::shared::options::REVEAL_LINE_INTERVAL_MS)
    }
}
