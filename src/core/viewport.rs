//! Abbildung zwischen Fenster-Pixeln und normalisierten Kurven-Koordinaten.

use glam::Vec2;

/// Fenster mit fester Pixelgröße.
///
/// Normalisierte Koordinaten liegen in [0, 1]², Ursprung oben links wie die
/// Maus-Koordinaten. Der Renderer arbeitet mit y nach oben (`1 - y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Größe in Pixeln
    pub size: Vec2,
}

impl Viewport {
    /// Erstellt einen Viewport der Größe `width × height` (Pixel).
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width.max(1.0), height.max(1.0)),
        }
    }

    /// Erstellt einen Viewport aus `[Breite, Höhe]`.
    pub fn from_size(size: [f32; 2]) -> Self {
        Self::new(size[0], size[1])
    }

    /// Konvertiert Maus-Pixel zu normalisierten Koordinaten.
    pub fn screen_to_normalized(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos / self.size
    }

    /// Konvertiert normalisierte Koordinaten zurück zu Pixeln.
    pub fn normalized_to_screen(&self, pos: Vec2) -> Vec2 {
        pos * self.size
    }

    /// Konvertiert normalisierte Koordinaten in die Render-Projektion (y gespiegelt).
    pub fn normalized_to_render(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x, 1.0 - pos.y)
    }

    /// Umrechnung eines Pixel-Radius in normalisierte Einheiten (bezogen auf die Breite).
    pub fn px_to_normalized(&self, px: f32) -> f32 {
        px / self.size.x
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_size(crate::shared::options::VIEWPORT_SIZE)
    }
}
