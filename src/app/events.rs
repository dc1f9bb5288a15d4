//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::shared::SplineOptions;
use glam::Vec2;

/// Maustaste eines Viewport-Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Punkt setzen
    Left,
    /// Kurve in Arbeit verwerfen
    Right,
    /// Neu zeichnen
    Middle,
}

/// App-Intents: Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick im Viewport (Pixel-Koordinaten, Ursprung oben links)
    ViewportClicked {
        button: MouseButton,
        screen_pos: Vec2,
    },
    /// Kontrollpunkt direkt in normalisierten Koordinaten setzen
    ControlPointRequested { pos: Vec2 },
    /// Kurve in Arbeit verwerfen
    ResetRequested,
    /// Fertige Kurven neu (animiert) zeichnen
    RedrawRequested,
    /// Parametrisierungs-Exponent geändert
    AlphaChanged { alpha: f32 },
    /// Optionen übernommen
    OptionsChanged { options: SplineOptions },
    /// Host-Frame ist vergangen
    FrameAdvanced { elapsed_ms: f32 },
    /// Anwendung beenden
    ExitRequested,
}

/// App-Commands: mutierende Operationen auf der Session.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkt hinzufügen (normalisiert)
    AddControlPoint { pos: Vec2 },
    /// Kurve in Arbeit verwerfen
    ResetSession,
    /// Nachzeichnen fertiger Kurven starten
    RequestRedraw,
    /// Alpha setzen
    SetAlpha { alpha: f32 },
    /// Optionen ersetzen
    ApplyOptions { options: SplineOptions },
    /// Animation um einen Frame fortschreiben
    AdvanceFrame { elapsed_ms: f32 },
    /// Beenden anfordern
    RequestExit,
}
