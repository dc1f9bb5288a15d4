//! Catmull-Rom-Splines (Headless-Host).
//!
//! Liest Maus-Events zeilenweise von stdin und schreibt jeden Frame über
//! den Text-Renderer nach stdout:
//!
//! ```text
//! left <x_px> <y_px>   Punkt setzen
//! right                Kurve in Arbeit verwerfen
//! middle               Neu zeichnen
//! alpha <wert>         Parametrisierung ändern
//! tick <ms>            Host-Frame fortschreiben
//! quit                 Beenden
//! ```

use anyhow::Context;
use catmull_rom_splines::{
    AppController, AppIntent, CurveRenderer, CurveSession, MouseButton, SplineOptions,
    TextRenderer,
};
use glam::Vec2;
use std::io::BufRead;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Catmull-Rom-Splines v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SplineOptions::config_path();
        let options = SplineOptions::load_from_file(&config_path);

        let mut session = CurveSession::with_options(options);
        let mut controller = AppController::new();
        let mut renderer = TextRenderer::new(std::io::stdout().lock());

        let stdin = std::io::stdin();
        for (line_no, line) in stdin.lock().lines().enumerate() {
            let line = line.context("stdin nicht lesbar")?;
            let Some(intent) = parse_event(&line) else {
                if !line.trim().is_empty() {
                    log::warn!("Zeile {}: unbekanntes Event '{}'", line_no + 1, line.trim());
                }
                continue;
            };

            if let Err(e) = controller.handle_intent(&mut session, intent) {
                log::warn!("Zeile {}: {:#}", line_no + 1, e);
                continue;
            }
            if session.should_exit {
                break;
            }

            let scene = controller.build_render_scene(&session);
            renderer.render(&scene)?;
        }

        log::info!(
            "{} Kurven geschlossen, {} Commands verarbeitet",
            session.finished_curves().len(),
            session.command_log.len()
        );
        Ok(())
    }
}

/// Übersetzt eine Eingabezeile in einen Intent.
fn parse_event(line: &str) -> Option<AppIntent> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?;
    let mut number = || parts.next().and_then(|s| s.parse::<f32>().ok());

    match keyword {
        "left" => {
            let x = number()?;
            let y = number()?;
            Some(AppIntent::ViewportClicked {
                button: MouseButton::Left,
                screen_pos: Vec2::new(x, y),
            })
        }
        "right" => Some(AppIntent::ViewportClicked {
            button: MouseButton::Right,
            screen_pos: Vec2::ZERO,
        }),
        "middle" => Some(AppIntent::RedrawRequested),
        "alpha" => Some(AppIntent::AlphaChanged { alpha: number()? }),
        "tick" => Some(AppIntent::FrameAdvanced {
            elapsed_ms: number()?,
        }),
        "quit" | "exit" => Some(AppIntent::ExitRequested),
        _ => None,
    }
}
