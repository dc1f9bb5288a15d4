use catmull_rom_splines::{
    AddPointOutcome, AppCommand, AppController, AppIntent, CurveSession, IgnoreReason,
    MouseButton, SplineError, SplineOptions,
};
use glam::Vec2;

fn click(controller: &mut AppController, session: &mut CurveSession, x_px: f32, y_px: f32) {
    controller
        .handle_intent(
            session,
            AppIntent::ViewportClicked {
                button: MouseButton::Left,
                screen_pos: Vec2::new(x_px, y_px),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

#[test]
fn test_left_click_adds_normalized_point_and_logs_command() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();

    click(&mut controller, &mut session, 500.0, 350.0);

    assert_eq!(session.control_points(), vec![Vec2::new(0.5, 0.5)]);
    assert_eq!(
        session.last_add_outcome,
        Some(AddPointOutcome::Added {
            point_index: 0,
            segment_added: false
        })
    );

    let last = session
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::AddControlPoint { pos } => assert_eq!(*pos, Vec2::new(0.5, 0.5)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_square_in_pixels_closes_loop() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();

    // (0.1,0.1), (0.5,0.1), (0.5,0.5), (0.1,0.5) im 1000×700-Fenster
    for (x, y) in [(100.0, 70.0), (500.0, 70.0), (500.0, 350.0), (100.0, 350.0)] {
        click(&mut controller, &mut session, x, y);
    }
    click(&mut controller, &mut session, 105.0, 71.4);

    assert_eq!(
        session.last_add_outcome,
        Some(AddPointOutcome::Closed {
            curve_index: 0,
            segment_count: 4
        })
    );
    assert!(session.control_points().is_empty());
    assert_eq!(session.finished_curves().len(), 1);
    assert_eq!(session.command_log.len(), 5);
}

#[test]
fn test_right_click_resets_only_working_curve() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();

    for (x, y) in [(100.0, 70.0), (500.0, 70.0), (500.0, 350.0), (100.0, 350.0), (100.0, 70.0)] {
        click(&mut controller, &mut session, x, y);
    }
    click(&mut controller, &mut session, 700.0, 500.0);
    click(&mut controller, &mut session, 900.0, 600.0);
    assert_eq!(session.control_points().len(), 2);

    controller
        .handle_intent(
            &mut session,
            AppIntent::ViewportClicked {
                button: MouseButton::Right,
                screen_pos: Vec2::ZERO,
            },
        )
        .expect("Reset sollte ohne Fehler durchlaufen");

    assert!(session.control_points().is_empty());
    assert_eq!(session.finished_curves().len(), 1);
    assert!(matches!(
        session.command_log.last(),
        Some(AppCommand::ResetSession)
    ));
}

#[test]
fn test_near_first_with_two_points_is_ignored() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();

    click(&mut controller, &mut session, 100.0, 70.0);
    click(&mut controller, &mut session, 500.0, 70.0);
    click(&mut controller, &mut session, 110.0, 75.0);

    assert_eq!(
        session.last_add_outcome,
        Some(AddPointOutcome::Ignored(IgnoreReason::ClosureTooFewPoints))
    );
    assert_eq!(session.control_points().len(), 2);
}

#[test]
fn test_invalid_alpha_is_rejected_and_previous_kept() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();

    controller
        .handle_intent(&mut session, AppIntent::AlphaChanged { alpha: 1.0 })
        .expect("Gültiges Alpha");
    assert_eq!(session.alpha(), 1.0);

    let err = controller
        .handle_intent(&mut session, AppIntent::AlphaChanged { alpha: 1.5 })
        .expect_err("Ungültiges Alpha muss abgelehnt werden");
    assert_eq!(
        err.downcast_ref::<SplineError>(),
        Some(&SplineError::InvalidAlpha(1.5))
    );
    assert_eq!(session.alpha(), 1.0);
}

#[test]
fn test_options_changed_with_invalid_alpha_keeps_previous_alpha() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();

    controller
        .handle_intent(&mut session, AppIntent::AlphaChanged { alpha: 1.0 })
        .expect("Gültiges Alpha");
    controller
        .handle_intent(
            &mut session,
            AppIntent::OptionsChanged {
                options: SplineOptions {
                    alpha: 3.0,
                    viewport_size: [500.0, 350.0],
                    ..SplineOptions::default()
                },
            },
        )
        .expect("Optionen sollten übernommen werden");

    assert_eq!(session.alpha(), 1.0);
    assert_eq!(session.options().viewport_size, [500.0, 350.0]);

    // Klick wird jetzt gegen das kleinere Fenster normalisiert
    click(&mut controller, &mut session, 250.0, 175.0);
    assert_eq!(session.control_points(), vec![Vec2::new(0.5, 0.5)]);
}

#[test]
fn test_click_outside_window_is_ignored() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();

    click(&mut controller, &mut session, 1200.0, 350.0);
    assert_eq!(
        session.last_add_outcome,
        Some(AddPointOutcome::Ignored(IgnoreReason::OutOfRange))
    );
    assert!(session.control_points().is_empty());
}

#[test]
fn test_redraw_and_frames_drive_reveal() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();

    for (x, y) in [(100.0, 70.0), (500.0, 70.0), (500.0, 350.0), (100.0, 350.0), (100.0, 70.0)] {
        click(&mut controller, &mut session, x, y);
    }
    controller
        .handle_intent(&mut session, AppIntent::FrameAdvanced { elapsed_ms: 9.0 })
        .expect("Frame");
    let scene = controller.build_render_scene(&session);
    assert_eq!(scene.visible_finished_lines, Some(3));

    controller
        .handle_intent(&mut session, AppIntent::FrameAdvanced { elapsed_ms: 1000.0 })
        .expect("Frame");
    let scene = controller.build_render_scene(&session);
    assert_eq!(scene.visible_finished_lines, None);

    controller
        .handle_intent(&mut session, AppIntent::RedrawRequested)
        .expect("Redraw");
    let scene = controller.build_render_scene(&session);
    assert_eq!(scene.visible_finished_lines, Some(0));
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut session = CurveSession::new();
    assert!(!session.should_exit);

    controller
        .handle_intent(&mut session, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(session.should_exit);
    assert!(matches!(
        session.command_log.last(),
        Some(AppCommand::RequestExit)
    ));
}
