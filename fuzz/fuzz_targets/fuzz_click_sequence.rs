#![no_main]

use catmull_rom_splines::{AddPointOutcome, CurveSession};
use libfuzzer_sys::fuzz_target;

// Jeweils 5 Bytes: Opcode + zwei u16-Koordinaten (0..=65535 -> 0.0..=1.0)
fuzz_target!(|data: &[u8]| {
    let mut session = CurveSession::new();

    for chunk in data.chunks_exact(5) {
        match chunk[0] % 8 {
            0 => session.reset_session(),
            1 => session.request_redraw(),
            2 => session.advance_frame(f32::from(chunk[1])),
            _ => {
                let x = f32::from(u16::from_le_bytes([chunk[1], chunk[2]])) / 65535.0;
                let y = f32::from(u16::from_le_bytes([chunk[3], chunk[4]])) / 65535.0;
                let before = session.control_points().len();
                match session.add_control_point(x, y) {
                    AddPointOutcome::Closed { segment_count, .. } => {
                        assert_eq!(segment_count, before);
                        assert!(session.control_points().is_empty());
                    }
                    AddPointOutcome::Added { point_index, .. } => {
                        assert_eq!(point_index, before);
                    }
                    AddPointOutcome::Ignored(_) => {
                        assert_eq!(session.control_points().len(), before);
                    }
                }
            }
        }

        let working = session.control_points().len();
        assert_eq!(
            session.builder().segments().len(),
            working.saturating_sub(3)
        );
    }

    for curve in session.finished_curves() {
        assert!(curve.segment_count() >= 4);
        assert_eq!(curve.segment_count(), curve.points().len());
        if let Ok(samples) = session.sample_closed_curve(curve, 8) {
            assert!(samples.iter().flatten().all(|p| p.is_finite()));
        }
    }
});
