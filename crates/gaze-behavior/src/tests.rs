//! Unit tests for the composite behaviors.
//!
//! All tests drive a hand-stepped clock (50 ms ticks unless noted) and a
//! seeded `GazeRng`, so every run is reproducible.

use gaze_core::{GazePoint, GazeRng, HeadDirection, Millis, Side};

use crate::{AlternatingGaze, Behavior, FaceSlot, GazeAversion, JointAttention, MutualGaze, SensedContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ctx_empty() -> SensedContext {
    SensedContext::default()
}

fn ctx_one_face(x: f32, y: f32) -> SensedContext {
    let mut ctx = SensedContext::default();
    ctx.update_faces(true, Some(GazePoint::new(x, y)), None, HeadDirection::None);
    ctx
}

fn ctx_two_faces(x1: f32, y1: f32, x2: f32, y2: f32) -> SensedContext {
    let mut ctx = SensedContext::default();
    ctx.update_faces(
        true,
        Some(GazePoint::new(x1, y1)),
        Some(GazePoint::new(x2, y2)),
        HeadDirection::None,
    );
    ctx
}

// ── SensedContext ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn missing_primary_substituted_with_center() {
        let mut ctx = SensedContext::default();
        ctx.update_faces(true, None, None, HeadDirection::None);
        assert_eq!(ctx.primary_face, Some(GazePoint::CENTER));
    }

    #[test]
    fn primary_cleared_without_user() {
        let mut ctx = SensedContext::default();
        ctx.update_faces(false, Some(GazePoint::new(0.3, 0.3)), None, HeadDirection::None);
        assert_eq!(ctx.primary_face, None);
        assert_eq!(ctx.user_target(), GazePoint::CENTER);
    }

    #[test]
    fn user_target_is_mirrored() {
        let ctx = ctx_one_face(0.3, 0.4);
        let t = ctx.user_target();
        assert!((t.x - 0.7).abs() < 1e-6);
        assert!((t.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn face_targets_per_slot() {
        let ctx = ctx_two_faces(0.2, 0.5, 0.8, 0.5);
        let p = ctx.face_target(FaceSlot::Primary).unwrap();
        let s = ctx.face_target(FaceSlot::Secondary).unwrap();
        assert!((p.x - 0.8).abs() < 1e-6);
        assert!((s.x - 0.2).abs() < 1e-6);
        assert_eq!(ctx_one_face(0.5, 0.5).face_target(FaceSlot::Secondary), None);
    }

    #[test]
    fn face_count() {
        assert_eq!(ctx_empty().face_count(), 0);
        assert_eq!(ctx_one_face(0.5, 0.5).face_count(), 1);
        assert_eq!(ctx_two_faces(0.4, 0.5, 0.6, 0.5).face_count(), 2);
    }
}

// ── GazeAversion ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod aversion_tests {
    use super::*;

    /// With interval_min = interval_max = 1000, aversion starts land every
    /// interval + aversion duration (the next one is scheduled when the
    /// previous finishes).
    #[test]
    fn cadence_is_regular_with_fixed_interval() {
        let mut rng = GazeRng::new(1);
        let mut aversion = GazeAversion::with_timing(300, 1_000, 1_000, Millis(0), &mut rng);

        let mut starts = Vec::new();
        let mut was_averting = false;
        for now_ms in (0..15_000u64).step_by(50) {
            aversion.update(Millis(now_ms), &mut rng);
            if aversion.averting() && !was_averting {
                starts.push(now_ms);
            }
            was_averting = aversion.averting();
        }

        assert!(starts.len() >= 10, "expected ~11 aversions, got {}", starts.len());
        assert_eq!(starts[0], 1_000);
        for pair in starts.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(
                (1_000..=1_300).contains(&gap),
                "start-to-start gap {gap} outside interval + aversion duration"
            );
        }
    }

    #[test]
    fn target_is_never_near_center_horizontally() {
        let mut rng = GazeRng::new(2);
        let mut aversion = GazeAversion::with_timing(300, 500, 500, Millis(0), &mut rng);

        let mut seen = 0;
        for now_ms in (0..60_000u64).step_by(50) {
            if aversion.update(Millis(now_ms), &mut rng) {
                let p = aversion.position();
                assert!(
                    (p.x - 0.5).abs() >= 0.2 - 1e-6,
                    "aversion x {} too close to center",
                    p.x
                );
                assert!((p.y - 0.5).abs() <= 0.3 + 1e-6);
                seen += 1;
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn dormant_before_first_interval() {
        let mut rng = GazeRng::new(3);
        let mut aversion = GazeAversion::with_timing(300, 1_000, 3_000, Millis(0), &mut rng);
        for now_ms in (0..1_000u64).step_by(50) {
            assert!(!aversion.update(Millis(now_ms), &mut rng));
        }
    }
}

// ── MutualGaze ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mutual_tests {
    use super::*;

    #[test]
    fn tracks_mirrored_face() {
        let mut rng = GazeRng::new(4);
        let ctx = ctx_one_face(0.3, 0.4);
        let mut gaze = MutualGaze::new(GazePoint::CENTER, Millis(0), &mut rng);

        // The first aversion is at least 1000 ms out; converge before then.
        let mut point = GazePoint::CENTER;
        for now_ms in (0..950u64).step_by(50) {
            let step = gaze.advance(Millis(now_ms), &ctx, &mut rng);
            assert!(step.active, "mutual gaze never self-terminates");
            point = step.point;
        }
        assert!(point.distance(GazePoint::new(0.7, 0.4)) < 0.15);
    }

    #[test]
    fn drifts_to_center_without_user() {
        let mut rng = GazeRng::new(5);
        let ctx = ctx_empty();
        let mut gaze = MutualGaze::new(GazePoint::new(0.9, 0.2), Millis(0), &mut rng);

        let mut point = GazePoint::new(0.9, 0.2);
        for now_ms in (0..950u64).step_by(50) {
            point = gaze.advance(Millis(now_ms), &ctx, &mut rng).point;
        }
        assert!(point.distance(GazePoint::CENTER) < 0.1);
    }

    #[test]
    fn aversion_preempts_tracking() {
        let mut rng = GazeRng::new(6);
        let ctx = ctx_one_face(0.5, 0.5);
        let mut gaze = MutualGaze::new(GazePoint::CENTER, Millis(0), &mut rng);

        let mut averted = false;
        for now_ms in (0..5_000u64).step_by(50) {
            let step = gaze.advance(Millis(now_ms), &ctx, &mut rng);
            if gaze.phase() == Some("averting") {
                averted = true;
                // During an aversion the gaze is visibly off the face.
                assert!((step.point.x - 0.5).abs() >= 0.2 - 1e-6);
            }
        }
        assert!(averted, "no aversion within 5 s of mutual gaze");
    }
}

// ── AlternatingGaze ───────────────────────────────────────────────────────────

#[cfg(test)]
mod alternating_tests {
    use super::*;

    fn run_ticks(
        gaze: &mut AlternatingGaze,
        ctx:  &SensedContext,
        rng:  &mut GazeRng,
        from_ms: u64,
        to_ms:   u64,
    ) -> crate::Step {
        let mut last = crate::Step::active(GazePoint::CENTER);
        for now_ms in (from_ms..to_ms).step_by(50) {
            last = gaze.advance(Millis(now_ms), ctx, rng);
        }
        last
    }

    #[test]
    fn one_full_cycle_flips_to_slot_two() {
        let mut rng = GazeRng::new(7);
        let ctx = ctx_two_faces(0.3, 0.5, 0.7, 0.5);
        let mut gaze = AlternatingGaze::new(ctx.face_target(FaceSlot::Primary).unwrap(), Millis(0));

        assert_eq!(gaze.active_slot(), FaceSlot::Primary);
        // 2000 ms dwell + a 0.15-speed saccade completes well within 3 s.
        run_ticks(&mut gaze, &ctx, &mut rng, 0, 3_000);
        assert_eq!(gaze.active_slot(), FaceSlot::Secondary);

        // After the flip it dwells on the exact mirrored secondary position.
        let step = gaze.advance(Millis(3_000), &ctx, &mut rng);
        assert_eq!(step.point, ctx.face_target(FaceSlot::Secondary).unwrap());
    }

    #[test]
    fn lost_face_flips_within_one_tick() {
        let mut rng = GazeRng::new(8);
        let mut ctx = ctx_two_faces(0.3, 0.5, 0.7, 0.5);
        let mut gaze = AlternatingGaze::new(ctx.face_target(FaceSlot::Primary).unwrap(), Millis(0));

        run_ticks(&mut gaze, &ctx, &mut rng, 0, 3_000);
        assert_eq!(gaze.active_slot(), FaceSlot::Secondary);

        // Second face vanishes mid-dwell.
        ctx.update_faces(true, Some(GazePoint::new(0.3, 0.5)), None, HeadDirection::None);
        let step = gaze.advance(Millis(3_000), &ctx, &mut rng);
        assert!(step.active);
        assert_eq!(gaze.active_slot(), FaceSlot::Primary);
        assert_eq!(step.point, ctx.face_target(FaceSlot::Primary).unwrap());
    }

    #[test]
    fn both_faces_gone_reports_inactive_at_center() {
        let mut rng = GazeRng::new(9);
        let ctx = ctx_empty();
        let mut gaze = AlternatingGaze::new(GazePoint::CENTER, Millis(0));

        let step = gaze.advance(Millis(0), &ctx, &mut rng);
        assert!(!step.active);
        assert_eq!(step.point, GazePoint::CENTER);
    }

    #[test]
    fn missing_other_face_keeps_dwelling() {
        let mut rng = GazeRng::new(10);
        let ctx = ctx_one_face(0.3, 0.5);
        let mut gaze = AlternatingGaze::new(ctx.face_target(FaceSlot::Primary).unwrap(), Millis(0));

        // Far past the dwell duration: with no second face, it stays put.
        let step = run_ticks(&mut gaze, &ctx, &mut rng, 0, 6_000);
        assert!(step.active);
        assert_eq!(gaze.active_slot(), FaceSlot::Primary);
        assert_eq!(gaze.phase(), Some("dwelling"));
    }
}

// ── JointAttention ────────────────────────────────────────────────────────────

#[cfg(test)]
mod joint_tests {
    use super::*;

    #[test]
    fn responding_left_holds_at_0_8() {
        let mut rng = GazeRng::new(11);
        let ctx = ctx_one_face(0.5, 0.5);
        let mut ja = JointAttention::responding(Side::Left, GazePoint::CENTER, Millis(0));

        for now_ms in (0..2_300u64).step_by(50) {
            let step = ja.advance(Millis(now_ms), &ctx, &mut rng);
            assert!(step.active);
            if ja.phase() == Some("hold") {
                assert_eq!(step.point, GazePoint::new(0.8, 0.5));
            }
        }
    }

    #[test]
    fn total_duration_is_transition_plus_hold_plus_return() {
        let mut rng = GazeRng::new(12);
        let ctx = ctx_one_face(0.5, 0.5);
        let mut ja = JointAttention::responding(Side::Left, GazePoint::CENTER, Millis(0));

        let mut finished_at = None;
        for now_ms in (0..5_000u64).step_by(50) {
            let step = ja.advance(Millis(now_ms), &ctx, &mut rng);
            if !step.active {
                finished_at = Some(now_ms);
                break;
            }
        }
        assert_eq!(finished_at, Some(2_600), "300 + 2000 + 300 ms");
    }

    #[test]
    fn initiating_left_targets_0_2() {
        let mut rng = GazeRng::new(13);
        let ctx = ctx_one_face(0.5, 0.5);
        let mut ja = JointAttention::initiating(Side::Left, GazePoint::CENTER, Millis(0));

        let mut held = false;
        for now_ms in (0..2_300u64).step_by(50) {
            let step = ja.advance(Millis(now_ms), &ctx, &mut rng);
            if ja.phase() == Some("hold") {
                assert_eq!(step.point, GazePoint::new(0.2, 0.5));
                held = true;
            }
        }
        assert!(held);
    }

    #[test]
    fn return_tracks_a_moving_face() {
        let mut rng = GazeRng::new(14);
        let mut ctx = ctx_one_face(0.4, 0.5);
        let mut ja = JointAttention::initiating(Side::Right, GazePoint::CENTER, Millis(0));

        let mut last = GazePoint::CENTER;
        for now_ms in (0..2_650u64).step_by(50) {
            // The face drifts during the gesture; the return phase re-reads it.
            if now_ms == 2_400 {
                ctx.update_faces(true, Some(GazePoint::new(0.2, 0.6)), None, HeadDirection::None);
            }
            last = ja.advance(Millis(now_ms), &ctx, &mut rng).point;
        }
        // Final point is the *updated* mirrored face position.
        assert_eq!(last, GazePoint::new(0.8, 0.6));
    }

    #[test]
    fn is_joint_attention_and_object_safe() {
        let ja: Box<dyn Behavior> =
            Box::new(JointAttention::initiating(Side::Left, GazePoint::CENTER, Millis(0)));
        assert!(ja.is_joint_attention());
        assert_eq!(ja.name(), "InitiatingJointAttention");

        let mut rng = GazeRng::new(15);
        let mutual: Box<dyn Behavior> = Box::new(MutualGaze::new(GazePoint::CENTER, Millis(0), &mut rng));
        assert!(!mutual.is_joint_attention());
    }
}
