// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drag, release and coast sequences.

use kurbo::{Point, Vec2};
use proptest::prelude::*;
use sphere_grid_pan::{ManualFrames, PanConfig, PanController, PanState};

fn release_with_velocity(pan: &mut PanController, frames: &mut ManualFrames, pointer_step: Vec2) {
    pan.pointer_down(Point::ZERO, frames);
    pan.pointer_move(Point::ZERO + pointer_step);
    pan.pointer_up(frames);
}

#[test]
fn coast_from_five_pixels_per_frame() {
    let mut frames = ManualFrames::new();
    let mut pan = PanController::new(PanConfig::default()).unwrap();
    // A -50px pointer step gives +5px/frame of velocity.
    release_with_velocity(&mut pan, &mut frames, Vec2::new(-50.0, 0.0));
    assert_eq!(pan.velocity(), Vec2::new(5.0, 0.0));
    let start = pan.offset();

    let mut ticks = 0;
    while let Some(frame) = frames.next_due() {
        pan.on_frame(frame, &mut frames);
        ticks += 1;
    }

    // 5 * 0.95^76 > 0.1 >= 5 * 0.95^77
    assert_eq!(ticks, 77);
    assert!(ticks <= 90);
    assert_eq!(pan.state(), PanState::Idle);

    // Sum of 5 * 0.95^k for k in 1..=76.
    let travelled = pan.offset().x - start.x;
    assert!(travelled > 93.0 && travelled < 93.15, "{travelled}");
    assert!(travelled < 100.0);
    assert_eq!(pan.offset().y, start.y);
}

#[test]
fn either_axis_keeps_the_coast_alive() {
    let mut frames = ManualFrames::new();
    let mut pan = PanController::new(PanConfig::default()).unwrap();
    release_with_velocity(&mut pan, &mut frames, Vec2::new(-0.5, -30.0));

    // x starts at 0.05, below the threshold; y carries the coast.
    let frame = frames.next_due().unwrap();
    assert!(pan.on_frame(frame, &mut frames));
    assert!(pan.is_coasting());
    assert!(pan.velocity().x.abs() < 0.1);
}

#[test]
fn new_drag_during_coast_takes_over() {
    let mut frames = ManualFrames::new();
    let mut pan = PanController::new(PanConfig::default()).unwrap();
    release_with_velocity(&mut pan, &mut frames, Vec2::new(-50.0, 0.0));
    for _ in 0..5 {
        let frame = frames.next_due().unwrap();
        pan.on_frame(frame, &mut frames);
    }
    let offset = pan.offset();

    pan.pointer_down(Point::new(300.0, 300.0), &mut frames);
    assert_eq!(pan.state(), PanState::Dragging);
    assert!(!frames.has_pending());
    pan.pointer_move(Point::new(310.0, 300.0));
    assert_eq!(pan.offset(), offset - Vec2::new(5.0, 0.0));
}

#[test]
fn frames_pumped_in_batches_match_one_at_a_time() {
    let mut one_frames = ManualFrames::new();
    let mut one = PanController::new(PanConfig::default()).unwrap();
    release_with_velocity(&mut one, &mut one_frames, Vec2::new(-40.0, 25.0));
    while let Some(frame) = one_frames.next_due() {
        one.on_frame(frame, &mut one_frames);
    }

    let mut batch_frames = ManualFrames::new();
    let mut batch = PanController::new(PanConfig::default()).unwrap();
    release_with_velocity(&mut batch, &mut batch_frames, Vec2::new(-40.0, 25.0));
    while batch_frames.has_pending() {
        for frame in batch_frames.take_due() {
            batch.on_frame(frame, &mut batch_frames);
        }
    }

    assert_eq!(one.offset(), batch.offset());
    assert_eq!(one_frames.requested(), batch_frames.requested());
}

proptest! {
    #[test]
    fn coasting_always_settles(
        dx in -500.0_f64..500.0,
        dy in -500.0_f64..500.0,
        friction in 0.5_f64..0.99,
    ) {
        let config = PanConfig { friction, ..PanConfig::default() };
        let mut frames = ManualFrames::new();
        let mut pan = PanController::new(config).unwrap();
        release_with_velocity(&mut pan, &mut frames, Vec2::new(dx, dy));

        // |v| <= 50, so 50 * 0.99^n <= 0.1 within ~620 frames.
        let mut ticks = 0_u32;
        while let Some(frame) = frames.next_due() {
            pan.on_frame(frame, &mut frames);
            ticks += 1;
            prop_assert!(ticks < 1_000);
        }
        prop_assert_eq!(pan.state(), PanState::Idle);
        prop_assert_eq!(pan.velocity(), Vec2::ZERO);
    }

    #[test]
    fn velocity_decays_by_friction_each_frame(
        dx in 5.0_f64..500.0,
        frames_to_run in 1_usize..20,
    ) {
        let mut frames = ManualFrames::new();
        let mut pan = PanController::new(PanConfig::default()).unwrap();
        release_with_velocity(&mut pan, &mut frames, Vec2::new(-dx, 0.0));
        let v0 = pan.velocity().x;

        for n in 1..=frames_to_run {
            let expected = v0 * 0.95_f64.powi(i32::try_from(n).unwrap());
            if expected <= 0.1 + 1e-6 {
                break;
            }
            let frame = frames.next_due().unwrap();
            pan.on_frame(frame, &mut frames);
            prop_assert!((pan.velocity().x - expected).abs() < 1e-9);
        }
    }
}
