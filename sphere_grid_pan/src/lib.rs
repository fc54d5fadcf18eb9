// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sphere Grid Pan: drag, wheel and inertial coasting for a scroll offset.
//!
//! [`PanController`] is a three-state machine:
//!
//! - `Idle`: at rest. Wheel input still moves the offset.
//! - `Dragging`: a pointer is held. Each move shifts the offset opposite to the
//!   pointer and records a velocity.
//! - `Coasting`: after release, one step per frame applies the velocity and
//!   multiplies it by the friction factor, until both axes fall to the rest
//!   threshold.
//!
//! Frames come from a host-supplied [`FrameScheduler`]. [`ManualFrames`] is a
//! hand-pumped queue for tests and simple loops.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use sphere_grid_pan::{ManualFrames, PanConfig, PanController, PanState};
//!
//! let mut frames = ManualFrames::new();
//! let mut pan = PanController::new(PanConfig::default()).unwrap();
//!
//! pan.pointer_down(Point::new(100.0, 100.0), &mut frames);
//! pan.pointer_move(Point::new(150.0, 120.0));
//! assert_eq!(pan.offset(), Vec2::new(-25.0, -10.0));
//!
//! pan.pointer_up(&mut frames);
//! assert_eq!(pan.state(), PanState::Coasting);
//!
//! while let Some(frame) = frames.next_due() {
//!     pan.on_frame(frame, &mut frames);
//! }
//! assert_eq!(pan.state(), PanState::Idle);
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`PanController::handle_pointer_event`]
//!   for `ui-events` pointer streams.
//! - `serde`: serialization for [`PanConfig`].
//! - `tracing`: debug events on state changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod drag;
mod frame;
#[cfg(feature = "ui_events_adapter")]
mod pointer_adapter;

pub use config::{PanConfig, PanConfigError};
pub use controller::{PanController, PanState};
pub use frame::{FrameHandle, FrameScheduler, ManualFrames};
#[cfg(feature = "ui_events_adapter")]
pub use pointer_adapter::resolve_scroll_delta;
