// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::config::{PanConfig, PanConfigError};
use crate::drag::DragAnchor;
use crate::frame::{FrameHandle, FrameScheduler};

/// What the controller is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanState {
    /// No pointer is held and the offset is at rest.
    #[default]
    Idle,
    /// A pointer is held; moves pan the offset directly.
    Dragging,
    /// The pointer was released with residual velocity; each frame applies
    /// and decays it.
    Coasting,
}

/// Drag, wheel and inertial coasting over a 2D scroll offset.
///
/// The offset is in content pixels. Dragging moves the content with the
/// pointer (the offset moves opposite to the pointer), releasing hands over to
/// per-frame coasting, and wheel input adds to the offset directly.
///
/// Any transition out of `Coasting` cancels the outstanding frame request, so
/// at most one request is pending at any time.
#[derive(Clone, Debug)]
pub struct PanController {
    config: PanConfig,
    state: PanState,
    offset: Vec2,
    velocity: Vec2,
    anchor: DragAnchor,
    frame: Option<FrameHandle>,
}

impl PanController {
    /// Creates an idle controller at offset zero.
    pub fn new(config: PanConfig) -> Result<Self, PanConfigError> {
        Ok(Self {
            config: config.validate()?,
            state: PanState::Idle,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            anchor: DragAnchor::default(),
            frame: None,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PanConfig {
        &self.config
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> PanState {
        self.state
    }

    /// Returns `true` while a pointer is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == PanState::Dragging
    }

    /// Returns `true` while coasting.
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.state == PanState::Coasting
    }

    /// Returns the scroll offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Moves the scroll offset without touching the current state.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Returns the velocity in pixels per frame.
    ///
    /// During a drag this is the velocity that a release would coast with.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Returns the frame request the controller is waiting on, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Pointer travel since the drag began, or `None` when not dragging.
    ///
    /// Hosts can use this to tell a click from a drag.
    #[must_use]
    pub fn drag_distance(&self) -> Option<Vec2> {
        if !self.is_dragging() {
            return None;
        }
        self.anchor
            .last()
            .and_then(|last| self.anchor.total_offset(last))
    }

    /// Starts a drag at `pos`, stopping any coasting first.
    pub fn pointer_down(&mut self, pos: Point, frames: &mut impl FrameScheduler) {
        self.cancel_frame(frames);
        self.velocity = Vec2::ZERO;
        self.anchor.start(pos);
        self.set_state(PanState::Dragging);
    }

    /// Pans by the movement since the previous pointer position.
    ///
    /// Ignored unless dragging. Returns `true` if the offset changed.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        if self.state != PanState::Dragging {
            return false;
        }
        let Some(delta) = self.anchor.advance(pos) else {
            return false;
        };
        self.offset -= delta * self.config.drag_gain;
        self.velocity = -delta * self.config.velocity_gain;
        delta != Vec2::ZERO
    }

    /// Ends a drag.
    ///
    /// Coasting begins if the drag velocity exceeds the rest threshold on
    /// either axis; the first step runs on the next frame. Ignored unless
    /// dragging. Returns `true` if a drag was ended.
    pub fn pointer_up(&mut self, frames: &mut impl FrameScheduler) -> bool {
        if self.state != PanState::Dragging {
            return false;
        }
        self.anchor.end();
        if self.above_rest() {
            self.frame = Some(frames.request_frame());
            self.set_state(PanState::Coasting);
        } else {
            self.settle();
        }
        true
    }

    /// The pointer left the surface; treated as a release.
    pub fn pointer_leave(&mut self, frames: &mut impl FrameScheduler) -> bool {
        self.pointer_up(frames)
    }

    /// The platform cancelled the pointer stream; treated as a release.
    pub fn pointer_cancel(&mut self, frames: &mut impl FrameScheduler) -> bool {
        self.pointer_up(frames)
    }

    /// Adds a wheel delta (in pixels) to the offset, scaled by the wheel gain.
    ///
    /// Does not change state; a coast in progress keeps going. Returns `true`
    /// if the offset changed.
    pub fn wheel(&mut self, delta: Vec2) -> bool {
        let step = delta * self.config.wheel_gain;
        self.offset += step;
        step != Vec2::ZERO
    }

    /// Advances coasting by one frame.
    ///
    /// `handle` must be the pending request; anything else is stale and
    /// ignored. Returns `true` if the offset changed.
    pub fn on_frame(&mut self, handle: FrameHandle, frames: &mut impl FrameScheduler) -> bool {
        if self.frame != Some(handle) {
            #[cfg(feature = "tracing")]
            tracing::trace!(frame = handle.to_raw(), "ignoring stale frame");
            return false;
        }
        self.frame = None;
        if self.state != PanState::Coasting {
            return false;
        }
        self.velocity *= self.config.friction;
        if self.above_rest() {
            self.offset += self.velocity;
            self.frame = Some(frames.request_frame());
            true
        } else {
            self.settle();
            false
        }
    }

    /// Stops coasting immediately. A no-op in any other state.
    pub fn cancel_coasting(&mut self, frames: &mut impl FrameScheduler) {
        if self.state == PanState::Coasting {
            self.cancel_frame(frames);
            self.settle();
        }
    }

    /// Withdraws any pending frame request, leaving the state untouched.
    ///
    /// Called by owners that are going away.
    pub fn release_frames(&mut self, frames: &mut impl FrameScheduler) {
        self.cancel_frame(frames);
    }

    fn above_rest(&self) -> bool {
        let threshold = self.config.rest_threshold;
        self.velocity.x.abs() > threshold || self.velocity.y.abs() > threshold
    }

    fn settle(&mut self) {
        self.velocity = Vec2::ZERO;
        self.set_state(PanState::Idle);
    }

    fn cancel_frame(&mut self, frames: &mut impl FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            frames.cancel_frame(handle);
        }
    }

    fn set_state(&mut self, state: PanState) {
        if self.state != state {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                from = ?self.state,
                to = ?state,
                offset_x = self.offset.x,
                offset_y = self.offset.y,
                "pan state changed"
            );
            self.state = state;
        }
    }
}
