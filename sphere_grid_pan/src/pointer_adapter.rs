// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of `ui-events` pointer streams into a [`PanController`].

use kurbo::Vec2;
use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerScrollEvent};

use crate::controller::PanController;
use crate::frame::FrameScheduler;

impl PanController {
    /// Feeds one pointer event into the controller.
    ///
    /// - `Down` starts a drag, `Move` pans.
    /// - `Up`, `Leave` and `Cancel` release the drag.
    /// - `Scroll` is resolved to pixels and applied as wheel input.
    ///   `page_size` is the size of one "page" for page-based deltas,
    ///   usually the visible extent.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_pointer_event(
        &mut self,
        event: &PointerEvent,
        page_size: Vec2,
        frames: &mut impl FrameScheduler,
    ) -> bool {
        match event {
            PointerEvent::Down(e) => {
                self.pointer_down(e.state.logical_point(), frames);
                true
            }
            PointerEvent::Move(e) => self.pointer_move(e.current.logical_point()),
            PointerEvent::Up(_) => self.pointer_up(frames),
            PointerEvent::Leave(_) => self.pointer_leave(frames),
            PointerEvent::Cancel(_) => self.pointer_cancel(frames),
            PointerEvent::Scroll(e) => {
                let delta = resolve_scroll_delta(e, self.config().line_size, page_size);
                self.wheel(delta)
            }
            PointerEvent::Enter(_) | PointerEvent::Gesture(_) => false,
        }
    }
}

/// Converts a scroll event into a logical pixel delta.
///
/// Pixel deltas are physical and get divided by the event's scale factor.
/// Line and page deltas count in `line_size` and `page_size` units.
#[must_use]
pub fn resolve_scroll_delta(event: &PointerScrollEvent, line_size: f64, page_size: Vec2) -> Vec2 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => {
            // Physical pixels; undo the device scale.
            let logical = pos.to_logical(event.state.scale_factor);
            Vec2::new(logical.x, logical.y)
        }
        ScrollDelta::LineDelta(x, y) => {
            // Uniform line height on both axes
            Vec2::new(f64::from(*x) * line_size, f64::from(*y) * line_size)
        }
        ScrollDelta::PageDelta(x, y) => {
            // One page is one visible extent
            Vec2::new(f64::from(*x) * page_size.x, f64::from(*y) * page_size.y)
        }
    }
}
