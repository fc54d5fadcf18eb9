// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame scheduling seam.
//!
//! Coasting advances once per display frame. Rather than owning a timer, the
//! controller asks a [`FrameScheduler`] for a callback and receives a
//! [`FrameHandle`]; the host later delivers that handle back through
//! `PanController::on_frame`. Handles that are no longer pending are ignored,
//! so a late callback from a cancelled request is harmless.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Opaque token identifying one frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Wraps a host-provided raw identifier (for example a
    /// `requestAnimationFrame` id or a vsync counter).
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Something that can call back on the next display frame.
pub trait FrameScheduler {
    /// Requests a single callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a pending request.
    ///
    /// Cancelling a handle that already fired or was already cancelled must
    /// be a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }
}

/// A frame queue driven by hand.
///
/// Useful for tests and for hosts that pump frames from their own loop:
///
/// ```
/// use kurbo::Point;
/// use sphere_grid_pan::{ManualFrames, PanConfig, PanController};
///
/// let mut frames = ManualFrames::new();
/// let mut pan = PanController::new(PanConfig::default()).unwrap();
/// pan.pointer_down(Point::new(0.0, 0.0), &mut frames);
/// pan.pointer_move(Point::new(40.0, 0.0));
/// pan.pointer_up(&mut frames);
///
/// while let Some(handle) = frames.next_due() {
///     pan.on_frame(handle, &mut frames);
/// }
/// assert!(!pan.is_coasting());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    next: u64,
    pending: VecDeque<FrameHandle>,
}

impl ManualFrames {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles requested and not yet delivered or cancelled, oldest first.
    #[must_use]
    pub fn pending(&self) -> &VecDeque<FrameHandle> {
        &self.pending
    }

    /// Returns `true` if any request is outstanding.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Removes and returns the oldest outstanding request.
    pub fn next_due(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    /// Removes and returns every outstanding request.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        self.pending.drain(..).collect()
    }

    /// Total number of requests made so far.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.next
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next);
        self.next += 1;
        self.pending.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameHandle, FrameScheduler, ManualFrames};

    #[test]
    fn handles_are_unique_and_ordered() {
        let mut frames = ManualFrames::new();
        let a = frames.request_frame();
        let b = frames.request_frame();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(frames.pending(), &[a, b]);
        assert_eq!(frames.requested(), 2);
    }

    #[test]
    fn next_due_is_fifo() {
        let mut frames = ManualFrames::new();
        let a = frames.request_frame();
        let b = frames.request_frame();
        assert_eq!(frames.next_due(), Some(a));
        assert_eq!(frames.next_due(), Some(b));
        assert_eq!(frames.next_due(), None);
    }

    #[test]
    fn cancel_keeps_order_of_the_rest() {
        let mut frames = ManualFrames::new();
        let a = frames.request_frame();
        let b = frames.request_frame();
        let c = frames.request_frame();
        frames.cancel_frame(b);
        assert_eq!(frames.pending(), &[a, c]);
        assert_eq!(frames.next_due(), Some(a));
        let d = frames.request_frame();
        assert_eq!(frames.next_due(), Some(c));
        assert_eq!(frames.next_due(), Some(d));
        assert!(!frames.has_pending());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut frames = ManualFrames::new();
        let a = frames.request_frame();
        frames.cancel_frame(a);
        frames.cancel_frame(a);
        frames.cancel_frame(FrameHandle::from_raw(99));
        assert!(!frames.has_pending());
    }

    #[test]
    fn take_due_drains() {
        let mut frames = ManualFrames::new();
        frames.request_frame();
        frames.request_frame();
        assert_eq!(frames.take_due().len(), 2);
        assert!(!frames.has_pending());
    }

    #[test]
    fn mut_ref_forwards() {
        fn request(mut s: impl FrameScheduler) -> FrameHandle {
            s.request_frame()
        }
        let mut frames = ManualFrames::new();
        let h = request(&mut frames);
        assert_eq!(frames.pending(), &[h]);
        assert_eq!(h.to_raw(), 0);
    }
}
