// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Pointer anchor for an in-progress drag.
///
/// Tracks where the drag started and where the pointer was last seen, so each
/// move yields the delta since the previous one.
#[derive(Debug, Clone, Default, Copy)]
pub(crate) struct DragAnchor {
    start: Option<Point>,
    last: Option<Point>,
}

impl DragAnchor {
    pub(crate) fn start(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
    }

    /// Advances the anchor to `pos`, returning the movement since the last
    /// position, or `None` if no drag is in progress.
    pub(crate) fn advance(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    pub(crate) fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start.map(|start| pos - start)
    }

    pub(crate) fn last(&self) -> Option<Point> {
        self.last
    }

    pub(crate) fn end(&mut self) {
        self.start = None;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragAnchor;

    #[test]
    fn advance_without_start_is_ignored() {
        let mut anchor = DragAnchor::default();
        assert_eq!(anchor.advance(Point::new(5.0, 5.0)), None);
        assert_eq!(anchor.last(), None);
        assert_eq!(anchor.total_offset(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut anchor = DragAnchor::default();
        anchor.start(Point::new(0.0, 0.0));
        assert_eq!(anchor.advance(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(anchor.advance(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(anchor.advance(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(
            anchor.total_offset(Point::new(6.0, 7.0)),
            Some(Vec2::new(6.0, 7.0))
        );
    }

    #[test]
    fn restart_moves_the_anchor() {
        let mut anchor = DragAnchor::default();
        anchor.start(Point::new(0.0, 0.0));
        anchor.advance(Point::new(10.0, 10.0));
        anchor.start(Point::new(50.0, 60.0));
        assert_eq!(anchor.last(), Some(Point::new(50.0, 60.0)));
        assert_eq!(anchor.advance(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn end_clears_state() {
        let mut anchor = DragAnchor::default();
        anchor.start(Point::new(1.0, 2.0));
        anchor.end();
        assert_eq!(anchor.last(), None);
        assert_eq!(anchor.total_offset(Point::ORIGIN), None);
    }
}
