// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use sphere_grid::{
    GridItem, ItemTransform, Lattice, Tile, Viewport, ViewportConfig, is_visible,
};
use sphere_grid_pan::{FrameHandle, FrameScheduler, PanConfig, PanController, PanState};

use crate::error::ViewerConfigError;
use crate::host::{ItemHost, TileContext};

/// A pannable perspective field of repeated items.
///
/// `GridViewer` owns the item collection, the lattice built from it, the
/// validated [`Viewport`], a [`PanController`] and the frame scheduler that
/// drives coasting. Every input method updates the scroll offset and then
/// refreshes the visible set, so [`GridViewer::render`] only has to project
/// and sort.
///
/// Dropping the viewer withdraws any pending coasting frame.
#[derive(Debug)]
pub struct GridViewer<I, S: FrameScheduler> {
    items: Vec<I>,
    lattice: Lattice,
    viewport: Viewport,
    pan: PanController,
    frames: S,
    global_priority: f64,
    /// Indices into `lattice.tiles()`, in lattice order.
    visible: Vec<usize>,
    /// Offset the visible set was computed for; `None` when stale.
    visible_at: Option<Vec2>,
}

impl<I: GridItem, S: FrameScheduler> GridViewer<I, S> {
    /// Creates a viewer over `items` with already validated parts.
    pub fn new(items: Vec<I>, viewport: Viewport, pan: PanController, frames: S) -> Self {
        let lattice = build_lattice(&items, viewport.extended_span());
        let mut viewer = Self {
            items,
            lattice,
            viewport,
            pan,
            frames,
            global_priority: 0.0,
            visible: Vec::new(),
            visible_at: None,
        };
        viewer.refresh_visible();
        viewer
    }

    /// Validates both configurations and creates a viewer.
    pub fn from_configs(
        items: Vec<I>,
        viewport: ViewportConfig,
        pan: PanConfig,
        frames: S,
    ) -> Result<Self, ViewerConfigError> {
        let viewport = viewport.validate()?;
        let pan = PanController::new(pan)?;
        Ok(Self::new(items, viewport, pan, frames))
    }

    /// Returns the item collection.
    #[must_use]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Replaces the item collection and rebuilds the lattice.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.lattice = build_lattice(&self.items, self.viewport.extended_span());
        self.visible_at = None;
        self.refresh_visible();
    }

    /// Returns the current lattice.
    #[must_use]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Returns the viewport geometry.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replaces the viewport geometry.
    ///
    /// The lattice is rebuilt only if the span changed.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let rebuild = viewport.extended_span() != self.viewport.extended_span();
        self.viewport = viewport;
        if rebuild {
            self.lattice = build_lattice(&self.items, viewport.extended_span());
        }
        self.visible_at = None;
        self.refresh_visible();
    }

    /// Returns the pan controller.
    #[must_use]
    pub fn pan(&self) -> &PanController {
        &self.pan
    }

    /// Returns the frame scheduler.
    #[must_use]
    pub fn frames(&self) -> &S {
        &self.frames
    }

    /// Returns the frame scheduler mutably, for hosts that pump frames.
    pub fn frames_mut(&mut self) -> &mut S {
        &mut self.frames
    }

    /// Returns the priority scalar passed to every [`TileContext`].
    #[must_use]
    pub fn global_priority(&self) -> f64 {
        self.global_priority
    }

    /// Sets the priority scalar passed to every [`TileContext`].
    pub fn set_global_priority(&mut self, priority: f64) {
        self.global_priority = priority;
    }

    /// Returns the scroll offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.pan.offset()
    }

    /// Jumps to `offset` without affecting an ongoing drag or coast.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.pan.set_offset(offset);
        self.refresh_visible();
    }

    /// Returns the pan state.
    #[must_use]
    pub fn state(&self) -> PanState {
        self.pan.state()
    }

    /// See [`PanController::pointer_down`].
    pub fn pointer_down(&mut self, pos: Point) {
        self.pan.pointer_down(pos, &mut self.frames);
    }

    /// See [`PanController::pointer_move`].
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        let moved = self.pan.pointer_move(pos);
        self.refresh_visible();
        moved
    }

    /// See [`PanController::pointer_up`].
    pub fn pointer_up(&mut self) -> bool {
        self.pan.pointer_up(&mut self.frames)
    }

    /// See [`PanController::pointer_leave`].
    pub fn pointer_leave(&mut self) -> bool {
        self.pan.pointer_leave(&mut self.frames)
    }

    /// See [`PanController::pointer_cancel`].
    pub fn pointer_cancel(&mut self) -> bool {
        self.pan.pointer_cancel(&mut self.frames)
    }

    /// See [`PanController::wheel`].
    pub fn wheel(&mut self, delta: Vec2) -> bool {
        let moved = self.pan.wheel(delta);
        self.refresh_visible();
        moved
    }

    /// Delivers a frame callback. See [`PanController::on_frame`].
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        let moved = self.pan.on_frame(handle, &mut self.frames);
        self.refresh_visible();
        moved
    }

    /// See [`PanController::cancel_coasting`].
    pub fn cancel_coasting(&mut self) {
        self.pan.cancel_coasting(&mut self.frames);
    }

    /// Feeds a `ui-events` pointer event through the pan controller.
    ///
    /// Page-based scroll deltas move by one visible extent per page.
    #[cfg(feature = "ui_events_adapter")]
    pub fn handle_pointer_event(&mut self, event: &ui_events::pointer::PointerEvent) -> bool {
        let extent = self.viewport.visible_extent();
        let handled =
            self.pan
                .handle_pointer_event(event, Vec2::new(extent, extent), &mut self.frames);
        self.refresh_visible();
        handled
    }

    /// Tiles overlapping the padded visible region, in lattice order.
    pub fn visible_tiles(&self) -> impl Iterator<Item = &Tile> {
        let tiles = self.lattice.tiles();
        self.visible.iter().filter_map(move |&i| tiles.get(i))
    }

    /// Number of tiles in the visible set.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Projects every visible tile, ordered back-to-front.
    ///
    /// The sort is stable on `z_index`, so tiles at equal depth keep lattice
    /// order.
    #[must_use]
    pub fn draw_list(&self) -> Vec<(&Tile, ItemTransform)> {
        let scroll = self.pan.offset();
        let mut list: Vec<_> = self
            .visible_tiles()
            .map(|tile| (tile, self.viewport.project(tile.coord(), scroll)))
            .collect();
        list.sort_by_key(|(_, transform)| transform.z_index);
        list
    }

    /// Draws the visible tiles through `host`, back-to-front.
    ///
    /// Returns the number of tiles drawn. An empty collection draws nothing.
    pub fn render<H: ItemHost<I> + ?Sized>(&self, host: &mut H) -> usize {
        let config = self.viewport.config();
        let scroll = self.pan.offset();
        let mut drawn = 0;
        for (tile, transform) in self.draw_list() {
            let Some(item) = self.lattice.item(tile, &self.items) else {
                continue;
            };
            let cx = TileContext {
                key: tile.key(),
                coord: tile.coord(),
                global_priority: self.global_priority,
                tile_size: self.viewport.tile_size(),
                scroll_offset: scroll,
                perspective: config.perspective,
            };
            host.render(item, &transform, &cx);
            drawn += 1;
        }
        drawn
    }

    /// Forwards an edit intent for the item behind the tile `key`.
    ///
    /// Returns `false` if no tile has that key.
    pub fn edit<H: ItemHost<I> + ?Sized>(&self, key: &str, host: &mut H) -> bool {
        match self.resolve(key) {
            Some(item) => {
                host.edit(item);
                true
            }
            None => false,
        }
    }

    /// Forwards a delete intent for the item behind the tile `key`.
    ///
    /// The collection is not changed; the host is expected to call
    /// [`GridViewer::set_items`] once the deletion is done.
    pub fn delete<H: ItemHost<I> + ?Sized>(&self, key: &str, host: &mut H) -> bool {
        match self.resolve(key) {
            Some(item) => {
                host.delete(item.id());
                true
            }
            None => false,
        }
    }

    /// Returns a snapshot of the viewer's state for diagnostics.
    #[must_use]
    pub fn debug_info(&self) -> GridViewerDebugInfo {
        let scroll = self.pan.offset();
        GridViewerDebugInfo {
            state: self.pan.state(),
            offset: scroll,
            velocity: self.pan.velocity(),
            optical_center: self.viewport.optical_center(scroll),
            grid_position: self.viewport.grid_position(scroll),
            item_count: self.items.len(),
            tile_count: self.lattice.len(),
            visible_count: self.visible.len(),
            pending_frame: self.pan.pending_frame(),
        }
    }

    fn resolve(&self, key: &str) -> Option<&I> {
        let tile = self.lattice.get(key)?;
        self.lattice.item(tile, &self.items)
    }

    fn refresh_visible(&mut self) {
        let scroll = self.pan.offset();
        if self.visible_at == Some(scroll) {
            return;
        }
        self.visible.clear();
        self.visible.extend(
            self.lattice
                .tiles()
                .iter()
                .enumerate()
                .filter(|(_, tile)| is_visible(tile.coord(), scroll, &self.viewport))
                .map(|(i, _)| i),
        );
        self.visible_at = Some(scroll);
    }
}

impl<I, S: FrameScheduler> Drop for GridViewer<I, S> {
    fn drop(&mut self) {
        self.pan.release_frames(&mut self.frames);
    }
}

fn build_lattice<I: GridItem>(items: &[I], span: u32) -> Lattice {
    let lattice = Lattice::build(items, span);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        items = items.len(),
        span,
        tiles = lattice.len(),
        "lattice rebuilt"
    );
    lattice
}

/// Snapshot returned by [`GridViewer::debug_info`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridViewerDebugInfo {
    /// Pan state.
    pub state: PanState,
    /// Scroll offset in lattice pixels.
    pub offset: Vec2,
    /// Pan velocity in pixels per frame.
    pub velocity: Vec2,
    /// Lattice-pixel point at the middle of the view.
    pub optical_center: Point,
    /// Scroll offset in cells, rounded to one decimal.
    pub grid_position: Vec2,
    /// Number of items.
    pub item_count: usize,
    /// Number of tiles in the lattice.
    pub tile_count: usize,
    /// Number of tiles in the visible set.
    pub visible_count: usize,
    /// Frame the pan controller is waiting on, if any.
    pub pending_frame: Option<FrameHandle>,
}
