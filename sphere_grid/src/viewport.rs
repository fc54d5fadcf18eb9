// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};

use crate::config::ViewportConfig;
use crate::lattice::LatticeCoord;
use crate::projection::{self, ItemTransform};

/// Validated viewport geometry over the lattice-pixel plane.
///
/// `Viewport` is produced by [`ViewportConfig::validate`] and caches the
/// quantities every frame needs: the visible extent, the corner distance used
/// to normalize tile distances, and the culling margin. It holds no scroll
/// state; every query takes the current scroll offset explicitly so the
/// results stay a pure function of their inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    config: ViewportConfig,
    visible_extent: f64,
    max_distance: f64,
    padding: f64,
}

impl Viewport {
    pub(crate) fn from_validated(config: ViewportConfig) -> Self {
        let visible_extent = f64::from(config.visible_grid_size) * config.cell_size;
        let half = visible_extent / 2.0;
        Self {
            config,
            visible_extent,
            max_distance: Vec2::new(half, half).hypot(),
            padding: config.cull_padding_cells * config.cell_size,
        }
    }

    /// Returns the configuration this viewport was validated from.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Edge length of one lattice cell.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.config.cell_size
    }

    /// Edge length of the drawn tile (`cell_size - tile_inset`).
    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.config.cell_size - self.config.tile_inset
    }

    /// Number of cells per axis in the generated lattice.
    #[must_use]
    pub fn extended_span(&self) -> u32 {
        self.config.extended_span
    }

    /// Edge length of the visible grid (`visible_grid_size * cell_size`).
    #[must_use]
    pub fn visible_extent(&self) -> f64 {
        self.visible_extent
    }

    /// Edge length of the whole lattice in lattice pixels.
    #[must_use]
    pub fn lattice_extent(&self) -> f64 {
        f64::from(self.config.extended_span) * self.config.cell_size
    }

    /// Distance from the optical center to a corner of the visible grid.
    ///
    /// Always strictly positive for a validated viewport.
    #[must_use]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Culling margin in lattice pixels.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the optical center for the given scroll offset.
    ///
    /// The center sits in the middle of the visible grid and moves with the
    /// scroll offset.
    #[must_use]
    pub fn optical_center(&self, scroll: Vec2) -> Point {
        let half = self.visible_extent / 2.0;
        Point::new(half + scroll.x, half + scroll.y)
    }

    /// Returns the visible grid rectangle for the given scroll offset.
    #[must_use]
    pub fn visible_rect(&self, scroll: Vec2) -> Rect {
        Rect::from_origin_size(
            scroll.to_point(),
            (self.visible_extent, self.visible_extent),
        )
    }

    /// Returns the visible rectangle grown by the culling margin.
    #[must_use]
    pub fn culling_rect(&self, scroll: Vec2) -> Rect {
        self.visible_rect(scroll).inflate(self.padding, self.padding)
    }

    /// Returns the lattice-pixel bounding box of a cell.
    #[must_use]
    pub fn tile_rect(&self, coord: LatticeCoord) -> Rect {
        let cell = self.config.cell_size;
        Rect::from_origin_size(coord.origin(cell), (cell, cell))
    }

    /// Returns the lattice-pixel center of a cell.
    #[must_use]
    pub fn tile_center(&self, coord: LatticeCoord) -> Point {
        let cell = self.config.cell_size;
        coord.origin(cell) + Vec2::new(cell / 2.0, cell / 2.0)
    }

    /// Distance of a cell from the optical center over [`Viewport::max_distance`],
    /// clamped to `[0, 1]`.
    #[must_use]
    pub fn normalized_distance(&self, coord: LatticeCoord, scroll: Vec2) -> f64 {
        let delta = self.tile_center(coord) - self.optical_center(scroll);
        (delta.hypot() / self.max_distance).clamp(0.0, 1.0)
    }

    /// Projects one cell for the given scroll offset.
    ///
    /// See [`crate::project`].
    #[must_use]
    pub fn project(&self, coord: LatticeCoord, scroll: Vec2) -> ItemTransform {
        projection::project(coord, scroll, self)
    }

    /// Scroll offset expressed in cells, rounded to one decimal.
    ///
    /// This is the position readout a host typically shows in a debug overlay.
    #[must_use]
    pub fn grid_position(&self, scroll: Vec2) -> Vec2 {
        let cell = self.config.cell_size;
        Vec2::new(
            (scroll.x / cell * 10.0).round() / 10.0,
            (scroll.y / cell * 10.0).round() / 10.0,
        )
    }
}
