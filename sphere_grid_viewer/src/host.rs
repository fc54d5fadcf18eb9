// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use sphere_grid::{GridItem, ItemTransform, LatticeCoord, TileKey};

/// Per-tile facts handed to [`ItemHost::render`] alongside the transform.
#[derive(Clone, Copy, Debug)]
pub struct TileContext<'a> {
    /// Key of the tile being drawn; stable for one lattice generation.
    pub key: &'a TileKey,
    /// Lattice cell of the tile.
    pub coord: LatticeCoord,
    /// Host-supplied priority scalar, passed through untouched.
    pub global_priority: f64,
    /// Drawn tile edge length (cell size minus inset).
    pub tile_size: f64,
    /// Current scroll offset; the field is drawn translated by its negation.
    pub scroll_offset: Vec2,
    /// Perspective distance for the 3D container, in pixels.
    pub perspective: f64,
}

/// The host that draws items and handles their edit and delete intents.
///
/// Only `render` is required. Edit and delete default to doing nothing, for
/// read-only fields.
pub trait ItemHost<I: GridItem> {
    /// Draws one tile.
    ///
    /// Called back-to-front: a tile is never drawn before one with a lower
    /// `z_index`.
    fn render(&mut self, item: &I, transform: &ItemTransform, cx: &TileContext<'_>);

    /// The user asked to edit `item`.
    fn edit(&mut self, item: &I) {
        let _ = item;
    }

    /// The user asked to delete the item with `id`.
    fn delete(&mut self, id: &I::Id) {
        let _ = id;
    }
}
