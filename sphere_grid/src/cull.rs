// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::lattice::{LatticeCoord, Tile};
use crate::viewport::Viewport;

/// Returns `true` if the cell at `coord` overlaps the padded visible region.
///
/// The padded region `[scroll - padding, scroll + visible_extent + padding]`
/// is treated as open on both axes: a cell must overlap it by a positive
/// width, and a cell whose edge lies exactly on the boundary is culled. Such
/// a cell contributes no visible pixels, and excluding it keeps a
/// cell-aligned scroll at `visible + 2 * padding_cells` cells per axis rather
/// than one more.
#[must_use]
pub fn is_visible(coord: LatticeCoord, scroll: Vec2, viewport: &Viewport) -> bool {
    let region = viewport.culling_rect(scroll);
    let cell = viewport.tile_rect(coord);
    cell.x0 < region.x1 && cell.x1 > region.x0 && cell.y0 < region.y1 && cell.y1 > region.y0
}

/// Selects the tiles that overlap the padded visible region.
///
/// Lattice order is preserved. The result depends only on the arguments, so
/// repeated calls with the same inputs return the same subset.
#[must_use]
pub fn cull<'a>(tiles: &'a [Tile], scroll: Vec2, viewport: &Viewport) -> Vec<&'a Tile> {
    tiles
        .iter()
        .filter(|tile| is_visible(tile.coord(), scroll, viewport))
        .collect()
}
