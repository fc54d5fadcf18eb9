// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wraparound lattice generation.
//!
//! A [`Lattice`] expands a short, ordered item collection into an
//! `extended_span × extended_span` field of [`Tile`]s. Cell `(x, y)` shows
//! the item at `(x + y * span) mod len`, so even a handful of items covers
//! the whole field, repeating as needed.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;

/// An item record supplied by the host.
///
/// The lattice only needs a stable identifier to derive tile keys; it never
/// inspects or mutates anything else about the item.
pub trait GridItem {
    /// Identifier type. Rendered with `Display` into tile keys.
    type Id: fmt::Display + ?Sized;

    /// Returns the item's stable identifier.
    fn id(&self) -> &Self::Id;
}

/// Integer cell position in the lattice (`x` is the column, `y` the row).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeCoord {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl LatticeCoord {
    /// Creates a coordinate from a column and a row.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Top-left corner of this cell in lattice pixels.
    #[must_use]
    pub fn origin(self, cell_size: f64) -> Point {
        Point::new(f64::from(self.x) * cell_size, f64::from(self.y) * cell_size)
    }
}

/// Stable identity of a tile within one lattice generation.
///
/// Formatted as `"{item id}-{x}-{y}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey(String);

impl TileKey {
    /// Derives the key for `id` placed at `coord`.
    #[must_use]
    pub fn new<Id: fmt::Display + ?Sized>(id: &Id, coord: LatticeCoord) -> Self {
        Self(format!("{id}-{}-{}", coord.x, coord.y))
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TileKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One lattice cell bound to an item of the source collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    source_index: usize,
    coord: LatticeCoord,
    key: TileKey,
}

impl Tile {
    /// Index of the bound item in the source collection.
    #[must_use]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Cell position of this tile.
    #[must_use]
    pub fn coord(&self) -> LatticeCoord {
        self.coord
    }

    /// Reconciliation key of this tile.
    #[must_use]
    pub fn key(&self) -> &TileKey {
        &self.key
    }
}

/// Maps a cell to an index into a collection of `len` items.
///
/// Returns `None` when the collection is empty.
#[must_use]
pub fn source_index(coord: LatticeCoord, span: u32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let linear = coord.x as usize + coord.y as usize * span as usize;
    Some(linear % len)
}

/// The generated tile field.
///
/// Tiles are stored row-major (`y` outer, `x` inner). A lattice is never
/// edited in place; rebuild it with [`Lattice::build`] when the item
/// collection or span changes.
#[derive(Clone, Debug, Default)]
pub struct Lattice {
    span: u32,
    source_len: usize,
    tiles: Vec<Tile>,
    by_key: HashMap<TileKey, usize>,
}

impl Lattice {
    /// Builds a `span × span` lattice over `items`.
    ///
    /// An empty `items` slice yields an empty lattice.
    ///
    /// Tile keys are unique as long as item identifiers are unique. When two
    /// items share an id, lookups by key resolve to the later tile.
    #[must_use]
    pub fn build<I: GridItem>(items: &[I], span: u32) -> Self {
        if items.is_empty() {
            return Self {
                span,
                ..Self::default()
            };
        }
        let count = span as usize * span as usize;
        let mut tiles = Vec::with_capacity(count);
        let mut by_key = HashMap::with_capacity(count);
        for y in 0..span {
            for x in 0..span {
                let coord = LatticeCoord::new(x, y);
                let linear = x as usize + y as usize * span as usize;
                let source_index = linear % items.len();
                let key = TileKey::new(items[source_index].id(), coord);
                by_key.insert(key.clone(), tiles.len());
                tiles.push(Tile {
                    source_index,
                    coord,
                    key,
                });
            }
        }
        Self {
            span,
            source_len: items.len(),
            tiles,
            by_key,
        }
    }

    /// Number of cells per axis this lattice was built for.
    #[must_use]
    pub fn span(&self) -> u32 {
        self.span
    }

    /// Length of the item collection this lattice was built from.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the lattice holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile at `coord`, if it lies inside the lattice.
    #[must_use]
    pub fn tile_at(&self, coord: LatticeCoord) -> Option<&Tile> {
        if coord.x >= self.span || coord.y >= self.span {
            return None;
        }
        self.tiles
            .get(coord.x as usize + coord.y as usize * self.span as usize)
    }

    /// Looks a tile up by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tile> {
        self.by_key.get(key).map(|&index| &self.tiles[index])
    }

    /// Resolves a tile back to its item.
    ///
    /// `items` must be the collection the lattice was built from.
    #[must_use]
    pub fn item<'a, I>(&self, tile: &Tile, items: &'a [I]) -> Option<&'a I> {
        items.get(tile.source_index)
    }
}
