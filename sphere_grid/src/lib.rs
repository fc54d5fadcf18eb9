// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sphere Grid: headless geometry for a pannable, perspective tile field.
//!
//! This crate provides the pure parts of a "spherical" grid viewer, where a
//! small item collection is repeated over a large lattice and every tile is
//! tilted, shrunk and faded according to its distance from the middle of the
//! view. It focuses on:
//! - Expanding an item collection into a wraparound [`Lattice`].
//! - Validating tuning constants into a [`Viewport`].
//! - Projecting a lattice cell into an [`ItemTransform`].
//! - Culling tiles against the padded visible region.
//!
//! It does **not** own scroll state, input handling or a rendering backend.
//! Callers are expected to:
//! - Keep the scroll offset themselves (for example with `sphere_grid_pan`).
//! - Map each [`ItemTransform`] onto their compositor, via
//!   [`ItemTransform::css`], [`ItemTransform::to_affine`] or directly.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use sphere_grid::{GridItem, Lattice, ViewportConfig, cull};
//!
//! struct Link {
//!     id: u32,
//! }
//!
//! impl GridItem for Link {
//!     type Id = u32;
//!
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//! }
//!
//! let viewport = ViewportConfig::default().validate().unwrap();
//! let links: Vec<Link> = (0..8).map(|id| Link { id }).collect();
//! let lattice = Lattice::build(&links, viewport.extended_span());
//! assert_eq!(lattice.len(), 400);
//!
//! let scroll = Vec2::new(150.0, 40.0);
//! for tile in cull(lattice.tiles(), scroll, &viewport) {
//!     let transform = viewport.project(tile.coord(), scroll);
//!     assert!(transform.scale <= 1.0);
//! }
//! ```
//!
//! ## Coordinate spaces
//!
//! Everything here lives in *lattice pixels*: cell `(x, y)` occupies
//! `[x * cell_size, (x + 1) * cell_size)` horizontally and likewise
//! vertically. The scroll offset is the lattice-pixel position of the top-left
//! corner of the view, so a host draws the field translated by `-scroll`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod cull;
mod lattice;
mod projection;
mod viewport;

pub use config::{ConfigError, ViewportConfig};
pub use cull::{cull, is_visible};
pub use lattice::{GridItem, Lattice, LatticeCoord, Tile, TileKey, source_index};
pub use projection::{CssTransform, ItemTransform, project};
pub use viewport::Viewport;
