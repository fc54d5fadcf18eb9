// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sphere Grid Viewer: a pannable, perspective field of repeated items.
//!
//! [`GridViewer`] ties together the pieces from `sphere_grid` and
//! `sphere_grid_pan`:
//!
//! 1. Input (pointer, wheel or `ui-events` streams) updates the scroll offset
//!    through a [`PanController`](sphere_grid_pan::PanController).
//! 2. The visible set is recomputed by culling the lattice against the
//!    padded view.
//! 3. [`GridViewer::render`] projects each visible tile and hands it to an
//!    [`ItemHost`], back-to-front.
//!
//! The viewer never draws anything itself. Item content, edit dialogs and
//! deletion stay with the host.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use sphere_grid::{GridItem, ItemTransform, ViewportConfig};
//! use sphere_grid_pan::{ManualFrames, PanConfig};
//! use sphere_grid_viewer::{GridViewer, ItemHost, TileContext};
//!
//! struct Link {
//!     id: u32,
//! }
//!
//! impl GridItem for Link {
//!     type Id = u32;
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//! }
//!
//! struct Count(usize);
//!
//! impl ItemHost<Link> for Count {
//!     fn render(&mut self, _: &Link, _: &ItemTransform, _: &TileContext<'_>) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let links = (0..8).map(|id| Link { id }).collect();
//! let mut viewer = GridViewer::from_configs(
//!     links,
//!     ViewportConfig::default(),
//!     PanConfig::default(),
//!     ManualFrames::new(),
//! )
//! .unwrap();
//!
//! viewer.pointer_down(Point::new(100.0, 100.0));
//! viewer.pointer_move(Point::new(150.0, 120.0));
//! viewer.pointer_up();
//! while let Some(frame) = viewer.frames_mut().next_due() {
//!     viewer.on_frame(frame);
//! }
//!
//! let mut host = Count(0);
//! viewer.render(&mut host);
//! assert_eq!(host.0, viewer.visible_len());
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`GridViewer::handle_pointer_event`].
//! - `serde`: serialization for the configuration structs.
//! - `tracing`: debug events for lattice rebuilds and pan state changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod host;
mod viewer;

pub use error::ViewerConfigError;
pub use host::{ItemHost, TileContext};
pub use viewer::{GridViewer, GridViewerDebugInfo};
