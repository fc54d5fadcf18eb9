// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::viewport::Viewport;

/// Tuning constants for the lattice, projection and culling.
///
/// All lengths are in lattice pixels. The defaults describe a 6×6 visible grid
/// of 200px cells inside a 20×20 lattice, with tiles shrinking to 30% and
/// tilting up to 15° at the corners of the visible grid.
///
/// A config is inert until it is checked with [`ViewportConfig::validate`],
/// which produces the [`Viewport`] used by every geometry operation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Edge length of one lattice cell.
    pub cell_size: f64,
    /// Number of cells per axis that make up the undistorted view.
    pub visible_grid_size: u32,
    /// Number of cells per axis in the generated lattice.
    ///
    /// Must be at least [`ViewportConfig::visible_grid_size`].
    pub extended_span: u32,
    /// Scale reached by tiles at (or beyond) the corner of the visible grid.
    pub scale_factor: f64,
    /// Maximum tilt in degrees before [`ViewportConfig::perspective_strength`]
    /// is applied.
    pub rotation_max: f64,
    /// Multiplier on tilt and depth; `0.0` flattens the field.
    pub perspective_strength: f64,
    /// How far (in pixels, before the strength multiplier) corner tiles recede.
    pub depth: f64,
    /// Lower bound on tile opacity.
    pub min_opacity: f64,
    /// Opacity lost between the optical center and the corner distance.
    pub opacity_falloff: f64,
    /// Culling margin around the visible grid, in cells.
    pub cull_padding_cells: f64,
    /// Gap between neighbouring drawn tiles; the drawn tile edge is
    /// `cell_size - tile_inset`.
    pub tile_inset: f64,
    /// Perspective distance a 3D-capable host should apply to the tile field.
    pub perspective: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            cell_size: 200.0,
            visible_grid_size: 6,
            extended_span: 20,
            scale_factor: 0.3,
            rotation_max: 15.0,
            perspective_strength: 0.8,
            depth: 100.0,
            min_opacity: 0.3,
            opacity_falloff: 0.4,
            cull_padding_cells: 2.0,
            tile_inset: 12.0,
            perspective: 1000.0,
        }
    }
}

impl ViewportConfig {
    /// Checks every constant and returns the validated [`Viewport`].
    ///
    /// Because the normalized distance is clamped to `[0, 1]` and
    /// `scale_factor` must lie in `(0, 1]`, every projected scale stays within
    /// `[scale_factor, 1]`; no separate scale floor exists.
    pub fn validate(self) -> Result<Viewport, ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.visible_grid_size == 0 {
            return Err(ConfigError::EmptyVisibleGrid);
        }
        if self.extended_span < self.visible_grid_size {
            return Err(ConfigError::SpanTooSmall {
                extended_span: self.extended_span,
                visible_grid_size: self.visible_grid_size,
            });
        }
        if !(self.scale_factor > 0.0 && self.scale_factor <= 1.0) {
            return Err(ConfigError::ScaleFactor(self.scale_factor));
        }
        if !self.rotation_max.is_finite() {
            return Err(ConfigError::RotationMax(self.rotation_max));
        }
        if !(self.perspective_strength.is_finite() && self.perspective_strength >= 0.0) {
            return Err(ConfigError::PerspectiveStrength(self.perspective_strength));
        }
        if !(self.depth.is_finite() && self.depth >= 0.0) {
            return Err(ConfigError::Depth(self.depth));
        }
        if !(0.0..=1.0).contains(&self.min_opacity) {
            return Err(ConfigError::MinOpacity(self.min_opacity));
        }
        if !(0.0..=1.0).contains(&self.opacity_falloff) {
            return Err(ConfigError::OpacityFalloff(self.opacity_falloff));
        }
        if !(self.cull_padding_cells.is_finite() && self.cull_padding_cells >= 0.0) {
            return Err(ConfigError::CullPadding(self.cull_padding_cells));
        }
        if !(self.tile_inset >= 0.0 && self.tile_inset < self.cell_size) {
            return Err(ConfigError::TileInset(self.tile_inset));
        }
        if !(self.perspective.is_finite() && self.perspective > 0.0) {
            return Err(ConfigError::Perspective(self.perspective));
        }
        Ok(Viewport::from_validated(self))
    }
}

/// Error returned by [`ViewportConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `cell_size` was zero, negative or not finite.
    CellSize(f64),
    /// `visible_grid_size` was zero, so the corner distance would be zero.
    EmptyVisibleGrid,
    /// The lattice is smaller than the visible grid.
    SpanTooSmall {
        /// Configured lattice span.
        extended_span: u32,
        /// Configured visible grid size.
        visible_grid_size: u32,
    },
    /// `scale_factor` was outside `(0, 1]`.
    ScaleFactor(f64),
    /// `rotation_max` was not finite.
    RotationMax(f64),
    /// `perspective_strength` was negative or not finite.
    PerspectiveStrength(f64),
    /// `depth` was negative or not finite.
    Depth(f64),
    /// `min_opacity` was outside `[0, 1]`.
    MinOpacity(f64),
    /// `opacity_falloff` was outside `[0, 1]`.
    OpacityFalloff(f64),
    /// `cull_padding_cells` was negative or not finite.
    CullPadding(f64),
    /// `tile_inset` was negative or not smaller than `cell_size`.
    TileInset(f64),
    /// `perspective` was zero, negative or not finite.
    Perspective(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellSize(v) => write!(f, "cell size must be positive and finite, got {v}"),
            Self::EmptyVisibleGrid => f.write_str("visible grid size must be at least 1"),
            Self::SpanTooSmall {
                extended_span,
                visible_grid_size,
            } => write!(
                f,
                "extended span {extended_span} is smaller than the visible grid size {visible_grid_size}"
            ),
            Self::ScaleFactor(v) => write!(f, "scale factor must lie in (0, 1], got {v}"),
            Self::RotationMax(v) => write!(f, "maximum rotation must be finite, got {v}"),
            Self::PerspectiveStrength(v) => {
                write!(f, "perspective strength must be non-negative, got {v}")
            }
            Self::Depth(v) => write!(f, "depth must be non-negative, got {v}"),
            Self::MinOpacity(v) => write!(f, "minimum opacity must lie in [0, 1], got {v}"),
            Self::OpacityFalloff(v) => write!(f, "opacity falloff must lie in [0, 1], got {v}"),
            Self::CullPadding(v) => write!(f, "cull padding must be non-negative, got {v}"),
            Self::TileInset(v) => write!(
                f,
                "tile inset must be non-negative and smaller than the cell size, got {v}"
            ),
            Self::Perspective(v) => write!(f, "perspective must be positive, got {v}"),
        }
    }
}

impl core::error::Error for ConfigError {}
