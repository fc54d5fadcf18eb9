// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance-driven perspective projection for lattice tiles.
//!
//! Every output channel is driven by a single scalar, the tile's normalized
//! distance `n` from the optical center (see
//! [`Viewport::normalized_distance`]):
//!
//! | channel | value |
//! |---|---|
//! | `scale` | `1 - n * (1 - scale_factor)` |
//! | `rotate_x` | `(dy / max_distance) * rotation_max * perspective_strength` |
//! | `rotate_y` | `-(dx / max_distance) * rotation_max * perspective_strength` |
//! | `translate_z` | `-n * depth * perspective_strength` |
//! | `opacity` | `clamp(1 - n * opacity_falloff, min_opacity, 1)` |
//! | `z_index` | `round((1 - n) * 100)` |
//!
//! `(dx, dy)` is the tile center minus the optical center. Tilt uses the raw
//! offset rather than `n`, so it keeps growing past the corner distance while
//! the other channels saturate.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Vec2};

use crate::lattice::LatticeCoord;
use crate::viewport::Viewport;

/// Render transform for one tile.
///
/// Rotations are in degrees. `translate_x`/`translate_y` are the tile's
/// top-left corner in lattice pixels; hosts offset the whole field by the
/// negated scroll offset (or use [`ItemTransform::to_affine`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    /// Horizontal position of the tile origin in lattice pixels.
    pub translate_x: f64,
    /// Vertical position of the tile origin in lattice pixels.
    pub translate_y: f64,
    /// Depth offset; zero at the optical center, negative as tiles recede.
    pub translate_z: f64,
    /// Tilt around the horizontal axis, in degrees.
    pub rotate_x: f64,
    /// Tilt around the vertical axis, in degrees.
    pub rotate_y: f64,
    /// Uniform scale about the tile center.
    pub scale: f64,
    /// Opacity in `[min_opacity, 1]`.
    pub opacity: f64,
    /// Stacking order; central tiles stack above peripheral ones.
    pub z_index: i32,
}

impl ItemTransform {
    /// Returns a value that formats as a CSS `transform` property.
    ///
    /// ```
    /// use kurbo::Vec2;
    /// use sphere_grid::{LatticeCoord, ViewportConfig};
    ///
    /// let viewport = ViewportConfig::default().validate().unwrap();
    /// let t = viewport.project(LatticeCoord::new(1, 0), Vec2::ZERO);
    /// assert!(t.css().to_string().starts_with("translate3d(200px, 0px, "));
    /// ```
    #[must_use]
    pub fn css(&self) -> CssTransform<'_> {
        CssTransform(self)
    }

    /// Flattens the transform into a 2D affine for hosts without 3D compositing.
    ///
    /// The result maps tile-local coordinates (`0..tile_size` on each axis) to
    /// screen coordinates: it scales about the tile center and then moves the
    /// tile to its on-screen origin (`translate - scroll`). Rotation and depth
    /// channels are dropped.
    #[must_use]
    pub fn to_affine(&self, scroll: Vec2, tile_size: f64) -> Affine {
        let center = Vec2::new(tile_size / 2.0, tile_size / 2.0);
        Affine::translate(Vec2::new(
            self.translate_x - scroll.x,
            self.translate_y - scroll.y,
        )) * Affine::translate(center)
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

/// CSS text form of an [`ItemTransform`], produced by [`ItemTransform::css`].
#[derive(Clone, Copy, Debug)]
pub struct CssTransform<'a>(&'a ItemTransform);

impl fmt::Display for CssTransform<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(
            f,
            "translate3d({}px, {}px, {}px) rotateX({}deg) rotateY({}deg) scale({})",
            t.translate_x, t.translate_y, t.translate_z, t.rotate_x, t.rotate_y, t.scale
        )
    }
}

/// Projects the cell at `coord` for the given scroll offset.
///
/// Pure: the result depends only on the arguments.
#[must_use]
pub fn project(coord: LatticeCoord, scroll: Vec2, viewport: &Viewport) -> ItemTransform {
    let config = viewport.config();
    let origin = coord.origin(config.cell_size);
    let delta = viewport.tile_center(coord) - viewport.optical_center(scroll);
    let max_distance = viewport.max_distance();
    let n = viewport.normalized_distance(coord, scroll);

    ItemTransform {
        translate_x: origin.x,
        translate_y: origin.y,
        // Subtracting from 0.0 keeps the center tile free of negative zeros.
        translate_z: 0.0 - n * config.depth * config.perspective_strength,
        rotate_x: (delta.y / max_distance) * config.rotation_max * config.perspective_strength,
        rotate_y: 0.0 - (delta.x / max_distance) * config.rotation_max * config.perspective_strength,
        scale: 1.0 - n * (1.0 - config.scale_factor),
        opacity: (1.0 - n * config.opacity_falloff).clamp(config.min_opacity, 1.0),
        z_index: z_index(n),
    }
}

fn z_index(normalized_distance: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "normalized distance is clamped to [0, 1], so the value lies in [0, 100]"
    )]
    {
        ((1.0 - normalized_distance) * 100.0).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Point, Vec2};

    use crate::{LatticeCoord, ViewportConfig};

    #[test]
    fn tile_at_optical_center_is_undistorted() {
        let vp = ViewportConfig::default().validate().unwrap();
        // Cell (3, 3) has its center at (700, 700); the optical center is at
        // (600, 600) + scroll.
        let t = vp.project(LatticeCoord::new(3, 3), Vec2::new(100.0, 100.0));
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.translate_z, 0.0);
        assert_eq!(t.z_index, 100);
        assert_eq!((t.translate_x, t.translate_y), (600.0, 600.0));
    }

    #[test]
    fn corner_tiles_hit_configured_limits() {
        let vp = ViewportConfig::default().validate().unwrap();
        // Far outside the visible grid: n saturates at 1.
        let t = vp.project(LatticeCoord::new(15, 15), Vec2::ZERO);
        assert!((t.scale - 0.3).abs() < 1e-12);
        assert!((t.translate_z + 80.0).abs() < 1e-12);
        assert!((t.opacity - 0.6).abs() < 1e-12);
        assert_eq!(t.z_index, 0);
    }

    #[test]
    fn tilt_faces_the_center() {
        let vp = ViewportConfig::default().validate().unwrap();
        // Right of center: negative rotate_y. Below center: positive rotate_x.
        let right = vp.project(LatticeCoord::new(5, 2), Vec2::new(0.0, -100.0));
        assert!(right.rotate_y < 0.0);
        assert_eq!(right.rotate_x, 0.0);
        let below = vp.project(LatticeCoord::new(2, 5), Vec2::new(-100.0, 0.0));
        assert!(below.rotate_x > 0.0);
        assert_eq!(below.rotate_y, 0.0);
    }

    #[test]
    fn tilt_matches_formula() {
        let vp = ViewportConfig::default().validate().unwrap();
        let t = vp.project(LatticeCoord::new(0, 0), Vec2::ZERO);
        // delta = (100, 100) - (600, 600) = (-500, -500)
        let expected = (-500.0 / vp.max_distance()) * 15.0 * 0.8;
        assert!((t.rotate_x - expected).abs() < 1e-12);
        assert!((t.rotate_y + expected).abs() < 1e-12);
    }

    #[test]
    fn min_opacity_floor_applies() {
        let config = ViewportConfig {
            opacity_falloff: 1.0,
            ..ViewportConfig::default()
        };
        let vp = config.validate().unwrap();
        let t = vp.project(LatticeCoord::new(19, 0), Vec2::ZERO);
        assert_eq!(t.opacity, 0.3);
    }

    #[test]
    fn zero_strength_flattens_the_field() {
        let config = ViewportConfig {
            perspective_strength: 0.0,
            ..ViewportConfig::default()
        };
        let vp = config.validate().unwrap();
        let t = vp.project(LatticeCoord::new(0, 5), Vec2::ZERO);
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.translate_z, 0.0);
        assert!(t.scale < 1.0);
    }

    #[test]
    fn css_text_lists_every_channel() {
        let vp = ViewportConfig::default().validate().unwrap();
        let t = vp.project(LatticeCoord::new(3, 3), Vec2::new(100.0, 100.0));
        assert_eq!(
            t.css().to_string(),
            "translate3d(600px, 600px, 0px) rotateX(0deg) rotateY(0deg) scale(1)"
        );
    }

    #[test]
    fn affine_scales_about_tile_center() {
        let vp = ViewportConfig::default().validate().unwrap();
        let scroll = Vec2::new(50.0, 20.0);
        let t = vp.project(LatticeCoord::new(1, 1), scroll);
        let size = vp.tile_size();
        let affine = t.to_affine(scroll, size);

        let center = affine * Point::new(size / 2.0, size / 2.0);
        assert!((center.x - (200.0 - 50.0 + size / 2.0)).abs() < 1e-9);
        assert!((center.y - (200.0 - 20.0 + size / 2.0)).abs() < 1e-9);

        let corner = affine * Point::ZERO;
        let expected = 200.0 - 50.0 + size / 2.0 * (1.0 - t.scale);
        assert!((corner.x - expected).abs() < 1e-9);
    }
}
