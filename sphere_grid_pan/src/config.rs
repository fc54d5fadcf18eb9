// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Tuning knobs for drag, wheel and coasting behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanConfig {
    /// Scroll distance per pixel of pointer movement while dragging.
    pub drag_gain: f64,
    /// Velocity (pixels per frame) per pixel of pointer movement.
    pub velocity_gain: f64,
    /// Per-frame velocity decay factor; must lie in `(0, 1)`.
    pub friction: f64,
    /// Velocity at or below which coasting stops (pixels per frame).
    ///
    /// Coasting continues while either axis exceeds this value.
    pub rest_threshold: f64,
    /// Scroll distance per pixel of wheel delta.
    pub wheel_gain: f64,
    /// Pixels per wheel "line" for line-based scroll deltas.
    pub line_size: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            drag_gain: 0.5,
            velocity_gain: 0.1,
            friction: 0.95,
            rest_threshold: 0.1,
            wheel_gain: 0.5,
            line_size: 40.0,
        }
    }
}

impl PanConfig {
    /// Checks the configuration, returning it unchanged when it is usable.
    ///
    /// Friction strictly below one and a positive rest threshold guarantee
    /// that coasting reaches rest in a finite number of frames.
    pub fn validate(self) -> Result<Self, PanConfigError> {
        for (name, value) in [
            ("drag_gain", self.drag_gain),
            ("velocity_gain", self.velocity_gain),
            ("wheel_gain", self.wheel_gain),
        ] {
            if !value.is_finite() {
                return Err(PanConfigError::Gain { name, value });
            }
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(PanConfigError::Friction(self.friction));
        }
        if !(self.rest_threshold.is_finite() && self.rest_threshold > 0.0) {
            return Err(PanConfigError::RestThreshold(self.rest_threshold));
        }
        if !(self.line_size.is_finite() && self.line_size > 0.0) {
            return Err(PanConfigError::LineSize(self.line_size));
        }
        Ok(self)
    }
}

/// Error returned by [`PanConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanConfigError {
    /// A gain was NaN or infinite.
    Gain {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Friction was outside `(0, 1)`, so coasting would never settle.
    Friction(f64),
    /// Rest threshold was zero, negative or not finite.
    RestThreshold(f64),
    /// Line size was zero, negative or not finite.
    LineSize(f64),
}

impl fmt::Display for PanConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gain { name, value } => write!(f, "{name} must be finite, got {value}"),
            Self::Friction(v) => write!(f, "friction must lie in (0, 1), got {v}"),
            Self::RestThreshold(v) => write!(f, "rest threshold must be positive, got {v}"),
            Self::LineSize(v) => write!(f, "line size must be positive, got {v}"),
        }
    }
}

impl core::error::Error for PanConfigError {}
