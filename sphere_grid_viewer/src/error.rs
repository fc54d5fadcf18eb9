// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use sphere_grid::ConfigError;
use sphere_grid_pan::PanConfigError;

/// Error returned by [`GridViewer::from_configs`](crate::GridViewer::from_configs).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerConfigError {
    /// The viewport configuration was rejected.
    Viewport(ConfigError),
    /// The pan configuration was rejected.
    Pan(PanConfigError),
}

impl fmt::Display for ViewerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(_) => f.write_str("invalid viewport configuration"),
            Self::Pan(_) => f.write_str("invalid pan configuration"),
        }
    }
}

impl core::error::Error for ViewerConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Viewport(e) => Some(e),
            Self::Pan(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ViewerConfigError {
    fn from(e: ConfigError) -> Self {
        Self::Viewport(e)
    }
}

impl From<PanConfigError> for ViewerConfigError {
    fn from(e: PanConfigError) -> Self {
        Self::Pan(e)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::error::Error;

    use sphere_grid::ConfigError;
    use sphere_grid_pan::PanConfigError;

    use super::ViewerConfigError;

    #[test]
    fn source_chains_to_the_inner_error() {
        let err = ViewerConfigError::from(PanConfigError::Friction(1.0));
        assert_eq!(err.to_string(), "invalid pan configuration");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), PanConfigError::Friction(1.0).to_string());

        let err = ViewerConfigError::from(ConfigError::EmptyVisibleGrid);
        assert_eq!(err.to_string(), "invalid viewport configuration");
        assert!(err.source().is_some());
    }
}
