// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors and warnings reported by a layout run.

use core::fmt;

use understory_enclosing_disk::DiskError;

use crate::tree::PosId;

/// Invalid [`LayoutSettings`](crate::LayoutSettings) values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// `min_radius` is not finite or not greater than zero.
    #[error("minimum radius must be finite and greater than zero, got {0}")]
    MinRadius(f64),
    /// `node_spacing` is not finite or not greater than zero.
    #[error("node spacing must be finite and greater than zero, got {0}")]
    NodeSpacing(f64),
    /// `max_radius` is not finite or negative.
    #[error("maximum radius must be finite and not negative, got {0}")]
    MaxRadius(f64),
    /// `max_radius` is set but smaller than `min_radius`.
    #[error("maximum radius {max_radius} is below the minimum radius {min_radius}")]
    RadiusRange {
        /// The configured minimum radius.
        min_radius: f64,
        /// The configured maximum radius.
        max_radius: f64,
    },
    /// `node_rotation` is not finite.
    #[error("node rotation must be finite, got {0}")]
    NodeRotation(f64),
}

/// Failure of a whole layout run. No partial tree is returned.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The settings failed validation before any node was visited.
    #[error("invalid layout settings: {0}")]
    Settings(#[from] SettingsError),
    /// The enclosing disk of a node's children could not be computed.
    #[error("degenerate geometry below level {level}: {source}")]
    DegenerateGeometry {
        /// Level of the parent whose children were being enclosed.
        level: usize,
        /// What the solver reported.
        source: DiskError,
    },
}

/// Non-fatal conditions recorded while laying out a tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutWarning {
    /// A node's radius exceeded `max_radius` and was clamped.
    ///
    /// Ancestors are sized with the clamped value, so they reserve less space than the
    /// subtree occupies.
    RadiusLimitReached {
        /// The clamped node.
        node: PosId,
        /// Level of the clamped node.
        level: usize,
        /// Radius before clamping.
        radius: f64,
        /// The limit it was clamped to.
        max_radius: f64,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadiusLimitReached {
                node,
                level,
                radius,
                max_radius,
            } => write!(
                f,
                "maximum radius {max_radius} reached by node {} on level {level} (radius {radius})",
                node.index()
            ),
        }
    }
}
