// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout settings and their validation.

use crate::error::SettingsError;

/// Tunable parameters of a cone tree layout.
///
/// Settings are plain values and stay fixed for the duration of one layout run.
/// [`LayoutSettings::validate`] is called at the start of every run.
///
/// With the `serde` feature the settings (de)serialize with camelCase keys
/// (`minRadius`, `maxRadius`, `nodeSpacing`, `nodeRotation`,
/// `useRadiusOfPreviousLevel`); missing keys take their [`Default`] values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutSettings {
    /// Smallest radius of any node. Leaves without an override use exactly this radius.
    pub min_radius: f64,
    /// Largest radius of any node; `0.0` means unlimited.
    ///
    /// Larger radii are clamped and reported as
    /// [`LayoutWarning::RadiusLimitReached`](crate::LayoutWarning::RadiusLimitReached).
    pub max_radius: f64,
    /// Gap kept between the disks of adjacent siblings.
    pub node_spacing: f64,
    /// Angle in radians added to every child's placement angle.
    pub node_rotation: f64,
    /// Whether a parent takes the radius of the disk enclosing its children.
    ///
    /// When `false`, a parent keeps its own (minimum or overridden) radius even though its
    /// children reach further out. Parents one level up are then placed using that smaller
    /// radius, so neighboring subtrees can overlap.
    pub use_radius_of_previous_level: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            min_radius: 0.05,
            max_radius: 0.0,
            node_spacing: 0.05,
            node_rotation: 0.0,
            use_radius_of_previous_level: true,
        }
    }
}

impl LayoutSettings {
    /// Settings with the given minimum radius and spacing; everything else is default.
    pub fn new(min_radius: f64, node_spacing: f64) -> Self {
        Self {
            min_radius,
            node_spacing,
            ..Self::default()
        }
    }

    /// Set the maximum radius (`0.0` for unlimited).
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }

    /// Set the spacing between sibling disks.
    pub fn with_node_spacing(mut self, node_spacing: f64) -> Self {
        self.node_spacing = node_spacing;
        self
    }

    /// Set the placement rotation in radians.
    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.node_rotation = radians;
        self
    }

    /// Set the placement rotation in degrees.
    pub fn with_rotation_degrees(mut self, degrees: f64) -> Self {
        self.node_rotation = degrees.to_radians();
        self
    }

    /// Choose whether parents take the enclosing radius of their children.
    pub fn with_radius_of_previous_level(mut self, enabled: bool) -> Self {
        self.use_radius_of_previous_level = enabled;
        self
    }

    /// Whether `max_radius` limits node radii.
    pub fn is_radius_limited(&self) -> bool {
        self.max_radius > 0.0
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns the first offending value as a [`SettingsError`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.min_radius.is_finite() && self.min_radius > 0.0) {
            return Err(SettingsError::MinRadius(self.min_radius));
        }
        if !(self.node_spacing.is_finite() && self.node_spacing > 0.0) {
            return Err(SettingsError::NodeSpacing(self.node_spacing));
        }
        if !(self.max_radius.is_finite() && self.max_radius >= 0.0) {
            return Err(SettingsError::MaxRadius(self.max_radius));
        }
        if self.is_radius_limited() && self.max_radius < self.min_radius {
            return Err(SettingsError::RadiusRange {
                min_radius: self.min_radius,
                max_radius: self.max_radius,
            });
        }
        if !self.node_rotation.is_finite() {
            return Err(SettingsError::NodeRotation(self.node_rotation));
        }
        Ok(())
    }
}
