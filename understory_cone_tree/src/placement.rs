// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular sector placement of sized children around a provisional center.
//!
//! Every child gets a slice of the full turn proportional to its footprint
//! `r + spacing / 2`. The child sits on the bisector of its slice, far enough out that its
//! disk fits inside the slice and clears a center disk of `min_radius`. Slices tile the
//! circle in input order, starting at `node_rotation`.
//!
//! This guarantees that siblings do not overlap, not that the result is compact; the
//! enclosing disk computed afterwards determines the radius reported upward.

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::Vec2;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::settings::LayoutSettings;

/// Place children with the given `radii` around the origin.
///
/// Positions are written to `out` in input order, replacing its previous content.
/// With fewer than two children there is nothing to arrange and every child stays at
/// the origin.
pub fn place_in_sectors(radii: &[f64], settings: &LayoutSettings, out: &mut Vec<Vec2>) {
    out.clear();
    if radii.len() < 2 {
        out.extend(radii.iter().map(|_| Vec2::ZERO));
        return;
    }

    let half_spacing = settings.node_spacing * 0.5;
    let radius_sum: f64 = radii.iter().map(|r| r + half_spacing).sum();
    let center_size = settings.min_radius;

    let mut angle_total = 0.0;
    for &radius in radii {
        let extent = radius + half_spacing;
        let angle = extent / radius_sum * TAU;
        let half_angle = angle * 0.5;
        let distance = (center_size + extent).max(extent / half_angle.sin());
        let direction = Vec2::from_angle(angle_total + half_angle + settings.node_rotation);
        out.push(direction * distance);
        angle_total += angle;
    }
}
