// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Welzl's randomized minimum enclosing disk, adapted to disks with a radius.

use alloc::vec::Vec;

use kurbo::{Circle, Point};
use rand::Rng;

use crate::error::DiskError;
use crate::geometry::{contains_disk, outer_circle_three, outer_circle_two};

/// Up to three disks known to touch the rim of the current candidate.
#[derive(Clone, Copy, Debug)]
struct Boundary {
    disks: [Circle; 3],
    len: usize,
}

impl Boundary {
    const EMPTY: Self = Self {
        disks: [Circle {
            center: Point::ORIGIN,
            radius: 0.0,
        }; 3],
        len: 0,
    };

    fn with(mut self, disk: Circle) -> Self {
        debug_assert!(self.len < self.disks.len(), "boundary holds at most three disks");
        self.disks[self.len] = disk;
        self.len += 1;
        self
    }

    /// Disk determined by the boundary alone; `None` while the boundary is empty.
    fn resolve(&self) -> Result<Option<Circle>, DiskError> {
        match &self.disks[..self.len] {
            [] => Ok(None),
            [a] => Ok(Some(*a)),
            [a, b] => Ok(Some(outer_circle_two(a, b))),
            [a, b, c, ..] => outer_circle_three(a, b, c).map(Some),
        }
    }
}

/// Shuffle `items` in place with Durstenfeld's variant of the Fisher-Yates shuffle.
///
/// Runs in `O(n)` and draws exactly `n - 1` values from `rng`, so a seeded generator
/// always yields the same permutation.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Compute the smallest disk enclosing all `disks`.
///
/// The input is shuffled with `rng` first, which gives Welzl's algorithm its expected
/// linear running time. Pass a seeded generator for reproducible results.
///
/// The returned disk contains every input disk: for each `d`,
/// `distance(result.center, d.center) + d.radius <= result.radius` up to rounding.
///
/// # Errors
///
/// - [`DiskError::Empty`] if `disks` is empty.
/// - [`DiskError::Collinear`] if a circumcircle has to be built through collinear points.
/// - [`DiskError::NonFinite`] if the result is not finite.
pub fn smallest_enclosing_disk<R: Rng + ?Sized>(
    disks: &[Circle],
    rng: &mut R,
) -> Result<Circle, DiskError> {
    if disks.is_empty() {
        return Err(DiskError::Empty);
    }
    let mut shuffled: Vec<Circle> = disks.to_vec();
    shuffle(&mut shuffled, rng);
    smallest_enclosing_disk_in_order(&shuffled)
}

/// Like [`smallest_enclosing_disk`], but processes `disks` in the given order.
///
/// Disks are scanned front to back. The order affects running time and which boundary
/// disks are found, not the containment guarantee.
///
/// # Errors
///
/// Same as [`smallest_enclosing_disk`].
pub fn smallest_enclosing_disk_in_order(disks: &[Circle]) -> Result<Circle, DiskError> {
    let support = welzl(disks)?.ok_or(DiskError::Empty)?;

    // The boundary circles run through outer points, so tighten the radius around the
    // found center until it reaches the far rim of every disk.
    let radius = disks
        .iter()
        .map(|d| (d.center - support.center).hypot() + d.radius)
        .fold(0.0, f64::max);
    let disk = Circle::new(support.center, radius);
    if !disk.center.is_finite() || !disk.radius.is_finite() {
        return Err(DiskError::NonFinite);
    }

    tracing::trace!(
        disks = disks.len(),
        x = disk.center.x,
        y = disk.center.y,
        radius = disk.radius,
        "enclosing disk"
    );
    Ok(disk)
}

/// Welzl's `welzl(P, R)` unrolled into three nested passes.
///
/// A disk that escapes the current candidate restarts the scan over the disks before it
/// with that disk added to the boundary. The boundary never holds more than three disks,
/// so stack usage does not depend on the input size.
fn welzl(p: &[Circle]) -> Result<Option<Circle>, DiskError> {
    let mut current = None;
    for (i, a) in p.iter().enumerate() {
        if covers(current, a) {
            continue;
        }
        let with_a = Boundary::EMPTY.with(*a);
        current = with_a.resolve()?;
        for (j, b) in p[..i].iter().enumerate() {
            if covers(current, b) {
                continue;
            }
            let with_ab = with_a.with(*b);
            current = with_ab.resolve()?;
            for c in &p[..j] {
                if covers(current, c) {
                    continue;
                }
                current = with_ab.with(*c).resolve()?;
            }
        }
    }
    Ok(current)
}

fn covers(candidate: Option<Circle>, disk: &Circle) -> bool {
    candidate.is_some_and(|outer| contains_disk(&outer, disk))
}
