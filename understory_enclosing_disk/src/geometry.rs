// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle primitives used by the solver: outer points, two-point circles, and circumcircles.
//!
//! Disks are represented as [`kurbo::Circle`]. The "outer point" of a disk is the point on
//! its rim farthest from the origin of the working frame; the trivial cases of the solver
//! build their circles through these points so that a disk's own radius acts as an offset.

use kurbo::{Circle, Point, Vec2};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::DiskError;

/// Relative tolerance used by [`contains_disk`].
pub const CONTAINMENT_EPSILON: f64 = 1e-9;

/// Directions shorter than this have no usable orientation.
const DIRECTION_EPSILON: f64 = 1e-12;

/// Relative threshold below which two bisectors are considered parallel.
const PARALLEL_EPSILON: f64 = 1e-12;

/// A line in general form `a * x + b * y + c = 0`, stored as `[a, b, c]`.
pub type GeneralLine = [f64; 3];

/// Whether `inner` lies completely inside `outer`.
///
/// The comparison allows a small error relative to the size of `outer`, so a disk is
/// always considered to contain itself.
pub fn contains_disk(outer: &Circle, inner: &Circle) -> bool {
    let reach = (inner.center - outer.center).hypot() + inner.radius;
    reach <= outer.radius + CONTAINMENT_EPSILON * outer.radius.max(1.0)
}

/// The point on the rim of `disk` farthest from the origin.
///
/// A disk centered (numerically) at the origin has no preferred direction and yields its
/// own center.
pub fn outer_point(disk: &Circle) -> Point {
    let dir = disk.center.to_vec2();
    let len = dir.hypot();
    if len <= DIRECTION_EPSILON {
        return disk.center;
    }
    disk.center + dir * (disk.radius / len)
}

/// The smallest circle through `a` and `b`: the one having the segment as its diameter.
pub fn circle_from_two_points(a: Point, b: Point) -> Circle {
    let center = a.midpoint(b);
    Circle::new(center, center.distance(a))
}

/// Perpendicular bisector of the segment `p`-`q` in general form.
///
/// The bisector runs through the midpoint `m` along `q - m` rotated by 90 degrees.
/// Its normal is that direction rotated once more, and `c = -(m · normal)`.
///
/// ```rust
/// use kurbo::Point;
/// use understory_enclosing_disk::geometry::{intersect_lines, perpendicular_bisector};
///
/// // Bisector of (0, 0)-(2, 0) is the vertical line x = 1: `[a, b, c]` with `a * 1 + c == 0`.
/// let [a, b, c] = perpendicular_bisector(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
/// assert_eq!(b, 0.0);
/// assert_eq!(a * 1.0 + c, 0.0);
///
/// // Bisector of (0, 0)-(0, 4) is y = 2; both meet at (1, 2).
/// let horizontal = perpendicular_bisector(Point::new(0.0, 0.0), Point::new(0.0, 4.0));
/// let hit = intersect_lines([a, b, c], horizontal).unwrap();
/// assert!(hit.distance(Point::new(1.0, 2.0)) < 1e-12);
///
/// // Parallel bisectors do not meet.
/// let shifted = perpendicular_bisector(Point::new(4.0, 0.0), Point::new(6.0, 0.0));
/// assert_eq!(intersect_lines([a, b, c], shifted), None);
/// ```
pub fn perpendicular_bisector(p: Point, q: Point) -> GeneralLine {
    let mid = p.midpoint(q);
    let half = q - mid;
    let dir = Vec2::new(-half.y, half.x);
    let normal = Vec2::new(-dir.y, dir.x);
    [normal.x, normal.y, -mid.to_vec2().dot(normal)]
}

/// Intersection of two lines in general form.
///
/// The homogeneous intersection is the cross product of the two coefficient vectors.
/// Returns `None` when the lines are (nearly) parallel, including when either line is
/// degenerate because its defining points coincide.
pub fn intersect_lines(l1: GeneralLine, l2: GeneralLine) -> Option<Point> {
    let x = l1[1] * l2[2] - l1[2] * l2[1];
    let y = l1[2] * l2[0] - l1[0] * l2[2];
    let z = l1[0] * l2[1] - l1[1] * l2[0];
    let scale = Vec2::new(l1[0], l1[1]).hypot() * Vec2::new(l2[0], l2[1]).hypot();
    if z.abs() <= PARALLEL_EPSILON * scale {
        return None;
    }
    Some(Point::new(x / z, y / z))
}

/// Circumcircle of the triangle `a`, `b`, `c`.
///
/// Fails with [`DiskError::Collinear`] when the three points do not span a triangle.
pub fn circumcircle(a: Point, b: Point, c: Point) -> Result<Circle, DiskError> {
    let ab = perpendicular_bisector(a, b);
    let ac = perpendicular_bisector(a, c);
    let center = intersect_lines(ab, ac).ok_or(DiskError::Collinear)?;
    Ok(Circle::new(center, center.distance(a)))
}

/// Circle touching the outer points of two disks.
pub fn outer_circle_two(a: &Circle, b: &Circle) -> Circle {
    circle_from_two_points(outer_point(a), outer_point(b))
}

/// Circumcircle through the outer points of three disks.
pub fn outer_circle_three(a: &Circle, b: &Circle, c: &Circle) -> Result<Circle, DiskError> {
    circumcircle(outer_point(a), outer_point(b), outer_point(c))
}
