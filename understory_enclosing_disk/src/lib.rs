// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_enclosing_disk --heading-base-level=0

//! Understory Enclosing Disk: the smallest disk containing a set of disks.
//!
//! This crate computes a minimum enclosing disk with Welzl's randomized incremental
//! algorithm. Inputs are disks rather than points, each a [`kurbo::Circle`], and the
//! result is guaranteed to contain every input disk completely.
//!
//! - [`smallest_enclosing_disk`] shuffles the input with a caller-provided [`rand::Rng`]
//!   and runs Welzl's `welzl(P, R)` procedure over it, unrolled into nested loops so that
//!   stack usage does not grow with the number of disks.
//! - [`smallest_enclosing_disk_in_order`] skips the shuffle, for callers that already
//!   randomized their input or need a fixed processing order.
//! - [`geometry`] exposes the circle primitives the trivial cases are built from:
//!   outer points, circles through two points, perpendicular bisectors in general form,
//!   and circumcircles via their intersection.
//!
//! ## Working frame
//!
//! The trivial cases for two and three boundary disks build their circle through each
//! disk's *outer point*: the point on its rim farthest from the origin. This suits inputs
//! arranged around the origin, such as children placed around a parent in a radial tree
//! layout. The solver then tightens the radius around the found center so that every
//! disk is contained.
//!
//! ## Randomness
//!
//! The shuffle draws from the generator you pass in. Use a seeded generator (for example
//! `rand::rngs::SmallRng::seed_from_u64`) for reproducible output.
//!
//! ## Degenerate input
//!
//! A circumcircle through collinear points does not exist. Instead of producing NaN, the
//! solver reports [`DiskError::Collinear`]. Empty input yields [`DiskError::Empty`], and a
//! non-finite result yields [`DiskError::NonFinite`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Circle, Point};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use understory_enclosing_disk::smallest_enclosing_disk;
//!
//! let disks = [
//!     Circle::new((0.0, 2.0), 1.0),
//!     Circle::new((0.0, -2.0), 1.0),
//! ];
//! let mut rng = SmallRng::seed_from_u64(1);
//! let disk = smallest_enclosing_disk(&disks, &mut rng).unwrap();
//!
//! assert!(disk.center.distance(Point::ORIGIN) < 1e-9);
//! assert!((disk.radius - 3.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod geometry;
pub mod welzl;

pub use error::DiskError;
pub use geometry::contains_disk;
pub use welzl::{shuffle, smallest_enclosing_disk, smallest_enclosing_disk_in_order};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Circle;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn quadrant_disks_are_enclosed() {
        let disks = [
            Circle::new((3.0, 3.0), 1.0),
            Circle::new((-3.0, 3.0), 0.5),
            Circle::new((-3.0, -3.0), 2.0),
            Circle::new((3.0, -3.0), 0.25),
        ];
        let mut rng = SmallRng::seed_from_u64(11);
        let disk = smallest_enclosing_disk(&disks, &mut rng).unwrap();
        for d in &disks {
            assert!(contains_disk(&disk, d), "{d:?} escapes {disk:?}");
        }
    }

    #[test]
    fn errors_have_messages() {
        use alloc::string::ToString;
        assert_eq!(
            DiskError::Collinear.to_string(),
            "circumcircle support points are collinear"
        );
    }
}
