// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the enclosing disk solver.

/// Reasons the solver could not produce an enclosing disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiskError {
    /// No disks were given; the enclosing disk of nothing is undefined.
    #[error("cannot enclose an empty set of disks")]
    Empty,
    /// Three boundary points used for a circumcircle are collinear (or coincide).
    #[error("circumcircle support points are collinear")]
    Collinear,
    /// The computed disk has a non-finite center or radius, usually from non-finite input.
    #[error("enclosing disk is not finite")]
    NonFinite,
}
