// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enclosing disk basics.
//!
//! Enclose a few disks, check containment, and show that a fixed seed reproduces the result.
//!
//! Run:
//! - `cargo run -p understory_demos --example enclosing_disk_basics`

use kurbo::{Circle, Point};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use understory_enclosing_disk::{
    DiskError, contains_disk, geometry, smallest_enclosing_disk, smallest_enclosing_disk_in_order,
};

fn main() {
    let disks = [
        Circle::new((4.0, 1.0), 1.0),
        Circle::new((-2.0, 3.0), 0.5),
        Circle::new((0.5, -4.0), 2.0),
        Circle::new((-3.0, -1.0), 1.2),
    ];

    let mut rng = SmallRng::seed_from_u64(42);
    let disk = smallest_enclosing_disk(&disks, &mut rng).unwrap();
    println!(
        "enclosing disk: center=({:.3}, {:.3}) radius={:.3}",
        disk.center.x, disk.center.y, disk.radius
    );
    for d in &disks {
        println!("  contains {d:?}: {}", contains_disk(&disk, d));
    }

    // Same seed, same disk.
    let again = smallest_enclosing_disk(&disks, &mut SmallRng::seed_from_u64(42)).unwrap();
    println!("reproducible: {}", again == disk);

    // Processing order only changes which disks end up on the boundary.
    let ordered = smallest_enclosing_disk_in_order(&disks).unwrap();
    println!("in-order radius: {:.3}", ordered.radius);

    // Primitives.
    let c = geometry::circumcircle(
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 2.0),
    )
    .unwrap();
    println!("circumcircle: {c:?}");

    // Degenerate input is an error, not NaN.
    let collinear = geometry::circumcircle(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    );
    println!("collinear: {collinear:?}");
    assert_eq!(collinear, Err(DiskError::Collinear));
    println!(
        "empty: {:?}",
        smallest_enclosing_disk(&[], &mut rng).unwrap_err()
    );
}
