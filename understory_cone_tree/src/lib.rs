// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cone_tree --heading-base-level=0

//! Understory Cone Tree: radial layout of hierarchies as nested, non-overlapping disks.
//!
//! Every node of the input tree gets a disk. Leaves get a minimum radius (or a size you
//! provide), and every parent places its children's disks around itself and takes the
//! smallest disk enclosing them as its own. Seen from above this is a 2D cone tree: each
//! subtree occupies a disk, and sibling disks never overlap.
//!
//! ## Pieces
//!
//! - [`TreeNode`]: implement this for your hierarchy. The layout only borrows nodes.
//! - [`LayoutSettings`]: minimum and maximum radius, sibling spacing, rotation, and whether
//!   parents take the enclosing radius of their children.
//! - [`ConeTreeLayout`]: the driver. Add a leaf sizing closure with
//!   [`ConeTreeLayout::with_leaf_radius`], then call [`ConeTreeLayout::layout`] with a
//!   random number generator, or [`ConeTreeLayout::layout_seeded`].
//! - [`ConeTree`]: the result. One [`PosInfo`] per node with its level, radius, and
//!   position relative to its parent, addressed by [`PosId`] in breadth-first order.
//!
//! ## Algorithm
//!
//! Subtrees are sized bottom-up. A node with several children hands each child an
//! angular sector of the full turn proportional to `radius + spacing / 2`
//! ([`placement::place_in_sectors`]), then computes the smallest disk enclosing the placed
//! children with Welzl's algorithm ([`understory_enclosing_disk`]). Children are shifted so
//! that this disk is centered on the parent. A node with one child takes that child's
//! radius and keeps it at its own position.
//!
//! The driver walks an arena instead of recursing, and the disk solver loops instead of
//! recursing, so neither tree depth nor the number of children affects stack usage.
//!
//! ## Diagnostics
//!
//! Radii above [`LayoutSettings::max_radius`] are clamped. Each clamp is recorded as a
//! [`LayoutWarning`] on the result and logged through `tracing` at `WARN` level. Layout
//! start and end are logged at `DEBUG` level.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use understory_cone_tree::{LayoutSettings, PosId, TreeNode, layout};
//!
//! struct Node(Vec<Node>);
//!
//! impl TreeNode for Node {
//!     fn children(&self) -> impl Iterator<Item = &Self> {
//!         self.0.iter()
//!     }
//! }
//!
//! let root = Node(vec![Node(vec![]), Node(vec![])]);
//! let settings = LayoutSettings::new(1.0, 0.2);
//! let tree = layout(&root, settings, &mut SmallRng::seed_from_u64(0)).unwrap();
//!
//! // Two unit leaves sit opposite each other, 2.1 away from the root.
//! assert!((tree.root().radius - 3.1).abs() < 1e-9);
//! let positions = tree.absolute_positions();
//! for id in tree.child_ids(PosId::ROOT) {
//!     assert!((positions[id.index()].distance(Point::ORIGIN) - 2.1).abs() < 1e-9);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod layout;
pub mod node;
pub mod placement;
pub mod settings;
pub mod tree;

pub use error::{LayoutError, LayoutWarning, SettingsError};
pub use layout::ConeTreeLayout;
pub use node::TreeNode;
pub use settings::LayoutSettings;
pub use tree::{ConeTree, PosId, PosInfo};

use rand::Rng;

/// Lay out the tree below `root` with `settings` and the minimum radius for every leaf.
///
/// Use [`ConeTreeLayout`] to size leaves individually.
///
/// # Errors
///
/// See [`ConeTreeLayout::layout`].
pub fn layout<'n, N: TreeNode, R: Rng + ?Sized>(
    root: &'n N,
    settings: LayoutSettings,
    rng: &mut R,
) -> Result<ConeTree<'n, N>, LayoutError> {
    ConeTreeLayout::new(settings).layout(root, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::Point;
    use rand::{Rng, SeedableRng};
    use rand::rngs::SmallRng;

    #[derive(Debug)]
    struct Item {
        size: f64,
        items: Vec<Item>,
    }

    impl TreeNode for Item {
        fn children(&self) -> impl Iterator<Item = &Self> {
            self.items.iter()
        }
    }

    fn random_tree(rng: &mut SmallRng, depth: usize) -> Item {
        let fan_out = if depth == 0 { 0 } else { rng.gen_range(0..7) };
        Item {
            size: rng.gen_range(-1.0..4.0),
            items: (0..fan_out).map(|_| random_tree(rng, depth - 1)).collect(),
        }
    }

    fn chain(depth: usize, fan_out: usize) -> Item {
        Item {
            size: 0.0,
            items: if depth == 0 {
                Vec::new()
            } else {
                (0..fan_out).map(|_| chain(depth - 1, fan_out)).collect()
            },
        }
    }

    fn sizing() -> ConeTreeLayout<'static, Item> {
        ConeTreeLayout::new(LayoutSettings::new(0.5, 0.1)).with_leaf_radius(|i: &Item| i.size)
    }

    #[test]
    fn random_trees_hold_invariants() {
        let mut rng = SmallRng::seed_from_u64(0xc0ffee);
        for round in 0..40 {
            let root = random_tree(&mut rng, 4);
            let tree = sizing().layout(&root, &mut rng).unwrap();
            assert!(tree.warnings().is_empty());

            for (id, info) in tree.iter() {
                assert!(info.radius >= 0.5, "round {round}: {id:?} too small");
                let kids = tree.children(id);
                for (i, a) in kids.iter().enumerate() {
                    let reach = a.rel_pos.hypot() + a.radius;
                    assert!(
                        reach <= info.radius * (1.0 + 1e-9),
                        "round {round}: child of {id:?} reaches {reach}, radius {}",
                        info.radius
                    );
                    for b in &kids[i + 1..] {
                        let gap = (a.rel_pos - b.rel_pos).hypot() - a.radius - b.radius;
                        assert!(gap >= -1e-9, "round {round}: siblings overlap by {gap}");
                    }
                }
            }
        }
    }

    #[test]
    fn radii_stay_below_the_limit() {
        // Six leaves of 0.5 enclose to 1.6, and six of those to 4.9.
        let root = chain(2, 6);
        let limited = ConeTreeLayout::new(LayoutSettings::new(0.5, 0.1).with_max_radius(4.0))
            .with_leaf_radius(|i: &Item| i.size)
            .layout_seeded(&root, 1)
            .unwrap();
        for (_, info) in limited.iter() {
            assert!(info.radius <= 4.0);
        }
        assert_eq!(limited.warnings().len(), 1);
        for warning in limited.warnings() {
            let LayoutWarning::RadiusLimitReached {
                node,
                radius,
                max_radius,
                ..
            } = *warning;
            assert_eq!(max_radius, 4.0);
            assert!(radius > 4.0);
            assert_eq!(limited.get(node).map(|info| info.radius), Some(4.0));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let mut rng = SmallRng::seed_from_u64(5);
        let root = random_tree(&mut rng, 4);
        let a = sizing().layout_seeded(&root, 17).unwrap();
        let b = sizing().layout_seeded(&root, 17).unwrap();
        assert_eq!(a.len(), b.len());
        for ((_, x), (_, y)) in a.iter().zip(b.iter()) {
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.rel_pos, y.rel_pos);
        }
    }

    #[test]
    fn depth_four_tree_has_three_levels() {
        let root = chain(3, 2);
        let tree = layout(
            &root,
            LayoutSettings::default(),
            &mut SmallRng::seed_from_u64(3),
        )
        .unwrap();
        assert_eq!(tree.tree_levels(), 3);
        assert_eq!(tree.len(), 15);
        assert_eq!(tree.level(3).count(), 8);
        assert!(tree.level(2).all(|(_, info)| info.level == 2));
    }

    #[test]
    fn absolute_positions_separate_leaves() {
        let root = chain(3, 3);
        let tree = layout(
            &root,
            LayoutSettings::new(1.0, 0.2),
            &mut SmallRng::seed_from_u64(4),
        )
        .unwrap();
        let positions = tree.absolute_positions();
        assert_eq!(positions[0], Point::ORIGIN);

        let leaves: Vec<(PosId, f64)> = tree
            .level(3)
            .map(|(id, info)| (id, info.radius))
            .collect();
        for (i, &(a, ra)) in leaves.iter().enumerate() {
            let single = tree.absolute_position(a).unwrap();
            assert!(single.distance(positions[a.index()]) < 1e-9);
            for &(b, rb) in &leaves[i + 1..] {
                let gap = positions[a.index()].distance(positions[b.index()]) - ra - rb;
                assert!(gap >= -1e-9, "{a:?} and {b:?} overlap by {gap}");
            }
        }
    }

    #[test]
    fn settings_errors_surface() {
        let root = chain(1, 2);
        let mut rng = SmallRng::seed_from_u64(0);
        let bad = LayoutSettings::new(1.0, 0.2).with_max_radius(0.5);
        assert_eq!(
            layout(&root, bad, &mut rng).unwrap_err(),
            LayoutError::Settings(SettingsError::RadiusRange {
                min_radius: 1.0,
                max_radius: 0.5
            })
        );
    }

    #[test]
    fn builder_reports_its_settings() {
        let settings = LayoutSettings::new(2.0, 0.5).with_rotation_degrees(45.0);
        let driver: ConeTreeLayout<'_, Item> = ConeTreeLayout::new(settings);
        assert_eq!(driver.settings(), &settings);
    }
}
