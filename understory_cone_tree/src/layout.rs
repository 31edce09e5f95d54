// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout driver: sizes every subtree bottom-up and places children around parents.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Circle, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use understory_enclosing_disk::smallest_enclosing_disk;

use crate::error::{LayoutError, LayoutWarning};
use crate::node::TreeNode;
use crate::placement::place_in_sectors;
use crate::settings::LayoutSettings;
use crate::tree::{ConeTree, PosId, PosInfo, collect_nodes};

/// Caller-provided radius for leaves and single-child nodes.
type LeafRadius<'f, N> = Box<dyn Fn(&N) -> f64 + 'f>;

/// Cone tree layout with optional per-node sizing.
///
/// ```rust
/// use understory_cone_tree::{ConeTreeLayout, LayoutSettings, TreeNode};
///
/// struct Entry {
///     size: f64,
///     entries: Vec<Entry>,
/// }
///
/// impl TreeNode for Entry {
///     fn children(&self) -> impl Iterator<Item = &Self> {
///         self.entries.iter()
///     }
/// }
///
/// let file = |size| Entry { size, entries: vec![] };
/// let root = Entry { size: 0.0, entries: vec![file(2.0), file(0.5), file(1.0)] };
///
/// let tree = ConeTreeLayout::new(LayoutSettings::new(0.5, 0.1))
///     .with_leaf_radius(|e: &Entry| e.size)
///     .layout_seeded(&root, 7)
///     .unwrap();
///
/// let radii: Vec<f64> = tree.iter().skip(1).map(|(_, info)| info.radius).collect();
/// // The 0.5 file is not larger than the minimum radius, so it keeps the minimum.
/// assert_eq!(radii, [2.0, 0.5, 1.0]);
/// ```
pub struct ConeTreeLayout<'f, N> {
    settings: LayoutSettings,
    leaf_radius: Option<LeafRadius<'f, N>>,
}

impl<N> fmt::Debug for ConeTreeLayout<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConeTreeLayout")
            .field("settings", &self.settings)
            .field("leaf_radius", &self.leaf_radius.as_ref().map(|_| "Fn"))
            .finish()
    }
}

/// Reusable buffers for arranging one set of siblings.
#[derive(Default)]
struct Scratch {
    radii: Vec<f64>,
    positions: Vec<Vec2>,
    disks: Vec<Circle>,
}

impl<'f, N: TreeNode> ConeTreeLayout<'f, N> {
    /// A layout using `settings` and the minimum radius for every leaf.
    pub fn new(settings: LayoutSettings) -> Self {
        Self {
            settings,
            leaf_radius: None,
        }
    }

    /// Size leaves, and nodes with exactly one child, with `radius`.
    ///
    /// A returned value replaces the minimum radius when it is finite and larger than
    /// `min_radius`; anything else is ignored.
    pub fn with_leaf_radius(mut self, radius: impl Fn(&N) -> f64 + 'f) -> Self {
        self.leaf_radius = Some(Box::new(radius));
        self
    }

    /// The settings used by [`ConeTreeLayout::layout`].
    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Lay out the tree below `root`.
    ///
    /// `rng` drives the shuffle of the enclosing disk solver; the same generator state
    /// yields the same layout.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::Settings`] if the settings fail validation. No node is visited.
    /// - [`LayoutError::DegenerateGeometry`] if the children of some node cannot be
    ///   enclosed, for example because their radii overflow.
    pub fn layout<'n, R: Rng + ?Sized>(
        &self,
        root: &'n N,
        rng: &mut R,
    ) -> Result<ConeTree<'n, N>, LayoutError> {
        self.settings.validate()?;

        let mut nodes = collect_nodes(root);
        let tree_levels = nodes.last().map_or(0, |info| info.level);
        tracing::debug!(
            nodes = nodes.len(),
            levels = tree_levels,
            "cone tree layout started"
        );

        let mut warnings = Vec::new();
        let mut scratch = Scratch::default();
        // Children always come after their parent, so a reverse sweep sees every
        // subtree sized before the node that holds it.
        for idx in (0..nodes.len()).rev() {
            let (head, tail) = nodes.split_at_mut(idx + 1);
            let info = &mut head[idx];
            let start = info.children_start() - (idx + 1);
            let children = &mut tail[start..start + info.child_count()];

            let own = self.own_radius(info.node, children.len());
            let candidate = match children.len() {
                0 => own,
                1 => {
                    children[0].rel_pos = Vec2::ZERO;
                    own.max(children[0].radius)
                }
                _ => self.arrange(children, info.level, &mut *rng, &mut scratch)?,
            };
            let radius = if self.settings.use_radius_of_previous_level {
                candidate
            } else {
                own
            };
            info.radius = self.clamp(PosId::new(idx), info.level, radius, &mut warnings);
        }

        tracing::debug!(
            levels = tree_levels,
            radius = nodes[0].radius,
            warnings = warnings.len(),
            "cone tree layout finished"
        );
        Ok(ConeTree {
            nodes,
            tree_levels,
            warnings,
        })
    }

    /// Lay out the tree below `root` with a [`SmallRng`] seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`ConeTreeLayout::layout`].
    pub fn layout_seeded<'n>(
        &self,
        root: &'n N,
        seed: u64,
    ) -> Result<ConeTree<'n, N>, LayoutError> {
        self.layout(root, &mut SmallRng::seed_from_u64(seed))
    }

    fn own_radius(&self, node: &N, child_count: usize) -> f64 {
        let min_radius = self.settings.min_radius;
        if child_count <= 1
            && let Some(leaf_radius) = &self.leaf_radius
        {
            let radius = leaf_radius(node);
            if radius.is_finite() && radius > min_radius {
                return radius;
            }
        }
        min_radius
    }

    /// Place `children` around their parent and return the radius enclosing them.
    ///
    /// Positions are shifted so the enclosing disk is centered on the parent.
    fn arrange<R: Rng + ?Sized>(
        &self,
        children: &mut [PosInfo<'_, N>],
        level: usize,
        rng: &mut R,
        scratch: &mut Scratch,
    ) -> Result<f64, LayoutError> {
        scratch.radii.clear();
        scratch.radii.extend(children.iter().map(|c| c.radius));
        place_in_sectors(&scratch.radii, &self.settings, &mut scratch.positions);

        scratch.disks.clear();
        scratch.disks.extend(
            scratch
                .positions
                .iter()
                .zip(&scratch.radii)
                .map(|(pos, &radius)| Circle::new(pos.to_point(), radius)),
        );
        let disk = smallest_enclosing_disk(&scratch.disks, rng)
            .map_err(|source| LayoutError::DegenerateGeometry { level, source })?;

        let offset = disk.center.to_vec2();
        for (child, pos) in children.iter_mut().zip(&scratch.positions) {
            child.rel_pos = *pos - offset;
        }
        Ok(disk.radius)
    }

    fn clamp(
        &self,
        node: PosId,
        level: usize,
        radius: f64,
        warnings: &mut Vec<LayoutWarning>,
    ) -> f64 {
        let max_radius = self.settings.max_radius;
        if !self.settings.is_radius_limited() || radius <= max_radius {
            return radius;
        }
        tracing::warn!(
            node = node.index(),
            depth = level,
            radius,
            max_radius,
            "maximum radius reached, clamping"
        );
        warnings.push(LayoutWarning::RadiusLimitReached {
            node,
            level,
            radius,
            max_radius,
        });
        max_radius
    }
}
