// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned-tree output: one [`PosInfo`] per input node, stored breadth-first.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Vec2};

use crate::error::LayoutWarning;
use crate::node::TreeNode;

/// Identifier of a node in a [`ConeTree`].
///
/// Identifiers are indices into the breadth-first node order: the root is `0`, the
/// children of a node are numbered consecutively, and levels are contiguous.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PosId(u32);

impl PosId {
    /// The root of every [`ConeTree`].
    pub const ROOT: Self = Self(0);

    #[allow(
        clippy::cast_possible_truncation,
        reason = "PosId uses 32-bit indices by design."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Position of this node in breadth-first order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Layout result for a single input node.
#[derive(Debug)]
pub struct PosInfo<'n, N> {
    /// The input node this record describes.
    pub node: &'n N,
    /// Depth below the root; the root is level `0`.
    pub level: usize,
    /// Radius of the disk around this node that holds its whole subtree.
    pub radius: f64,
    /// Position relative to the parent's position. Zero for the root.
    pub rel_pos: Vec2,
    parent: Option<PosId>,
    first_child: usize,
    child_count: usize,
}

impl<N> Clone for PosInfo<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for PosInfo<'_, N> {}

impl<'n, N> PosInfo<'n, N> {
    pub(crate) fn new(node: &'n N, level: usize, parent: Option<PosId>) -> Self {
        Self {
            node,
            level,
            radius: 0.0,
            rel_pos: Vec2::ZERO,
            parent,
            first_child: 0,
            child_count: 0,
        }
    }

    /// The parent of this node, `None` for the root.
    pub fn parent(&self) -> Option<PosId> {
        self.parent
    }

    /// Number of laid out children.
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Whether this node has no laid out children.
    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }

    /// This node's disk in its parent's frame.
    pub fn disk(&self) -> Circle {
        Circle::new(self.rel_pos.to_point(), self.radius)
    }

    pub(crate) fn children_start(&self) -> usize {
        self.first_child
    }
}

/// A laid out tree.
///
/// Nodes are stored breadth-first and addressed by [`PosId`]. Positions are relative to
/// the parent; use [`ConeTree::absolute_positions`] to accumulate them.
#[derive(Debug)]
pub struct ConeTree<'n, N> {
    pub(crate) nodes: Vec<PosInfo<'n, N>>,
    pub(crate) tree_levels: usize,
    pub(crate) warnings: Vec<LayoutWarning>,
}

impl<'n, N> ConeTree<'n, N> {
    /// The root record.
    pub fn root(&self) -> &PosInfo<'n, N> {
        &self.nodes[0]
    }

    /// Look up a node.
    pub fn get(&self, id: PosId) -> Option<&PosInfo<'n, N>> {
        self.nodes.get(id.index())
    }

    /// Children of `id` in input order. Empty for leaves and unknown ids.
    pub fn children(&self, id: PosId) -> &[PosInfo<'n, N>] {
        match self.get(id) {
            Some(info) => &self.nodes[info.first_child..info.first_child + info.child_count],
            None => &[],
        }
    }

    /// Identifiers of the children of `id` in input order.
    pub fn child_ids(&self, id: PosId) -> impl Iterator<Item = PosId> + use<'n, N> {
        let range = match self.get(id) {
            Some(info) => info.first_child..info.first_child + info.child_count,
            None => 0..0,
        };
        range.map(PosId::new)
    }

    /// The parent of `id`, `None` for the root and unknown ids.
    pub fn parent(&self, id: PosId) -> Option<PosId> {
        self.get(id).and_then(PosInfo::parent)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a layout holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in breadth-first order.
    pub fn iter(&self) -> impl Iterator<Item = (PosId, &PosInfo<'n, N>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, info)| (PosId::new(i), info))
    }

    /// Nodes on one level, in breadth-first order.
    pub fn level(&self, level: usize) -> impl Iterator<Item = (PosId, &PosInfo<'n, N>)> + '_ {
        self.iter()
            .skip_while(move |(_, info)| info.level < level)
            .take_while(move |(_, info)| info.level == level)
    }

    /// Deepest level reached; `0` when the root is a leaf.
    pub fn tree_levels(&self) -> usize {
        self.tree_levels
    }

    /// Conditions reported while laying out, such as clamped radii.
    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// Position of `id` relative to the root, summing offsets along the path.
    pub fn absolute_position(&self, id: PosId) -> Option<Point> {
        let mut info = self.get(id)?;
        let mut pos = Point::ORIGIN + info.rel_pos;
        while let Some(parent) = info.parent {
            info = &self.nodes[parent.index()];
            pos += info.rel_pos;
        }
        Some(pos)
    }

    /// Positions of all nodes relative to the root, indexed by [`PosId::index`].
    pub fn absolute_positions(&self) -> Vec<Point> {
        let mut out = vec![Point::ORIGIN; self.nodes.len()];
        for (i, info) in self.nodes.iter().enumerate() {
            let base = info.parent.map_or(Point::ORIGIN, |p| out[p.index()]);
            out[i] = base + info.rel_pos;
        }
        out
    }
}

/// Flatten the tree below `root` breadth-first.
///
/// Children of a node reporting [`TreeNode::is_leaf`] are not visited.
pub(crate) fn collect_nodes<N: TreeNode>(root: &N) -> Vec<PosInfo<'_, N>> {
    let mut nodes = vec![PosInfo::new(root, 0, None)];
    let mut next = 0;
    while next < nodes.len() {
        let node = nodes[next].node;
        let level = nodes[next].level;
        let first = nodes.len();
        if !node.is_leaf() {
            let parent = Some(PosId::new(next));
            nodes.extend(
                node.children()
                    .map(|child| PosInfo::new(child, level + 1, parent)),
            );
        }
        nodes[next].first_child = first;
        nodes[next].child_count = nodes.len() - first;
        next += 1;
    }
    nodes
}
