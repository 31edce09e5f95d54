// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input side of a layout: any hierarchy that can list its children.

/// A node of a hierarchy to lay out.
///
/// Implement this for your own tree type. The layout only reads nodes; it never
/// mutates or clones them, and the returned [`ConeTree`](crate::ConeTree) borrows them.
///
/// The tree must be finite and acyclic. Cycles are not detected.
///
/// ```rust
/// use understory_cone_tree::TreeNode;
///
/// struct Folder {
///     entries: Vec<Folder>,
/// }
///
/// impl TreeNode for Folder {
///     fn children(&self) -> impl Iterator<Item = &Self> {
///         self.entries.iter()
///     }
/// }
///
/// let empty = Folder { entries: vec![] };
/// assert!(empty.is_leaf());
/// ```
pub trait TreeNode {
    /// Children in the order they should be placed around this node.
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Whether this node is laid out as a leaf.
    ///
    /// Defaults to having no children. Returning `true` for a node with children hides
    /// them from the layout. A node returning `false` without yielding any children is
    /// still laid out as a leaf.
    fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }
}
