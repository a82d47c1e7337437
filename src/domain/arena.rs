use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Which child slot of a node a link occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Tree node in the arena-based binary tree.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Payload carried by this node
    pub data: T,
    /// Index of parent node in the arena, None for the root and for detached nodes
    pub parent: Option<Index>,
    /// Index of the left child, None if absent
    pub left: Option<Index>,
    /// Index of the right child, None if absent
    pub right: Option<Index>,
}

impl<T> TreeNode<T> {
    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree: the single owner of every node.
///
/// Child links are plain arena indices, so they describe structure without
/// owning anything. All nodes are dropped together with the arena.
///
/// The mutating methods are crate-private; outside code wires a tree through
/// [`TreeBuilder`](crate::domain::TreeBuilder) and only ever sees the finished,
/// read-only store.
#[derive(Debug)]
pub struct TreeArena<T> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<T>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
    /// Node budget; the arena itself may reserve more slots than this
    capacity: usize,
}

/// Slot number of an arena index, used to name nodes in errors and logs.
pub(crate) fn slot(idx: Index) -> usize {
    idx.into_raw_parts().0
}

impl<T> TreeArena<T> {
    /// Creates an arena that holds at most `capacity` nodes and never grows.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            capacity,
        }
    }

    /// Stores a detached node. The first node stored becomes the root.
    #[instrument(level = "trace", skip_all)]
    pub(crate) fn insert_node(&mut self, data: T) -> DomainResult<Index> {
        let capacity = self.capacity;
        if self.arena.len() >= capacity {
            return Err(DomainError::CapacityExhausted { capacity });
        }
        let node = TreeNode {
            data,
            parent: None,
            left: None,
            right: None,
        };
        let node_idx = self
            .arena
            .try_insert(node)
            .map_err(|_| DomainError::CapacityExhausted { capacity })?;

        if self.root.is_none() {
            self.root = Some(node_idx);
        }
        trace!(slot = slot(node_idx), "node stored");

        Ok(node_idx)
    }

    /// Makes `child` the `side` child of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn link(&mut self, parent: Index, side: Side, child: Index) -> DomainResult<()> {
        let parent_node = self
            .arena
            .get(parent)
            .ok_or(DomainError::NodeNotFound(slot(parent)))?;
        let child_node = self
            .arena
            .get(child)
            .ok_or(DomainError::NodeNotFound(slot(child)))?;

        if self.root == Some(child) {
            return Err(DomainError::RootAsChild(slot(child)));
        }
        if child_node.parent.is_some() {
            return Err(DomainError::AlreadyAttached(slot(child)));
        }
        if parent_node.child(side).is_some() {
            return Err(DomainError::SlotOccupied {
                parent: slot(parent),
                side,
            });
        }

        // parent chains are acyclic, so walking up from `parent` terminates
        let mut ancestor = Some(parent);
        while let Some(idx) = ancestor {
            if idx == child {
                return Err(DomainError::CycleDetected {
                    parent: slot(parent),
                    child: slot(child),
                });
            }
            ancestor = self.arena.get(idx).and_then(|node| node.parent);
        }

        if let Some(parent_node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => parent_node.left = Some(child),
                Side::Right => parent_node.right = Some(child),
            }
        }
        if let Some(child_node) = self.arena.get_mut(child) {
            child_node.parent = Some(parent);
        }
        Ok(())
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    /// Borrowed handle to the node at `idx`, if it exists.
    pub fn node(&self, idx: Index) -> Option<NodeRef<'_, T>> {
        self.arena.get(idx).map(|_| NodeRef { arena: self, index: idx })
    }

    /// Borrowed handle to the root, None for empty trees.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.and_then(|idx| self.node(idx))
    }

    /// Maximum number of nodes this store accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path, 0 for empty trees.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        fn height<T>(node: Option<NodeRef<'_, T>>) -> usize {
            node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
        }
        height(self.root())
    }

    /// Payloads of all leaves, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        self.collect_leaves(self.root(), &mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, node: Option<NodeRef<'a, T>>, leaves: &mut Vec<&'a T>) {
        if let Some(node) = node {
            if node.is_leaf() {
                leaves.push(node.value());
            } else {
                self.collect_leaves(node.left(), leaves);
                self.collect_leaves(node.right(), leaves);
            }
        }
    }
}

/// Borrowed, non-owning handle to one node of a [`TreeArena`].
///
/// Copying a `NodeRef` copies the handle, never the node. Two handles are
/// equal only if they point at the same node of the same arena, regardless
/// of payload equality.
pub struct NodeRef<'a, T> {
    arena: &'a TreeArena<T>,
    index: Index,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    fn tree_node(self) -> &'a TreeNode<T> {
        // handles are only created for stored indices, and the arena cannot
        // lose nodes while it is borrowed
        &self.arena.arena[self.index]
    }

    pub fn index(self) -> Index {
        self.index
    }

    pub fn value(self) -> &'a T {
        &self.tree_node().data
    }

    pub fn child(self, side: Side) -> Option<NodeRef<'a, T>> {
        self.tree_node()
            .child(side)
            .and_then(|idx| self.arena.node(idx))
    }

    pub fn left(self) -> Option<NodeRef<'a, T>> {
        self.child(Side::Left)
    }

    pub fn right(self) -> Option<NodeRef<'a, T>> {
        self.child(Side::Right)
    }

    pub fn is_leaf(self) -> bool {
        self.tree_node().is_leaf()
    }
}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.index == other.index
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("slot", &slot(self.index))
            .field("value", self.value())
            .finish()
    }
}
