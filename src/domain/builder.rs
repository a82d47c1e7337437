//! Tree construction: the only way to obtain a [`TreeArena`].

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{Side, TreeArena};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::traversal::levelorder;

/// Number of nodes in the demonstration tree.
pub const CLASSIC_NODE_COUNT: usize = 9;

/// Edges of the demonstration tree as `(parent, side, child)` allocation
/// slots. Slot `i` carries value `i + 1`.
///
/// ```text
///           1
///         /   \
///        2     3
///       / \   /
///      4   5 6
///     /   / \
///    7   8   9
/// ```
pub const CLASSIC_EDGES: [(usize, Side, usize); 8] = [
    (0, Side::Left, 1),
    (0, Side::Right, 2),
    (1, Side::Left, 3),
    (1, Side::Right, 4),
    (2, Side::Left, 5),
    (3, Side::Left, 6),
    (4, Side::Left, 7),
    (4, Side::Right, 8),
];

/// Wires nodes into a binary tree with a fixed node budget.
///
/// The builder preallocates room for `capacity` nodes; running out of room is
/// reported as [`DomainError::CapacityExhausted`] and leaves no usable tree.
#[derive(Debug)]
pub struct TreeBuilder<T> {
    tree: TreeArena<T>,
}

impl<T> TreeBuilder<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: TreeArena::with_capacity(capacity),
        }
    }

    /// Adds a detached node; the first one added is the root.
    pub fn insert_node(&mut self, data: T) -> DomainResult<Index> {
        self.tree.insert_node(data)
    }

    pub fn link(&mut self, parent: Index, side: Side, child: Index) -> DomainResult<()> {
        self.tree.link(parent, side, child)
    }

    /// Seals the tree. Every stored node must hang below the root.
    #[instrument(level = "debug", skip(self))]
    pub fn build(self) -> DomainResult<TreeArena<T>> {
        if self.tree.is_empty() {
            return Err(DomainError::EmptyTree);
        }
        let reachable = levelorder(self.tree.root()).len();
        let unreachable = self.tree.len() - reachable;
        if unreachable > 0 {
            return Err(DomainError::Unreachable(unreachable));
        }
        debug!(nodes = self.tree.len(), depth = self.tree.depth(), "tree built");
        Ok(self.tree)
    }
}

/// Builds the demonstration tree with payloads produced by `make`, which is
/// called once per node with the values 1..=9 in allocation order.
#[instrument(level = "debug", skip_all)]
pub fn build_with<T>(mut make: impl FnMut(i32) -> T) -> DomainResult<TreeArena<T>> {
    let mut builder = TreeBuilder::with_capacity(CLASSIC_NODE_COUNT);
    let mut slots = Vec::with_capacity(CLASSIC_NODE_COUNT);
    for value in 1..=CLASSIC_NODE_COUNT as i32 {
        slots.push(builder.insert_node(make(value))?);
    }
    for &(parent, side, child) in CLASSIC_EDGES.iter() {
        builder.link(slots[parent], side, slots[child])?;
    }
    builder.build()
}

/// Builds the demonstration tree with values 1..=9.
pub fn build() -> DomainResult<TreeArena<i32>> {
    build_with(|value| value)
}
