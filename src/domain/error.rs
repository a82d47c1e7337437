//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::Side;

/// Errors raised while wiring a tree.
///
/// Once a [`TreeArena`](crate::domain::TreeArena) exists none of these can
/// occur anymore: the store is read-only and every traversal is total.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("node store exhausted: capacity of {capacity} nodes reached")]
    CapacityExhausted { capacity: usize },

    #[error("node not found: {0}")]
    NodeNotFound(usize),

    #[error("{side} child of node {parent} is already set")]
    SlotOccupied { parent: usize, side: Side },

    #[error("node {0} is already attached to a parent")]
    AlreadyAttached(usize),

    #[error("root node {0} cannot become a child")]
    RootAsChild(usize),

    #[error("linking node {child} below node {parent} would create a cycle")]
    CycleDetected { parent: usize, child: usize },

    #[error("tree has no nodes")]
    EmptyTree,

    #[error("{0} node(s) not reachable from the root")]
    Unreachable(usize),
}

pub type DomainResult<T> = Result<T, DomainError>;
