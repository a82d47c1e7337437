//! The four classic binary-tree walks.
//!
//! Each walk borrows the tree, starts at an optional node and returns the
//! visited nodes in order. An absent start yields an empty walk. Callers that
//! only need payloads project them with [`NodeRef::value`] or use
//! [`Traversal::values`].

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, instrument};

use crate::domain::arena::NodeRef;

/// Visitation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    Preorder,
    Inorder,
    Postorder,
    Levelorder,
}

impl Traversal {
    /// All strategies in report order.
    pub const ALL: [Traversal; 4] = [
        Traversal::Preorder,
        Traversal::Inorder,
        Traversal::Postorder,
        Traversal::Levelorder,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Traversal::Preorder => "pre-order",
            Traversal::Inorder => "in-order",
            Traversal::Postorder => "post-order",
            Traversal::Levelorder => "level-order",
        }
    }

    pub fn visit<'a, T>(self, start: Option<NodeRef<'a, T>>) -> Vec<NodeRef<'a, T>> {
        match self {
            Traversal::Preorder => preorder(start),
            Traversal::Inorder => inorder(start),
            Traversal::Postorder => postorder(start),
            Traversal::Levelorder => levelorder(start),
        }
    }

    pub fn values<T: Copy>(self, start: Option<NodeRef<'_, T>>) -> Vec<T> {
        self.visit(start).into_iter().map(|node| *node.value()).collect()
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Node, then left subtree, then right subtree.
#[instrument(level = "debug", skip_all)]
pub fn preorder<'a, T>(start: Option<NodeRef<'a, T>>) -> Vec<NodeRef<'a, T>> {
    let mut visited = Vec::new();
    collect_preorder(start, &mut visited);
    debug!(visited = visited.len(), "preorder done");
    visited
}

fn collect_preorder<'a, T>(node: Option<NodeRef<'a, T>>, visited: &mut Vec<NodeRef<'a, T>>) {
    if let Some(node) = node {
        visited.push(node);
        collect_preorder(node.left(), visited);
        collect_preorder(node.right(), visited);
    }
}

/// Left subtree, then node, then right subtree.
#[instrument(level = "debug", skip_all)]
pub fn inorder<'a, T>(start: Option<NodeRef<'a, T>>) -> Vec<NodeRef<'a, T>> {
    let mut visited = Vec::new();
    collect_inorder(start, &mut visited);
    debug!(visited = visited.len(), "inorder done");
    visited
}

fn collect_inorder<'a, T>(node: Option<NodeRef<'a, T>>, visited: &mut Vec<NodeRef<'a, T>>) {
    if let Some(node) = node {
        collect_inorder(node.left(), visited);
        visited.push(node);
        collect_inorder(node.right(), visited);
    }
}

/// Left subtree, then right subtree, then node.
#[instrument(level = "debug", skip_all)]
pub fn postorder<'a, T>(start: Option<NodeRef<'a, T>>) -> Vec<NodeRef<'a, T>> {
    let mut visited = Vec::new();
    collect_postorder(start, &mut visited);
    debug!(visited = visited.len(), "postorder done");
    visited
}

fn collect_postorder<'a, T>(node: Option<NodeRef<'a, T>>, visited: &mut Vec<NodeRef<'a, T>>) {
    if let Some(node) = node {
        collect_postorder(node.left(), visited);
        collect_postorder(node.right(), visited);
        visited.push(node);
    }
}

/// Breadth-first: top row to bottom row, left to right within a row.
#[instrument(level = "debug", skip_all)]
pub fn levelorder<'a, T>(start: Option<NodeRef<'a, T>>) -> Vec<NodeRef<'a, T>> {
    let mut visited = Vec::new();
    let mut queue = VecDeque::new();
    queue.extend(start);

    while let Some(node) = queue.pop_front() {
        visited.push(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }

    debug!(visited = visited.len(), "levelorder done");
    visited
}
