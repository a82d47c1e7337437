//! Non-recursive walks.
//!
//! Same visitation orders as [`crate::domain::traversal`], driven by an
//! explicit stack (depth-first) or queue (breadth-first) so that deep trees
//! do not grow the call stack.

use std::collections::VecDeque;

use tracing::instrument;

use crate::domain::arena::{NodeRef, TreeArena};

impl<T> TreeArena<T> {
    #[instrument(level = "trace", skip(self))]
    pub fn iter_preorder(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self.root())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_inorder(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self.root())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self.root())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_levelorder(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(self.root())
    }
}

pub struct PreOrderIter<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub fn new(start: Option<NodeRef<'a, T>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right first, so left is processed first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

pub struct InOrderIter<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
    current: Option<NodeRef<'a, T>>,
}

impl<'a, T> InOrderIter<'a, T> {
    pub fn new(start: Option<NodeRef<'a, T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: start,
        }
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }
        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node)
    }
}

pub struct PostOrderIter<'a, T> {
    stack: Vec<(NodeRef<'a, T>, bool)>, // (node, children_visited)
}

impl<'a, T> PostOrderIter<'a, T> {
    pub fn new(start: Option<NodeRef<'a, T>>) -> Self {
        Self {
            stack: start.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, children_visited)) = self.stack.pop() {
            if children_visited || node.is_leaf() {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }
}

pub struct LevelOrderIter<'a, T> {
    queue: VecDeque<NodeRef<'a, T>>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    pub fn new(start: Option<NodeRef<'a, T>>) -> Self {
        Self {
            queue: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}
