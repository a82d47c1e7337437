//! Domain layer: the node store and the walks over it
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod iter;
pub mod traversal;

pub use generational_arena::Index;

pub use arena::{NodeRef, Side, TreeArena, TreeNode};
pub use builder::{build, build_with, TreeBuilder, CLASSIC_EDGES, CLASSIC_NODE_COUNT};
pub use error::{DomainError, DomainResult};
pub use iter::{InOrderIter, LevelOrderIter, PostOrderIter, PreOrderIter};
pub use traversal::{inorder, levelorder, postorder, preorder, Traversal};
