//! Arena-backed binary tree with the four classic walks.
//!
//! ```
//! use treewalk::domain::{build, Traversal};
//!
//! let tree = build().unwrap();
//! assert_eq!(Traversal::Inorder.values(tree.root()), vec![7, 4, 2, 8, 5, 9, 1, 6, 3]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{build, NodeRef, Traversal, TreeArena};
