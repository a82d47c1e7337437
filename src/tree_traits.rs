use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeRef, Side, TreeArena};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

/// Children are tagged `L`/`R` so a lone right child is not mistaken for a
/// left one.
impl<T: Display> TreeNodeConvert for TreeArena<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree<T: Display>(node: NodeRef<'_, T>, parent_tree: &mut Tree<String>) {
            for side in [Side::Left, Side::Right] {
                if let Some(child) = node.child(side) {
                    let tag = match side {
                        Side::Left => "L",
                        Side::Right => "R",
                    };
                    let mut child_tree = Tree::new(format!("{} {}", tag, child.value()));
                    build_tree(child, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        match self.root() {
            Some(root) => {
                let mut tree = Tree::new(root.value().to_string());
                build_tree(root, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
