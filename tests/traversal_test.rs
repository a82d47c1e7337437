//! Walk orders over the demonstration tree and the boundary trees.

use rstest::{fixture, rstest};

use treewalk::domain::{
    build, inorder, levelorder, postorder, preorder, InOrderIter, LevelOrderIter, NodeRef,
    PostOrderIter, PreOrderIter, Side, Traversal, TreeArena, TreeBuilder,
};
use treewalk::util::testing::init_test_setup;

#[fixture]
fn classic() -> TreeArena<i32> {
    init_test_setup();
    build().expect("demonstration tree builds")
}

fn single_node() -> TreeArena<i32> {
    let mut builder = TreeBuilder::with_capacity(1);
    builder.insert_node(42).unwrap();
    builder.build().unwrap()
}

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

// ============================================================
// Expected orders
// ============================================================

#[rstest]
#[case::preorder(Traversal::Preorder, vec![1, 2, 4, 7, 5, 8, 9, 3, 6])]
#[case::inorder(Traversal::Inorder, vec![7, 4, 2, 8, 5, 9, 1, 6, 3])]
#[case::postorder(Traversal::Postorder, vec![7, 4, 8, 9, 5, 2, 6, 3, 1])]
#[case::levelorder(Traversal::Levelorder, vec![1, 2, 3, 4, 5, 6, 7, 8, 9])]
fn given_classic_tree_when_walking_then_visits_in_expected_order(
    classic: TreeArena<i32>,
    #[case] traversal: Traversal,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(traversal.values(classic.root()), expected);
}

#[rstest]
fn given_classic_tree_when_calling_free_functions_then_same_as_enum(classic: TreeArena<i32>) {
    let root = classic.root();
    assert_eq!(preorder(root), Traversal::Preorder.visit(root));
    assert_eq!(inorder(root), Traversal::Inorder.visit(root));
    assert_eq!(postorder(root), Traversal::Postorder.visit(root));
    assert_eq!(levelorder(root), Traversal::Levelorder.visit(root));
}

// ============================================================
// Properties
// ============================================================

#[rstest]
fn given_classic_tree_then_every_walk_is_a_permutation_of_one_to_nine(
    classic: TreeArena<i32>,
    #[values(Traversal::Preorder, Traversal::Inorder, Traversal::Postorder, Traversal::Levelorder)]
    traversal: Traversal,
) {
    let values = traversal.values(classic.root());
    assert_eq!(values.len(), classic.len());
    assert_eq!(sorted(values), (1..=9).collect::<Vec<_>>());
}

#[rstest]
fn given_classic_tree_then_every_node_is_visited_exactly_once_by_identity(
    classic: TreeArena<i32>,
    #[values(Traversal::Preorder, Traversal::Inorder, Traversal::Postorder, Traversal::Levelorder)]
    traversal: Traversal,
) {
    let visited = traversal.visit(classic.root());
    for (i, a) in visited.iter().enumerate() {
        for b in &visited[i + 1..] {
            assert_ne!(a, b, "node visited twice");
        }
    }
}

#[rstest]
fn given_unmodified_tree_when_walking_twice_then_identical(
    classic: TreeArena<i32>,
    #[values(Traversal::Preorder, Traversal::Inorder, Traversal::Postorder, Traversal::Levelorder)]
    traversal: Traversal,
) {
    let first = traversal.visit(classic.root());
    let second = traversal.visit(classic.root());
    assert_eq!(first, second);
}

#[rstest]
fn given_classic_tree_then_iterators_agree_with_recursive_walks(classic: TreeArena<i32>) {
    let root = classic.root();
    assert_eq!(PreOrderIter::new(root).collect::<Vec<_>>(), preorder(root));
    assert_eq!(InOrderIter::new(root).collect::<Vec<_>>(), inorder(root));
    assert_eq!(PostOrderIter::new(root).collect::<Vec<_>>(), postorder(root));
    assert_eq!(LevelOrderIter::new(root).collect::<Vec<_>>(), levelorder(root));
}

// ============================================================
// Boundaries
// ============================================================

#[rstest]
fn given_absent_start_then_every_walk_is_empty(
    #[values(Traversal::Preorder, Traversal::Inorder, Traversal::Postorder, Traversal::Levelorder)]
    traversal: Traversal,
) {
    let none: Option<NodeRef<'_, i32>> = None;
    assert!(traversal.visit(none).is_empty());
}

#[rstest]
fn given_single_node_then_every_walk_yields_that_node(
    #[values(Traversal::Preorder, Traversal::Inorder, Traversal::Postorder, Traversal::Levelorder)]
    traversal: Traversal,
) {
    let tree = single_node();
    assert_eq!(traversal.values(tree.root()), vec![42]);
}

fn right_chain() -> TreeArena<i32> {
    let mut builder = TreeBuilder::with_capacity(3);
    let a = builder.insert_node(1).unwrap();
    let b = builder.insert_node(2).unwrap();
    let c = builder.insert_node(3).unwrap();
    builder.link(a, Side::Right, b).unwrap();
    builder.link(b, Side::Right, c).unwrap();
    builder.build().unwrap()
}

#[rstest]
#[case::preorder(Traversal::Preorder, vec![1, 2, 3])]
#[case::inorder(Traversal::Inorder, vec![1, 2, 3])]
#[case::postorder(Traversal::Postorder, vec![3, 2, 1])]
#[case::levelorder(Traversal::Levelorder, vec![1, 2, 3])]
fn given_right_only_chain_when_walking_then_absent_left_contributes_nothing(
    #[case] traversal: Traversal,
    #[case] expected: Vec<i32>,
) {
    let tree = right_chain();
    assert_eq!(traversal.values(tree.root()), expected);
}

#[test]
fn given_right_only_chain_then_iterators_agree_with_recursive_walks() {
    let tree = right_chain();
    let root = tree.root();
    assert_eq!(PreOrderIter::new(root).collect::<Vec<_>>(), preorder(root));
    assert_eq!(InOrderIter::new(root).collect::<Vec<_>>(), inorder(root));
    assert_eq!(PostOrderIter::new(root).collect::<Vec<_>>(), postorder(root));
    assert_eq!(LevelOrderIter::new(root).collect::<Vec<_>>(), levelorder(root));
}

#[test]
fn given_left_only_chain_then_depth_first_orders_differ_as_expected() {
    let mut builder = TreeBuilder::with_capacity(3);
    let a = builder.insert_node(1).unwrap();
    let b = builder.insert_node(2).unwrap();
    let c = builder.insert_node(3).unwrap();
    builder.link(a, Side::Left, b).unwrap();
    builder.link(b, Side::Left, c).unwrap();
    let tree = builder.build().unwrap();

    assert_eq!(Traversal::Preorder.values(tree.root()), vec![1, 2, 3]);
    assert_eq!(Traversal::Inorder.values(tree.root()), vec![3, 2, 1]);
    assert_eq!(Traversal::Postorder.values(tree.root()), vec![3, 2, 1]);
    assert_eq!(Traversal::Levelorder.values(tree.root()), vec![1, 2, 3]);
}
