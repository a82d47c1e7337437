//! The printed report: four labelled lines in fixed order.

use rstest::{fixture, rstest};

use treewalk::cli::commands::{render_report, run_all};
use treewalk::domain::{build, Traversal, TreeArena};

const EXPECTED_REPORT: &str = "\
pre-order: 1 2 4 7 5 8 9 3 6
in-order: 7 4 2 8 5 9 1 6 3
post-order: 7 4 8 9 5 2 6 3 1
level-order: 1 2 3 4 5 6 7 8 9
";

#[fixture]
fn classic() -> TreeArena<i32> {
    build().expect("demonstration tree builds")
}

#[rstest]
fn given_classic_tree_when_reporting_then_matches_expected_lines(
    classic: TreeArena<i32>,
    #[values(false, true)] parallel: bool,
) {
    let report = run_all(&classic, parallel);
    assert_eq!(render_report(&report), EXPECTED_REPORT);
}

#[rstest]
fn given_parallel_run_then_same_order_and_values_as_sequential(classic: TreeArena<i32>) {
    let sequential = run_all(&classic, false);
    let parallel = run_all(&classic, true);

    assert_eq!(sequential, parallel);
    let order: Vec<Traversal> = parallel.iter().map(|(t, _)| *t).collect();
    assert_eq!(order, Traversal::ALL.to_vec());
}

#[test]
fn given_empty_report_then_renders_nothing() {
    assert_eq!(render_report(&[]), "");
}
