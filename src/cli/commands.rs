use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{build, Traversal, TreeArena};
use crate::tree_traits::TreeNodeConvert;

/// Visited values of one walk, tagged with its strategy.
pub type WalkReport = (Traversal, Vec<i32>);

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let parallel = cli.parallel || settings.parallel;
    let show_tree = cli.tree || settings.show_tree;
    debug!(parallel, show_tree, "effective options");

    // a partially built store never reaches the walks
    let tree = build()?;
    info!(nodes = tree.len(), "tree ready");

    output::report(&render_report(&run_all(&tree, parallel)));

    if show_tree {
        output::header("tree");
        output::info(&tree.to_tree_string());
    }
    Ok(())
}

/// Runs every strategy against `tree`, in report order.
///
/// With `parallel` the walks share the tree across the rayon pool; the
/// result order does not depend on which walk finishes first.
#[instrument(level = "debug", skip(tree))]
pub fn run_all(tree: &TreeArena<i32>, parallel: bool) -> Vec<WalkReport> {
    let walk = |traversal: &Traversal| (*traversal, traversal.values(tree.root()));
    if parallel {
        Traversal::ALL.par_iter().map(walk).collect()
    } else {
        Traversal::ALL.iter().map(walk).collect()
    }
}

/// `<label>: <v1> <v2> ...`
pub fn format_line(traversal: Traversal, values: &[i32]) -> String {
    format!("{}: {}", traversal.label(), values.iter().join(" "))
}

/// All report lines, each newline-terminated.
pub fn render_report(report: &[WalkReport]) -> String {
    report
        .iter()
        .map(|(traversal, values)| format_line(*traversal, values) + "\n")
        .collect()
}
