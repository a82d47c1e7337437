//! CLI argument definitions using clap

use clap::{ArgAction, Parser};

/// Prints the preorder, inorder, postorder and level-order walks of a fixed nine-node binary tree
#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log to stderr: -d info, -d -d debug, -d -d -d trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Run the four walks concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Print the tree diagram after the report
    #[arg(long)]
    pub tree: bool,

    /// Print author and version, then exit
    #[arg(long)]
    pub info: bool,
}
