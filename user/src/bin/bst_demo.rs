use std::{fmt::Display, io::Write};

use anyhow::Result;
use clap::Parser;
use ds::{Node, OrderedTree};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Builds an ordered tree from the given values and looks values up in it.
///
/// Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Value the tree is built from.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    root: i64,

    /// Values inserted after the root, in order. Passing the flag with no
    /// values leaves the tree with its root only.
    #[arg(
        long,
        num_args = 0..,
        allow_negative_numbers = true,
        default_values_t = [6, 13, 3, 9, 11, 16, 7],
    )]
    insert: Vec<i64>,

    /// Values to search for once every insertion is done.
    #[arg(
        long,
        num_args = 0..,
        allow_negative_numbers = true,
        default_values_t = [10, 7, 13, -1],
    )]
    query: Vec<i64>,
}

fn build(root: i64, insert: &[i64]) -> OrderedTree<i64> {
    let mut tree = OrderedTree::new(root);
    for &x in insert {
        if !tree.insert(x) {
            debug!(value = x, "duplicate ignored");
        }
    }
    info!(len = tree.len(), height = tree.height(), "tree built");
    tree
}

fn describe(tree: &OrderedTree<i64>, query: i64) -> String {
    fn child<T: Display>(node: Option<&Node<T>>) -> String {
        node.map_or_else(|| "-".to_owned(), |node| node.value().to_string())
    }
    match tree.search(&query) {
        Some(node) => format!(
            "search({query}): found {} (left: {}, right: {})",
            node.value(),
            child(node.left()),
            child(node.right()),
        ),
        None => format!("search({query}): not found"),
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let tree = build(cli.root, &cli.insert);
    let mut out = std::io::stdout().lock();
    writeln!(out, "{tree:?}")?;
    for &q in &cli.query {
        writeln!(out, "{}", describe(&tree, q))?;
    }
    Ok(())
}
