//! Implementation of `maxpath longest <file>`.
//!
//! Parses a graph JSON file, builds the directed graph, runs the exhaustive
//! longest-simple-path search, and writes the winning path and the max cut
//! to stdout.
//!
//! Flags:
//! - `--max-steps <n>`: optional step budget; a truncated search prints the
//!   partial result and exits 1.
//!
//! Output (human mode): a `Graph <name> (E edges):` echo of the whole edge
//! universe in document order, then a `Longest path (N edges):` section with
//! one `src -> tgt` line per edge in path order, then a `Max cut (M edges):`
//! section likewise.
//! Output (JSON mode): a single JSON object
//! `{"name", "longest_path": [...], "max_cut": [...], "complete", "steps"}`
//! where each edge is `{"source": ..., "target": ...}`.
//!
//! Exit codes: 0 = search ran to exhaustion, 1 = step budget truncated the
//! search, 2 = decode/build failure.
use maxpath_core::{
    EdgeKey, GraphFile, OrderedSet, PathGraph, SearchLimits, build_graph, find_longest_path,
};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `longest` command.
///
/// Builds the graph from the pre-parsed `file`, searches with the given
/// step budget (`None` = unlimited), and prints both edge collections.
///
/// # Errors
///
/// - [`CliError::GraphBuildError`] (exit code 2) if the document does not
///   describe a well-formed graph.
/// - [`CliError::SearchTruncated`] (exit code 1) if the budget expired; the
///   partial result is printed before the error is returned.
pub fn run(
    file: &GraphFile,
    max_steps: Option<u64>,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = build_graph(file).map_err(|e| CliError::GraphBuildError {
        detail: e.to_string(),
    })?;

    let outcome = find_longest_path(&graph, &SearchLimits { max_steps });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, file.name.as_deref(), &graph, &outcome),
        OutputFormat::Json => print_json(&mut out, file.name.as_deref(), &graph, &outcome),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })?;

    if !outcome.complete {
        return Err(CliError::SearchTruncated {
            steps: outcome.steps,
        });
    }

    Ok(())
}

/// Renders an edge set as `(source_id, target_id)` string pairs in set order.
fn edge_pairs(graph: &PathGraph, set: &OrderedSet<EdgeKey>) -> Vec<(String, String)> {
    set.iter()
        .map(|key| {
            (
                graph.node_id(key.source).unwrap_or("?").to_owned(),
                graph.node_id(key.target).unwrap_or("?").to_owned(),
            )
        })
        .collect()
}

/// Writes the human-readable report: an echo of the whole graph, then one
/// `src -> tgt` line per edge under each result section header.
fn print_human<W: std::io::Write>(
    w: &mut W,
    name: Option<&str>,
    graph: &PathGraph,
    outcome: &maxpath_core::SearchOutcome,
) -> std::io::Result<()> {
    match name {
        Some(name) => writeln!(w, "Graph {name} ({} edges):", graph.edge_keys().len())?,
        None => writeln!(w, "Graph ({} edges):", graph.edge_keys().len())?,
    }
    for key in graph.edge_keys() {
        writeln!(
            w,
            "{} -> {}",
            graph.node_id(key.source).unwrap_or("?"),
            graph.node_id(key.target).unwrap_or("?"),
        )?;
    }
    writeln!(w)?;

    writeln!(w, "Longest path ({} edges):", outcome.longest_path.len())?;
    for (source, target) in edge_pairs(graph, &outcome.longest_path) {
        writeln!(w, "{source} -> {target}")?;
    }

    writeln!(w, "Max cut ({} edges):", outcome.max_cut.len())?;
    for (source, target) in edge_pairs(graph, &outcome.max_cut) {
        writeln!(w, "{source} -> {target}")?;
    }

    Ok(())
}

/// Writes the result as a single JSON object.
fn print_json<W: std::io::Write>(
    w: &mut W,
    name: Option<&str>,
    graph: &PathGraph,
    outcome: &maxpath_core::SearchOutcome,
) -> std::io::Result<()> {
    let edges_array = |set: &OrderedSet<EdgeKey>| {
        serde_json::Value::Array(
            edge_pairs(graph, set)
                .into_iter()
                .map(|(source, target)| {
                    let mut obj = serde_json::Map::new();
                    obj.insert("source".to_owned(), serde_json::Value::String(source));
                    obj.insert("target".to_owned(), serde_json::Value::String(target));
                    serde_json::Value::Object(obj)
                })
                .collect(),
        )
    };

    let mut root = serde_json::Map::new();
    if let Some(name) = name {
        root.insert(
            "name".to_owned(),
            serde_json::Value::String(name.to_owned()),
        );
    }
    root.insert("longest_path".to_owned(), edges_array(&outcome.longest_path));
    root.insert("max_cut".to_owned(), edges_array(&outcome.max_cut));
    root.insert("complete".to_owned(), serde_json::Value::Bool(outcome.complete));
    root.insert("steps".to_owned(), serde_json::Value::from(outcome.steps));

    writeln!(w, "{}", serde_json::Value::Object(root))
}
