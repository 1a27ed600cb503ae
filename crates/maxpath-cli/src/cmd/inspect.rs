//! Implementation of `maxpath inspect <file>`.
//!
//! Parses a graph JSON file and prints summary statistics to stdout:
//! - node count
//! - edge instance count (parallel edges counted individually)
//! - distinct edge count (by (source, target) endpoint pair)
//! - self-loop count
//! - count of nodes with no outgoing edge
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Statistics are computed from the decoded document directly; a file that
//! would fail graph construction (duplicate IDs, dangling endpoints) still
//! inspects, which is useful precisely when debugging such files.
//!
//! Exit codes: 0 = success, 2 = decode failure.
use std::collections::HashSet;

use maxpath_core::GraphFile;

use crate::OutputFormat;
use crate::error::CliError;

/// Statistics gathered from a decoded [`GraphFile`].
pub struct InspectStats {
    /// Graph display name, if the file carries one.
    pub name: Option<String>,
    /// Total number of node entries.
    pub node_count: usize,
    /// Total number of edge entries, parallel edges counted individually.
    pub edge_count: usize,
    /// Number of distinct (source, target) endpoint pairs.
    pub distinct_edge_count: usize,
    /// Number of edges whose source and target are the same node.
    pub self_loop_count: usize,
    /// Number of nodes that no edge leaves. These contribute no candidate
    /// paths to the search.
    pub sink_count: usize,
}

impl InspectStats {
    /// Computes statistics from a decoded [`GraphFile`].
    pub fn from_file(file: &GraphFile) -> Self {
        let mut distinct: HashSet<(&str, &str)> = HashSet::new();
        let mut sources: HashSet<&str> = HashSet::new();
        let mut self_loop_count = 0;

        for edge in &file.edges {
            distinct.insert((edge.source.as_str(), edge.target.as_str()));
            sources.insert(edge.source.as_str());
            if edge.source == edge.target {
                self_loop_count += 1;
            }
        }

        let sink_count = file
            .nodes
            .iter()
            .filter(|n| !sources.contains(n.as_str()))
            .count();

        InspectStats {
            name: file.name.clone(),
            node_count: file.nodes.len(),
            edge_count: file.edges.len(),
            distinct_edge_count: distinct.len(),
            self_loop_count,
            sink_count,
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(file: &GraphFile, format: &OutputFormat) -> Result<(), CliError> {
    let stats = InspectStats::from_file(file);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes aligned key/value lines.
fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    if let Some(name) = &stats.name {
        writeln!(w, "name:            {name}")?;
    }
    writeln!(w, "nodes:           {}", stats.node_count)?;
    writeln!(w, "edges:           {}", stats.edge_count)?;
    writeln!(w, "distinct edges:  {}", stats.distinct_edge_count)?;
    writeln!(w, "self-loops:      {}", stats.self_loop_count)?;
    writeln!(w, "sink nodes:      {}", stats.sink_count)?;
    Ok(())
}

/// Writes the statistics as a single JSON object.
fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let mut root = serde_json::Map::new();
    if let Some(name) = &stats.name {
        root.insert(
            "name".to_owned(),
            serde_json::Value::String(name.clone()),
        );
    }
    root.insert("nodes".to_owned(), serde_json::Value::from(stats.node_count));
    root.insert("edges".to_owned(), serde_json::Value::from(stats.edge_count));
    root.insert(
        "distinct_edges".to_owned(),
        serde_json::Value::from(stats.distinct_edge_count),
    );
    root.insert(
        "self_loops".to_owned(),
        serde_json::Value::from(stats.self_loop_count),
    );
    root.insert(
        "sink_nodes".to_owned(),
        serde_json::Value::from(stats.sink_count),
    );

    writeln!(w, "{}", serde_json::Value::Object(root))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use maxpath_core::GraphFileEdge;

    use super::*;

    fn edge(source: &str, target: &str) -> GraphFileEdge {
        GraphFileEdge {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }

    fn fixture() -> GraphFile {
        GraphFile {
            name: Some("G1".to_owned()),
            nodes: vec![
                "a".to_owned(),
                "b".to_owned(),
                "c".to_owned(),
                "d".to_owned(),
            ],
            edges: vec![
                edge("a", "b"),
                edge("a", "b"),
                edge("b", "c"),
                edge("c", "c"),
            ],
        }
    }

    #[test]
    fn stats_count_everything() {
        let stats = InspectStats::from_file(&fixture());
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 4);
        assert_eq!(stats.distinct_edge_count, 3);
        assert_eq!(stats.self_loop_count, 1);
        // "d" has no outgoing edge; neither does anything make "d" a source.
        assert_eq!(stats.sink_count, 1);
    }

    #[test]
    fn stats_on_empty_file() {
        let file = GraphFile {
            name: None,
            nodes: vec![],
            edges: vec![],
        };
        let stats = InspectStats::from_file(&file);
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert_eq!(stats.sink_count, 0);
    }

    #[test]
    fn human_output_contains_counts() {
        let stats = InspectStats::from_file(&fixture());
        let mut buf = Vec::new();
        print_human(&mut buf, &stats).expect("write");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("name:"), "output: {out}");
        assert!(out.contains("G1"), "output: {out}");
        assert!(out.contains("nodes:           4"), "output: {out}");
        assert!(out.contains("self-loops:      1"), "output: {out}");
    }

    #[test]
    fn json_output_shape() {
        let stats = InspectStats::from_file(&fixture());
        let mut buf = Vec::new();
        print_json(&mut buf, &stats).expect("write");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(v["name"], "G1");
        assert_eq!(v["nodes"], 4);
        assert_eq!(v["distinct_edges"], 3);
        assert_eq!(v["self_loops"], 1);
        assert_eq!(v["sink_nodes"], 1);
    }
}
