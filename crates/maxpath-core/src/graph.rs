/// Graph construction from a [`GraphFile`] using `petgraph`.
///
/// Wraps a `StableDiGraph` with typed node and edge weights, building from
/// an in-memory [`GraphFile`], and exposing the accessors the search engine
/// traverses through. The graph is immutable for the duration of a search:
/// nothing here mutates after [`build_graph`] returns.
///
/// # Two-Pass Construction
///
/// [`build_graph`] runs two passes over the file:
/// 1. **Node pass** — inserts all nodes into the `StableDiGraph` and records
///    the `id → NodeIndex` mapping. Fails on duplicate IDs.
/// 2. **Edge pass** — resolves `source`/`target` IDs and inserts edges.
///    Fails if either endpoint is not present in the node map. This is
///    where the "every edge endpoint must be a declared node" precondition
///    is enforced, so the search itself never has to handle it.
///
/// The edge pass also records the deduplicated [`EdgeKey`] universe in
/// first-occurrence order; the max cut is computed against this universe,
/// not against raw edge instances, so parallel edges count once.
use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::file::GraphFile;
use crate::set::{EdgeKey, OrderedSet};

// ---------------------------------------------------------------------------
// Weight types
// ---------------------------------------------------------------------------

/// Weight stored inline on each petgraph node.
///
/// A node is an opaque identifier with no attributes beyond identity; the
/// weight exists so results can be rendered back in terms of the input IDs.
#[derive(Debug, Clone)]
pub struct NodeWeight {
    /// Node identifier copied from the graph file.
    pub local_id: String,
}

/// Weight stored inline on each petgraph edge.
///
/// Carries the endpoint ID strings for rendering. Structural identity lives
/// in [`EdgeKey`], derived from the endpoint indices, not here.
#[derive(Debug, Clone)]
pub struct EdgeWeight {
    /// Identifier of the source node, as written in the graph file.
    pub source_id: String,
    /// Identifier of the target node, as written in the graph file.
    pub target_id: String,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur during graph construction from a [`GraphFile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    /// Two entries of the file's node list share the same identifier.
    ///
    /// The contained string is the duplicate ID.
    DuplicateNodeId(String),
    /// An edge references a `source` or `target` node ID that is not present
    /// in the node list.
    DanglingEdgeRef {
        /// Zero-based position of the offending edge in the file's edge list.
        edge_index: usize,
        /// The node ID that could not be resolved.
        missing_node_id: String,
    },
}

impl std::fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphBuildError::DuplicateNodeId(id) => {
                write!(f, "duplicate node ID: {id:?}")
            }
            GraphBuildError::DanglingEdgeRef {
                edge_index,
                missing_node_id,
            } => {
                write!(
                    f,
                    "edge #{edge_index} references unknown node {missing_node_id:?}"
                )
            }
        }
    }
}

impl std::error::Error for GraphBuildError {}

// ---------------------------------------------------------------------------
// PathGraph
// ---------------------------------------------------------------------------

/// A directed graph built from a [`GraphFile`], read-only after construction.
///
/// Wraps a `petgraph` [`StableDiGraph`] with [`NodeWeight`] and
/// [`EdgeWeight`] structs, a `HashMap<String, NodeIndex>` for O(1) lookup of
/// nodes by identifier, and the deduplicated [`EdgeKey`] universe used for
/// max-cut computation. The `StableDiGraph` doubles as the adjacency index:
/// outgoing edges of a node are enumerated in O(out-degree).
///
/// Construct with [`build_graph`].
#[derive(Debug)]
pub struct PathGraph {
    graph: StableDiGraph<NodeWeight, EdgeWeight>,
    id_to_index: HashMap<String, NodeIndex>,
    edge_keys: Vec<EdgeKey>,
}

impl PathGraph {
    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edge instances in the graph, parallel edges
    /// counted individually.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up the [`NodeIndex`] for a node identifier string.
    ///
    /// Returns `None` if no node with that ID exists in the graph.
    pub fn node_index(&self, id: &str) -> Option<&NodeIndex> {
        self.id_to_index.get(id)
    }

    /// Returns the [`NodeWeight`] for the given index, or `None` if the
    /// index does not refer to a node of this graph.
    pub fn node_weight(&self, idx: NodeIndex) -> Option<&NodeWeight> {
        self.graph.node_weight(idx)
    }

    /// Returns the identifier string for the given node index, or `None` if
    /// the index does not refer to a node of this graph.
    pub fn node_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|w| w.local_id.as_str())
    }

    /// Returns a reference to the underlying [`StableDiGraph`] for use by
    /// traversal algorithms.
    pub fn graph(&self) -> &StableDiGraph<NodeWeight, EdgeWeight> {
        &self.graph
    }

    /// Returns the deduplicated edge-key universe in first-occurrence order.
    ///
    /// Parallel edges between the same endpoints appear once. This is the
    /// full edge set against which the max cut is computed.
    pub fn edge_keys(&self) -> &[EdgeKey] {
        &self.edge_keys
    }

    /// Iterates node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }
}

/// Constructs a [`PathGraph`] from a decoded [`GraphFile`].
///
/// Construction is O(N + E) where N is node count and E is edge count.
///
/// # Errors
///
/// - [`GraphBuildError::DuplicateNodeId`] if two node entries share an ID.
/// - [`GraphBuildError::DanglingEdgeRef`] if an edge endpoint names a node
///   that is not declared in the node list.
pub fn build_graph(file: &GraphFile) -> Result<PathGraph, GraphBuildError> {
    let mut graph: StableDiGraph<NodeWeight, EdgeWeight> = StableDiGraph::new();
    let mut id_to_index: HashMap<String, NodeIndex> = HashMap::new();

    // Node pass.
    for id in &file.nodes {
        if id_to_index.contains_key(id) {
            return Err(GraphBuildError::DuplicateNodeId(id.clone()));
        }
        let idx = graph.add_node(NodeWeight {
            local_id: id.clone(),
        });
        id_to_index.insert(id.clone(), idx);
    }

    // Edge pass. Deduplicate the key universe as we go, keeping
    // first-occurrence order.
    let mut edge_keys: Vec<EdgeKey> = Vec::new();
    let mut seen_keys = OrderedSet::new();

    for (edge_index, edge) in file.edges.iter().enumerate() {
        let source = *id_to_index.get(&edge.source).ok_or_else(|| {
            GraphBuildError::DanglingEdgeRef {
                edge_index,
                missing_node_id: edge.source.clone(),
            }
        })?;
        let target = *id_to_index.get(&edge.target).ok_or_else(|| {
            GraphBuildError::DanglingEdgeRef {
                edge_index,
                missing_node_id: edge.target.clone(),
            }
        })?;

        graph.add_edge(
            source,
            target,
            EdgeWeight {
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
            },
        );

        let key = EdgeKey { source, target };
        if !seen_keys.contains(key) {
            seen_keys.insert(key);
            edge_keys.push(key);
        }
    }

    Ok(PathGraph {
        graph,
        id_to_index,
        edge_keys,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::file::GraphFileEdge;

    // ── fixture helpers ─────────────────────────────────────────────────────

    fn edge(source: &str, target: &str) -> GraphFileEdge {
        GraphFileEdge {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }

    fn graph_file(nodes: &[&str], edges: Vec<GraphFileEdge>) -> GraphFile {
        GraphFile {
            name: None,
            nodes: nodes.iter().map(|s| (*s).to_owned()).collect(),
            edges,
        }
    }

    // ── construction ────────────────────────────────────────────────────────

    #[test]
    fn build_counts_nodes_and_edges() {
        let file = graph_file(&["a", "b", "c"], vec![edge("a", "b"), edge("b", "c")]);
        let graph = build_graph(&file).expect("builds");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_keys().len(), 2);
    }

    #[test]
    fn build_empty_file() {
        let file = graph_file(&[], vec![]);
        let graph = build_graph(&file).expect("builds");
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edge_keys().is_empty());
    }

    #[test]
    fn node_index_resolves_ids() {
        let file = graph_file(&["a", "b"], vec![]);
        let graph = build_graph(&file).expect("builds");
        let idx = *graph.node_index("b").expect("b exists");
        assert_eq!(graph.node_id(idx), Some("b"));
        assert_eq!(
            graph.node_weight(idx).expect("weight").local_id.as_str(),
            "b"
        );
        assert!(graph.node_index("z").is_none());
    }

    // ── errors ──────────────────────────────────────────────────────────────

    #[test]
    fn duplicate_node_id_is_rejected() {
        let file = graph_file(&["a", "b", "a"], vec![]);
        let err = build_graph(&file).expect_err("should fail");
        assert_eq!(err, GraphBuildError::DuplicateNodeId("a".to_owned()));
    }

    #[test]
    fn dangling_edge_source_is_rejected() {
        let file = graph_file(&["a"], vec![edge("ghost", "a")]);
        let err = build_graph(&file).expect_err("should fail");
        assert_eq!(
            err,
            GraphBuildError::DanglingEdgeRef {
                edge_index: 0,
                missing_node_id: "ghost".to_owned(),
            }
        );
    }

    #[test]
    fn dangling_edge_target_is_rejected() {
        let file = graph_file(&["a"], vec![edge("a", "ghost")]);
        let err = build_graph(&file).expect_err("should fail");
        assert!(matches!(err, GraphBuildError::DanglingEdgeRef { .. }));
    }

    // ── edge-key universe ───────────────────────────────────────────────────

    #[test]
    fn parallel_edges_collapse_to_one_key() {
        let file = graph_file(
            &["a", "b"],
            vec![edge("a", "b"), edge("a", "b"), edge("a", "b")],
        );
        let graph = build_graph(&file).expect("builds");
        assert_eq!(graph.edge_count(), 3, "instances are kept");
        assert_eq!(graph.edge_keys().len(), 1, "keys are structural");
    }

    #[test]
    fn edge_keys_keep_first_occurrence_order() {
        let file = graph_file(
            &["a", "b", "c"],
            vec![edge("b", "c"), edge("a", "b"), edge("b", "c")],
        );
        let graph = build_graph(&file).expect("builds");
        let b = *graph.node_index("b").expect("b");
        let c = *graph.node_index("c").expect("c");
        assert_eq!(graph.edge_keys()[0], EdgeKey { source: b, target: c });
        assert_eq!(graph.edge_keys().len(), 2);
    }
}
