/// On-disk graph document representation.
///
/// [`GraphFile`] is the root type for a serialised test graph: a flat list of
/// node identifiers and a flat list of directed edges between them. The JSON
/// layout is intentionally minimal:
///
/// ```json
/// {
///   "name": "G0",
///   "nodes": ["A", "B", "C"],
///   "edges": [
///     { "source": "A", "target": "B" },
///     { "source": "B", "target": "C" }
///   ]
/// }
/// ```
///
/// Node identifiers are opaque strings with no intrinsic attributes beyond
/// identity equality. Edge endpoints must name entries of `nodes`; that
/// constraint is enforced by [`crate::graph::build_graph`], not here — this
/// module only decodes the document shape.
///
/// Unknown keys are ignored, per serde's default behaviour; a document may
/// carry extra fields, but nothing beyond the declared fields is preserved
/// across a decode/encode round trip.
use serde::{Deserialize, Serialize};

/// A directed edge in the on-disk document: an ordered (source, target) pair
/// of node identifier strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFileEdge {
    /// Identifier of the node the edge leaves.
    pub source: String,
    /// Identifier of the node the edge enters.
    pub target: String,
}

/// The top-level graph document.
///
/// Deserialise from JSON with [`parse_graph`]; serialise back with
/// [`serde_json::to_string`] etc. Both `nodes` and `edges` may be empty —
/// an edgeless graph is a valid input for which the search reports an empty
/// longest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    /// Optional display name for the graph (e.g. `"G0"`). Purely cosmetic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// All node identifiers in the graph. Duplicates are a build error, not
    /// a decode error.
    pub nodes: Vec<String>,

    /// All directed edges. Parallel edges (same source and target) are
    /// accepted here and collapsed to one structural edge by the search.
    pub edges: Vec<GraphFileEdge>,
}

/// Errors that can occur while decoding a graph document from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphDecodeError {
    /// The input is not valid JSON, or does not match the [`GraphFile`]
    /// shape. Line and column are 1-based positions from `serde_json`.
    InvalidJson {
        /// Human-readable description from the underlying parser.
        detail: String,
        /// 1-based line of the error position.
        line: usize,
        /// 1-based column of the error position.
        column: usize,
    },
}

impl std::fmt::Display for GraphDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphDecodeError::InvalidJson {
                detail,
                line,
                column,
            } => {
                write!(f, "invalid graph JSON at line {line}, column {column}: {detail}")
            }
        }
    }
}

impl std::error::Error for GraphDecodeError {}

/// Decodes a [`GraphFile`] from a JSON string.
///
/// # Errors
///
/// Returns [`GraphDecodeError::InvalidJson`] with the parser's line/column
/// position if the input is not valid JSON or does not match the document
/// shape.
pub fn parse_graph(input: &str) -> Result<GraphFile, GraphDecodeError> {
    serde_json::from_str(input).map_err(|e| GraphDecodeError::InvalidJson {
        detail: e.to_string(),
        line: e.line(),
        column: e.column(),
    })
}
