#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod file;
pub mod graph;
pub mod search;
pub mod set;

pub use file::{GraphDecodeError, GraphFile, GraphFileEdge, parse_graph};
pub use graph::{EdgeWeight, GraphBuildError, NodeWeight, PathGraph, build_graph};
pub use search::{SearchLimits, SearchOutcome, find_longest_path};
pub use set::{EdgeKey, OrderedSet};

/// Returns the current version of the maxpath-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
