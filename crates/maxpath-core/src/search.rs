/// Longest-simple-path search by exhaustive depth-first backtracking.
///
/// [`find_longest_path`] tries every edge in the graph as a path start: for
/// each node and each of its outgoing edges it runs a recursive depth-first
/// search over all simple paths reachable from that edge, keeping the
/// longest path found anywhere. "Longest" is the unweighted edge count; a
/// simple path never revisits a node. The complement of the winning path
/// within the graph's structural edge set is reported as the max cut.
///
/// The search is single-threaded, synchronous, and exhaustive —
/// combinatorial in the worst case. [`SearchLimits::max_steps`] bounds
/// total work for callers that need a safety valve; when the budget runs
/// out the search unwinds cleanly and the outcome is marked incomplete.
///
/// Recursion depth is bounded by the longest simple path, which is at most
/// the node count.
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::graph::PathGraph;
use crate::set::{EdgeKey, OrderedSet};

// ---------------------------------------------------------------------------
// SearchLimits
// ---------------------------------------------------------------------------

/// Resource limits for one search invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    /// Maximum number of depth-search steps (recursive invocations) to
    /// spend before giving up. `None` means unlimited — the search runs to
    /// exhaustion. A truncated search still returns the best path found so
    /// far, with [`SearchOutcome::complete`] set to `false`.
    pub max_steps: Option<u64>,
}

impl SearchLimits {
    /// Limits with no step budget: the search runs to exhaustion.
    pub fn unlimited() -> Self {
        SearchLimits { max_steps: None }
    }
}

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Result of one [`find_longest_path`] invocation.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The longest simple path found, as structural edges in the order they
    /// were appended on the winning branch. Empty when the graph has no
    /// edges — an empty path means "no path found", not an error.
    pub longest_path: OrderedSet<EdgeKey>,
    /// The graph's deduplicated edge set minus [`Self::longest_path`], in
    /// the edge universe's first-occurrence order. A reporting artifact,
    /// not a graph-theoretic minimum cut.
    pub max_cut: OrderedSet<EdgeKey>,
    /// `false` if the step budget ran out before the search space was
    /// exhausted; the path is then the best found within budget and is not
    /// guaranteed to be globally longest.
    pub complete: bool,
    /// Total depth-search steps consumed.
    pub steps: u64,
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

/// Mutable state shared across every starting pair of one invocation.
///
/// `best` is the only cross-branch record: it is overwritten (never merged)
/// when a strictly longer candidate appears, so its size is monotonically
/// non-decreasing over the run. Ties keep the first-found path.
struct SearchState<'g> {
    graph: &'g PathGraph,
    best: OrderedSet<EdgeKey>,
    steps: u64,
    max_steps: Option<u64>,
    exhausted: bool,
}

impl SearchState<'_> {
    /// Accounts for one depth-search invocation. Returns `false` once the
    /// budget is spent; callers unwind without exploring further.
    fn take_step(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if let Some(limit) = self.max_steps {
            if self.steps >= limit {
                self.exhausted = true;
                return false;
            }
        }
        self.steps += 1;
        true
    }
}

/// Collects the outgoing edges of `node` as structural keys, in edge
/// insertion order.
///
/// Parallel edge instances each yield a key; the visited check collapses
/// them during the search (the second instance's target is already on the
/// branch). Returns a `Vec` rather than an iterator to keep the recursion
/// free of borrows into the adjacency lists.
fn outgoing(graph: &PathGraph, node: NodeIndex) -> Vec<EdgeKey> {
    let mut result: Vec<EdgeKey> = graph
        .graph()
        .edges(node)
        .map(|edge_ref| EdgeKey {
            source: node,
            target: edge_ref.target(),
        })
        .collect();
    // petgraph yields outgoing edges newest-first; reverse so discovery
    // order follows the input file's edge order.
    result.reverse();
    result
}

// ---------------------------------------------------------------------------
// depth_search
// ---------------------------------------------------------------------------

/// Explores every simple path that extends the current branch with `edge`.
///
/// If the edge's target is already on the branch the edge is rejected and
/// nothing is recorded — this is also what rejects self-loops, whose target
/// is visited from the branch's start. Otherwise the target and edge are
/// pushed, the best path is overwritten if the branch became strictly
/// longer, and every outgoing edge of the target is explored in turn.
/// Both pushes are undone before returning, so sibling branches at the same
/// recursion level never see state from branches already explored. The
/// pop runs even when the step budget expires mid-branch.
fn depth_search(
    state: &mut SearchState<'_>,
    edge: EdgeKey,
    visited: &mut OrderedSet<NodeIndex>,
    path: &mut OrderedSet<EdgeKey>,
) {
    if !state.take_step() {
        return;
    }

    let target = edge.target;
    if visited.contains(target) {
        return;
    }

    visited.insert(target);
    path.insert(edge);

    // Strict "longer wins": ties keep the first-found longest path.
    if path.len() > state.best.len() {
        state.best.copy_from(path);
    }

    for next_edge in outgoing(state.graph, target) {
        depth_search(state, next_edge, visited, path);
        if state.exhausted {
            break;
        }
    }

    // Backtrack.
    visited.remove(target);
    path.remove(edge);
}

// ---------------------------------------------------------------------------
// find_longest_path
// ---------------------------------------------------------------------------

/// Finds a longest simple path in `graph` and its max cut.
///
/// Every (node, outgoing-edge) pair is tried as a path start with a fresh
/// visited set and a fresh path set; one best-path record is shared across
/// all starts. When several longest paths tie in length, the one first
/// discovered in (node insertion order, outgoing-edge insertion order,
/// depth-first order) is returned.
///
/// A graph with no edges yields an empty path and an empty max cut. The
/// search is deterministic: two invocations on the same graph return the
/// same outcome.
pub fn find_longest_path(graph: &PathGraph, limits: &SearchLimits) -> SearchOutcome {
    let mut state = SearchState {
        graph,
        best: OrderedSet::new(),
        steps: 0,
        max_steps: limits.max_steps,
        exhausted: false,
    };

    'starts: for node in graph.node_indices() {
        for edge in outgoing(graph, node) {
            let mut visited = OrderedSet::new();
            let mut path = OrderedSet::new();
            visited.insert(node);

            depth_search(&mut state, edge, &mut visited, &mut path);

            // Every branch must have undone its own state.
            debug_assert!(path.is_empty());
            debug_assert_eq!(visited.len(), 1);

            if state.exhausted {
                break 'starts;
            }
        }
    }

    let mut max_cut = OrderedSet::new();
    for key in graph.edge_keys() {
        if !state.best.contains(*key) {
            max_cut.insert(*key);
        }
    }

    SearchOutcome {
        longest_path: state.best,
        max_cut,
        complete: !state.exhausted,
        steps: state.steps,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::file::{GraphFile, GraphFileEdge};
    use crate::graph::build_graph;

    // ── fixture helpers ─────────────────────────────────────────────────────

    fn edge(source: &str, target: &str) -> GraphFileEdge {
        GraphFileEdge {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }

    fn graph_of(nodes: &[&str], edges: Vec<GraphFileEdge>) -> PathGraph {
        let file = GraphFile {
            name: None,
            nodes: nodes.iter().map(|s| (*s).to_owned()).collect(),
            edges,
        };
        build_graph(&file).expect("fixture graph builds")
    }

    /// Resolves the structural key for the edge `source -> target`.
    fn key(graph: &PathGraph, source: &str, target: &str) -> EdgeKey {
        EdgeKey {
            source: *graph.node_index(source).expect("source exists"),
            target: *graph.node_index(target).expect("target exists"),
        }
    }

    /// Renders a path as `src->tgt` strings for readable assertions.
    fn ids(graph: &PathGraph, set: &OrderedSet<EdgeKey>) -> Vec<String> {
        set.iter()
            .map(|k| {
                format!(
                    "{}->{}",
                    graph.node_id(k.source).expect("source id"),
                    graph.node_id(k.target).expect("target id"),
                )
            })
            .collect()
    }

    // ── zero-edge graphs ────────────────────────────────────────────────────

    #[test]
    fn empty_graph_yields_empty_path_and_cut() {
        let graph = graph_of(&[], vec![]);
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert!(outcome.longest_path.is_empty());
        assert!(outcome.max_cut.is_empty());
        assert!(outcome.complete);
        assert_eq!(outcome.steps, 0);
    }

    #[test]
    fn nodes_without_edges_yield_empty_path() {
        let graph = graph_of(&["a", "b", "c"], vec![]);
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert!(outcome.longest_path.is_empty());
        assert!(outcome.max_cut.is_empty());
    }

    // ── chains ──────────────────────────────────────────────────────────────

    #[test]
    fn single_chain_is_found_whole() {
        let graph = graph_of(
            &["a", "b", "c", "d"],
            vec![edge("a", "b"), edge("b", "c"), edge("c", "d")],
        );
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(
            ids(&graph, &outcome.longest_path),
            vec!["a->b", "b->c", "c->d"]
        );
        assert!(outcome.max_cut.is_empty(), "chain leaves nothing to cut");
    }

    #[test]
    fn longer_of_two_disjoint_chains_wins() {
        // One chain of 2 edges, one of 4; the short chain lands entirely in
        // the cut.
        let graph = graph_of(
            &["a", "b", "c", "p", "q", "r", "s", "t"],
            vec![
                edge("a", "b"),
                edge("b", "c"),
                edge("p", "q"),
                edge("q", "r"),
                edge("r", "s"),
                edge("s", "t"),
            ],
        );
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(
            ids(&graph, &outcome.longest_path),
            vec!["p->q", "q->r", "r->s", "s->t"]
        );
        assert_eq!(ids(&graph, &outcome.max_cut), vec!["a->b", "b->c"]);
    }

    // ── cycles and self-loops ───────────────────────────────────────────────

    #[test]
    fn cycle_closing_edge_is_never_taken() {
        // a→b→c→a plus tail c→d. Revisiting a is forbidden, so the longest
        // path is a→b→c→d and the closing edge c→a is cut.
        let graph = graph_of(
            &["a", "b", "c", "d"],
            vec![
                edge("a", "b"),
                edge("b", "c"),
                edge("c", "a"),
                edge("c", "d"),
            ],
        );
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(
            ids(&graph, &outcome.longest_path),
            vec!["a->b", "b->c", "c->d"]
        );
        assert_eq!(ids(&graph, &outcome.max_cut), vec!["c->a"]);
    }

    #[test]
    fn self_loops_never_appear_in_the_path() {
        let graph = graph_of(
            &["a", "b"],
            vec![edge("a", "a"), edge("a", "b"), edge("b", "b")],
        );
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(ids(&graph, &outcome.longest_path), vec!["a->b"]);
        for k in &outcome.longest_path {
            assert!(!k.is_self_loop());
        }
        assert_eq!(ids(&graph, &outcome.max_cut), vec!["a->a", "b->b"]);
    }

    #[test]
    fn graph_of_only_self_loops_yields_empty_path() {
        let graph = graph_of(&["a", "b"], vec![edge("a", "a"), edge("b", "b")]);
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert!(outcome.longest_path.is_empty());
        assert_eq!(outcome.max_cut.len(), 2);
    }

    // ── structural edge identity ────────────────────────────────────────────

    #[test]
    fn parallel_edges_count_once_in_path_and_cut() {
        let graph = graph_of(
            &["a", "b", "c"],
            vec![edge("a", "b"), edge("a", "b"), edge("b", "c")],
        );
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(ids(&graph, &outcome.longest_path), vec!["a->b", "b->c"]);
        assert!(outcome.max_cut.is_empty());
    }

    // ── branching ───────────────────────────────────────────────────────────

    #[test]
    fn branching_picks_the_deeper_arm() {
        // a→b, then b→c (dead end) versus b→d→e.
        let graph = graph_of(
            &["a", "b", "c", "d", "e"],
            vec![
                edge("a", "b"),
                edge("b", "c"),
                edge("b", "d"),
                edge("d", "e"),
            ],
        );
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(
            ids(&graph, &outcome.longest_path),
            vec!["a->b", "b->d", "d->e"]
        );
        assert_eq!(ids(&graph, &outcome.max_cut), vec!["b->c"]);
    }

    #[test]
    fn diamond_explores_both_arms() {
        // a→b→d and a→c→d, plus d→e. Both arms reach d; either 3-edge path
        // is a valid longest path, and the first-discovered one (via b)
        // wins the tie.
        let graph = graph_of(
            &["a", "b", "c", "d", "e"],
            vec![
                edge("a", "b"),
                edge("a", "c"),
                edge("b", "d"),
                edge("c", "d"),
                edge("d", "e"),
            ],
        );
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(outcome.longest_path.len(), 3);
        assert_eq!(
            ids(&graph, &outcome.longest_path),
            vec!["a->b", "b->d", "d->e"]
        );
        assert_eq!(ids(&graph, &outcome.max_cut), vec!["a->c", "c->d"]);
    }

    // ── ties ────────────────────────────────────────────────────────────────

    #[test]
    fn tie_keeps_the_first_discovered_path() {
        // Two disjoint 1-edge chains; the one whose start node was inserted
        // first wins.
        let graph = graph_of(&["a", "b", "x", "y"], vec![edge("x", "y"), edge("a", "b")]);
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        // Node "a" precedes "x" in insertion order, so a→b is discovered
        // first even though x→y appears first in the edge list.
        assert_eq!(ids(&graph, &outcome.longest_path), vec!["a->b"]);
    }

    // ── idempotence ─────────────────────────────────────────────────────────

    #[test]
    fn repeated_search_returns_the_same_path() {
        let graph = graph_of(
            &["a", "b", "c", "d"],
            vec![
                edge("a", "b"),
                edge("b", "c"),
                edge("c", "a"),
                edge("c", "d"),
            ],
        );
        let first = find_longest_path(&graph, &SearchLimits::unlimited());
        let second = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(first.longest_path.len(), second.longest_path.len());
        assert_eq!(
            ids(&graph, &first.longest_path),
            ids(&graph, &second.longest_path)
        );
        assert_eq!(first.steps, second.steps);
    }

    // ── backtracking discipline ─────────────────────────────────────────────

    #[test]
    fn sets_are_empty_after_search() {
        // Drive the walker directly and verify it undoes every push: after
        // the call the path set is empty and the visited set holds only the
        // start node it was seeded with.
        let graph = graph_of(
            &["a", "b", "c", "d"],
            vec![
                edge("a", "b"),
                edge("b", "c"),
                edge("b", "d"),
                edge("c", "d"),
            ],
        );
        let start = *graph.node_index("a").expect("a");
        let mut state = SearchState {
            graph: &graph,
            best: OrderedSet::new(),
            steps: 0,
            max_steps: None,
            exhausted: false,
        };
        let mut visited = OrderedSet::new();
        let mut path = OrderedSet::new();
        visited.insert(start);

        depth_search(&mut state, key(&graph, "a", "b"), &mut visited, &mut path);

        assert!(path.is_empty(), "every pushed edge must be popped");
        assert_eq!(visited.len(), 1, "only the seeded start node remains");
        assert!(visited.contains(start));
        assert_eq!(state.best.len(), 3, "a->b->c->d was still recorded");
    }

    #[test]
    fn backtracking_unwinds_cleanly_when_budget_expires() {
        let graph = graph_of(
            &["a", "b", "c", "d"],
            vec![edge("a", "b"), edge("b", "c"), edge("c", "d")],
        );
        let start = *graph.node_index("a").expect("a");
        let mut state = SearchState {
            graph: &graph,
            best: OrderedSet::new(),
            steps: 0,
            max_steps: Some(2),
            exhausted: false,
        };
        let mut visited = OrderedSet::new();
        let mut path = OrderedSet::new();
        visited.insert(start);

        depth_search(&mut state, key(&graph, "a", "b"), &mut visited, &mut path);

        assert!(state.exhausted);
        assert!(path.is_empty());
        assert_eq!(visited.len(), 1);
    }

    // ── step budget ─────────────────────────────────────────────────────────

    #[test]
    fn unlimited_search_is_complete() {
        let graph = graph_of(&["a", "b"], vec![edge("a", "b")]);
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert!(outcome.complete);
        assert!(outcome.steps > 0);
    }

    #[test]
    fn exhausted_budget_marks_outcome_incomplete() {
        let graph = graph_of(
            &["a", "b", "c", "d", "e"],
            vec![
                edge("a", "b"),
                edge("b", "c"),
                edge("c", "d"),
                edge("d", "e"),
            ],
        );
        let outcome = find_longest_path(&graph, &SearchLimits { max_steps: Some(1) });
        assert!(!outcome.complete);
        assert_eq!(outcome.steps, 1);
        // The partial best is still reported, and the cut complements it.
        assert_eq!(
            outcome.longest_path.len() + outcome.max_cut.len(),
            graph.edge_keys().len()
        );
    }

    #[test]
    fn generous_budget_does_not_truncate() {
        let graph = graph_of(
            &["a", "b", "c"],
            vec![edge("a", "b"), edge("b", "c")],
        );
        let outcome = find_longest_path(
            &graph,
            &SearchLimits {
                max_steps: Some(10_000),
            },
        );
        assert!(outcome.complete);
        assert_eq!(outcome.longest_path.len(), 2);
    }

    // ── dense graphs ────────────────────────────────────────────────────────

    #[test]
    fn complete_graph_visits_every_node_once() {
        // K4 with all 12 directed edges: a Hamiltonian path of 3 edges
        // exists and no simple path can be longer.
        let nodes = ["a", "b", "c", "d"];
        let mut edges = Vec::new();
        for s in &nodes {
            for t in &nodes {
                if s != t {
                    edges.push(edge(s, t));
                }
            }
        }
        let graph = graph_of(&nodes, edges);
        let outcome = find_longest_path(&graph, &SearchLimits::unlimited());
        assert_eq!(outcome.longest_path.len(), 3);
        assert_eq!(outcome.max_cut.len(), 9);
    }
}
