/// The set abstraction backing the search engine's transient state.
///
/// Three pieces of search state share one container contract: the
/// visited-node set, the current-path edge set, and the best-path-so-far
/// edge set. [`OrderedSet`] provides that contract — duplicate-free,
/// mutable, insertion-ordered — with O(1) average membership instead of
/// the linear scans a naive representation would need.
///
/// # Structural edge identity
///
/// Path membership compares edges by their endpoint pair, not by instance:
/// two parallel edges connecting the same (source, target) nodes are the
/// same edge for the purposes of "has this edge been used". [`EdgeKey`]
/// captures that identity; edge sets are `OrderedSet<EdgeKey>`.
use std::collections::HashSet;
use std::hash::Hash;

use petgraph::stable_graph::NodeIndex;

// ---------------------------------------------------------------------------
// EdgeKey
// ---------------------------------------------------------------------------

/// Structural identity of a directed edge: the ordered (source, target)
/// pair of node indices.
///
/// Equality and hashing are over the pair, so distinct parallel edge
/// instances between the same endpoints collapse to one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    /// Index of the node the edge leaves.
    pub source: NodeIndex,
    /// Index of the node the edge enters.
    pub target: NodeIndex,
}

impl EdgeKey {
    /// Returns `true` if the edge starts and ends on the same node.
    ///
    /// Self-loops can never extend a simple path; the search rejects them
    /// on the visited-node check, but callers reporting statistics also
    /// want to identify them directly.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

// ---------------------------------------------------------------------------
// OrderedSet
// ---------------------------------------------------------------------------

/// A duplicate-free, insertion-ordered set.
///
/// Backed by a `Vec<T>` for iteration order and a `HashSet<T>` for O(1)
/// average membership. All mutating operations keep the two views
/// consistent.
///
/// Contract:
/// - [`insert`](OrderedSet::insert) is idempotent — inserting a present
///   element is a no-op and never creates duplicate membership.
/// - [`remove`](OrderedSet::remove) of an absent element is a no-op, not
///   an error.
/// - [`copy_from`](OrderedSet::copy_from) replaces the destination's
///   contents with an exact copy of the source's, order included.
#[derive(Debug, Clone, Default)]
pub struct OrderedSet<T: Copy + Eq + Hash> {
    items: Vec<T>,
    index: HashSet<T>,
}

impl<T: Copy + Eq + Hash> OrderedSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        OrderedSet {
            items: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Returns `true` if `element` was previously inserted and not since
    /// removed.
    pub fn contains(&self, element: T) -> bool {
        self.index.contains(&element)
    }

    /// Adds `element` to the set. No-op if already present.
    pub fn insert(&mut self, element: T) {
        if self.index.insert(element) {
            self.items.push(element);
        }
    }

    /// Removes `element` from the set if present; no-op otherwise.
    ///
    /// The relative order of the remaining elements is preserved.
    pub fn remove(&mut self, element: T) {
        if self.index.remove(&element) {
            if let Some(pos) = self.items.iter().position(|i| *i == element) {
                self.items.remove(pos);
            }
        }
    }

    /// Returns the number of distinct elements currently in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Replaces this set's contents with an exact copy of `source`.
    pub fn copy_from(&mut self, source: &OrderedSet<T>) {
        self.items.clear();
        self.items.extend_from_slice(&source.items);
        self.index.clone_from(&source.index);
    }

    /// Iterates the elements in insertion order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.items.iter().copied()
    }

    /// Returns the elements as a slice in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T: Copy + Eq + Hash> IntoIterator for &'a OrderedSet<T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
