//! Mutable, hash-table-backed adjacency structure.
//!
//! [`MutableGraph`] stores each vertex's successors in a hash set inside a shared
//! [`DashMap`]. All mutation goes through `&self`, and every handle obtained from
//! [`MutableGraph::as_view`] (or by cloning) points at the same storage, so changes
//! are visible through outstanding views immediately.
//!
//! Mutating the graph while a traversal over one of its views is being pulled is the
//! caller's responsibility to avoid. `children` copies out a vertex's successors
//! before yielding them, so doing so never deadlocks, but the traversal result is
//! unspecified.
//!
//! Like the persistent representation, [`MutableGraph::remove`] only drops the
//! removed vertex's outgoing edges.

use std::{
    collections::{hash_map::RandomState, HashSet},
    hash::{BuildHasher, Hash},
    sync::Arc,
};

use dashmap::DashMap;

use crate::graph::{GraphStore, GraphView};

/// A shared, in-place mutable adjacency table.
///
/// Vertices need only equality and hashing. The hashing strategy is chosen at
/// construction time.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::bfs, graph::MutableGraph};
///
/// let graph = MutableGraph::new();
/// let view = graph.as_view();
///
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "c");
///
/// // The earlier view sees the new edges
/// let reached: Vec<&str> = bfs(&view, ["a"]).collect();
/// assert_eq!(reached, vec!["a", "b", "c"]);
/// ```
pub struct MutableGraph<V, S = RandomState>
where
    V: Hash + Eq,
    S: BuildHasher + Clone,
{
    /// Adjacency sets: vertex -> successors
    adjacency: Arc<DashMap<V, HashSet<V, S>, S>>,
    hasher: S,
}

impl<V: Hash + Eq + Clone> MutableGraph<V> {
    /// Creates an empty graph with the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<V: Hash + Eq + Clone> Default for MutableGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> Clone for MutableGraph<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone,
{
    /// Returns another handle to the same storage.
    fn clone(&self) -> Self {
        MutableGraph {
            adjacency: Arc::clone(&self.adjacency),
            hasher: self.hasher.clone(),
        }
    }
}

impl<V, S> MutableGraph<V, S>
where
    V: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Creates an empty graph whose tables hash vertices with `hasher`.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        MutableGraph {
            adjacency: Arc::new(DashMap::with_hasher(hasher.clone())),
            hasher,
        }
    }

    /// Returns a view sharing this graph's storage.
    #[must_use]
    pub fn as_view(&self) -> Self {
        self.clone()
    }

    /// Inserts `vertex` with no outgoing edges if it is not present yet.
    pub fn add(&self, vertex: V) {
        self.adjacency
            .entry(vertex)
            .or_insert_with(|| HashSet::with_hasher(self.hasher.clone()));
    }

    /// Inserts the edge `from -> to`.
    pub fn add_edge(&self, from: V, to: V) {
        self.adjacency
            .entry(from)
            .or_insert_with(|| HashSet::with_hasher(self.hasher.clone()))
            .insert(to);
    }

    /// Removes the edge `from -> to` if present.
    pub fn remove_edge(&self, from: &V, to: &V) {
        if let Some(mut targets) = self.adjacency.get_mut(from) {
            targets.remove(to);
        }
    }

    /// Removes `vertex` and its outgoing edges. Edges into `vertex` are kept.
    pub fn remove(&self, vertex: &V) {
        self.adjacency.remove(vertex);
    }

    /// Returns `true` if `vertex` has an adjacency entry.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns `true` if the edge `from -> to` exists.
    #[must_use]
    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    /// Returns a copy of the current successors of `vertex`, in unspecified order.
    #[must_use]
    pub fn successors(&self, vertex: &V) -> Vec<V> {
        self.adjacency
            .get(vertex)
            .map(|targets| targets.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the number of vertices with an adjacency entry.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|entry| entry.value().len()).sum()
    }
}

impl<V, S> GraphView for MutableGraph<V, S>
where
    V: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Vertex = V;
    type Edge = (V, V);

    fn children(&self, vertex: &V) -> impl Iterator<Item = (V, V)> {
        let origin = vertex.clone();
        self.successors(vertex)
            .into_iter()
            .map(move |to| (origin.clone(), to))
    }

    fn origin(&self, edge: &(V, V)) -> V {
        edge.0.clone()
    }

    fn dest(&self, edge: &(V, V)) -> V {
        edge.1.clone()
    }
}

impl<V, S> GraphStore for MutableGraph<V, S>
where
    V: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Vertex = V;
    type View = MutableGraph<V, S>;

    fn as_view(&self) -> Self::View {
        MutableGraph::as_view(self)
    }

    fn add_edge(&mut self, from: V, to: V) {
        MutableGraph::add_edge(self, from, to);
    }

    fn remove_vertex(&mut self, vertex: &V) {
        MutableGraph::remove(self, vertex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_successors(graph: &MutableGraph<u32>, vertex: u32) -> Vec<u32> {
        let mut out = graph.successors(&vertex);
        out.sort_unstable();
        out
    }

    #[test]
    fn test_add_and_remove_edges() {
        let graph = MutableGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(1, 2);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(sorted_successors(&graph, 1), vec![2, 3]);

        graph.remove_edge(&1, &2);
        assert!(!graph.contains_edge(&1, &2));
        assert!(graph.contains_edge(&1, &3));

        // Removing a missing edge is a no-op
        graph.remove_edge(&7, &8);
        assert!(!graph.contains(&7));
    }

    #[test]
    fn test_remove_keeps_inbound_edges() {
        let graph = MutableGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.remove(&2);

        assert!(!graph.contains(&2));
        assert!(graph.contains_edge(&1, &2));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_views_share_storage() {
        let graph = MutableGraph::new();
        let view = graph.as_view();

        graph.add(5);
        graph.add_edge(5, 6);
        assert!(view.contains_edge(&5, &6));

        view.remove(&5);
        assert!(!graph.contains(&5));
    }

    #[test]
    fn test_graph_view_children() {
        let graph = MutableGraph::new();
        graph.add_edge(1, 2);
        let children: Vec<(u32, u32)> = graph.children(&1).collect();
        assert_eq!(children, vec![(1, 2)]);
        assert_eq!(graph.children(&2).count(), 0);
    }

    #[test]
    fn test_graph_store() {
        let mut graph = MutableGraph::new();
        let view = GraphStore::as_view(&graph);

        GraphStore::add_edge(&mut graph, 'x', 'y');
        assert!(view.contains_edge(&'x', &'y'));

        graph.remove_vertex(&'x');
        assert!(!view.contains(&'x'));
    }
}
