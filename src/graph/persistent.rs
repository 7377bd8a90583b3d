//! Persistent, ordered-map-backed adjacency structure.
//!
//! [`PersistentGraph`] maps every vertex to the ordered set of its successors. It is
//! built on `imbl` persistent collections, so every update returns a new graph value
//! that shares all untouched structure with the old one. Cloning, and therefore
//! taking a snapshot view, is O(1).
//!
//! # Removal Asymmetry
//!
//! [`PersistentGraph::remove`] deletes a vertex's *outgoing* edges only. Edges from
//! other vertices into the removed vertex stay in place and must be removed by the
//! caller with [`PersistentGraph::remove_edge`] if they are unwanted. This keeps
//! vertex removal a single map update instead of a scan over every adjacency set.

use std::fmt;

use imbl::{OrdMap, OrdSet};

use crate::graph::{GraphStore, GraphView};

/// An immutable adjacency map `V -> ordered set of V` with structural sharing.
///
/// Vertices need a total order, supplied through [`Ord`].
///
/// # Equality
///
/// Two graphs are equal when they contain the same edges. Vertices that have an
/// adjacency entry but no outgoing edges do not take part in the comparison.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::dfs, graph::PersistentGraph};
///
/// let g = PersistentGraph::of_list([(1, 2), (2, 3)]);
/// let h = g.add_edge(3, 4);
///
/// // `g` is untouched by the update
/// assert!(!g.contains_edge(&3, &4));
/// assert!(h.contains_edge(&3, &4));
///
/// let reached: Vec<i32> = dfs(&h, [1]).collect();
/// assert_eq!(reached, vec![1, 2, 3, 4]);
/// ```
#[derive(Clone)]
pub struct PersistentGraph<V: Ord + Clone> {
    map: OrdMap<V, OrdSet<V>>,
}

impl<V: Ord + Clone> PersistentGraph<V> {
    /// Returns the empty graph.
    #[must_use]
    pub fn empty() -> Self {
        PersistentGraph { map: OrdMap::new() }
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a graph in which `vertex` exists, with no new edges.
    #[must_use]
    pub fn add(&self, vertex: V) -> Self {
        if self.map.contains_key(&vertex) {
            return self.clone();
        }
        PersistentGraph {
            map: self.map.update(vertex, OrdSet::new()),
        }
    }

    /// Returns a graph without `vertex` and without its outgoing edges.
    ///
    /// Edges from other vertices *into* `vertex` are kept.
    #[must_use]
    pub fn remove(&self, vertex: &V) -> Self {
        PersistentGraph {
            map: self.map.without(vertex),
        }
    }

    /// Returns a graph that additionally contains the edge `from -> to`.
    #[must_use]
    pub fn add_edge(&self, from: V, to: V) -> Self {
        let targets = self.map.get(&from).cloned().unwrap_or_default().update(to);
        PersistentGraph {
            map: self.map.update(from, targets),
        }
    }

    /// Returns a graph without the edge `from -> to`.
    ///
    /// `from` keeps its adjacency entry even if it has no edges left.
    #[must_use]
    pub fn remove_edge(&self, from: &V, to: &V) -> Self {
        match self.map.get(from) {
            Some(targets) if targets.contains(to) => PersistentGraph {
                map: self.map.update(from.clone(), targets.without(to)),
            },
            _ => self.clone(),
        }
    }

    /// Returns `true` if `vertex` has an adjacency entry.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.map.contains_key(vertex)
    }

    /// Returns `true` if the edge `from -> to` exists.
    #[must_use]
    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.map
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    /// Returns the successors of `vertex` in ascending order.
    pub fn successors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.map
            .get(vertex)
            .into_iter()
            .flat_map(|targets| targets.iter())
    }

    /// Returns a graph with the vertices and edges of both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        PersistentGraph {
            map: self
                .map
                .clone()
                .union_with(other.map.clone(), |left, right| left.union(right)),
        }
    }

    /// Builds a graph from a list of `(from, to)` edges.
    pub fn of_list<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        Self::of_iter(edges)
    }

    /// Builds a graph from any sequence of `(from, to)` edges.
    pub fn of_iter<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut map: OrdMap<V, OrdSet<V>> = OrdMap::new();
        for (from, to) in edges {
            map.entry(from).or_insert_with(OrdSet::new).insert(to);
        }
        PersistentGraph { map }
    }

    /// Returns every edge as a `(from, to)` pair, ordered by `from` then `to`.
    #[must_use]
    pub fn to_list(&self) -> Vec<(V, V)> {
        self.edges().collect()
    }

    /// Iterates over every edge, ordered by `from` then `to`.
    pub fn edges(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.map.iter().flat_map(|(from, targets)| {
            targets.iter().map(move |to| (from.clone(), to.clone()))
        })
    }

    /// Returns every vertex that has an adjacency entry or is the target of an edge.
    #[must_use]
    pub fn vertices(&self) -> OrdSet<V> {
        let mut vertices: OrdSet<V> = self.map.keys().cloned().collect();
        for targets in self.map.values() {
            vertices = vertices.union(targets.clone());
        }
        vertices
    }

    /// Returns the number of vertices with an adjacency entry.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.map.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.map.values().map(OrdSet::len).sum()
    }
}

impl<V: Ord + Clone> Default for PersistentGraph<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Ord + Clone> PartialEq for PersistentGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.edges().eq(other.edges())
    }
}

impl<V: Ord + Clone> Eq for PersistentGraph<V> {}

impl<V: Ord + Clone + fmt::Debug> fmt::Debug for PersistentGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<V: Ord + Clone> FromIterator<(V, V)> for PersistentGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::of_iter(iter)
    }
}

impl<V: Ord + Clone> GraphView for PersistentGraph<V> {
    type Vertex = V;
    type Edge = (V, V);

    fn children(&self, vertex: &V) -> impl Iterator<Item = (V, V)> {
        self.successors(vertex)
            .map(move |to| (vertex.clone(), to.clone()))
    }

    fn origin(&self, edge: &(V, V)) -> V {
        edge.0.clone()
    }

    fn dest(&self, edge: &(V, V)) -> V {
        edge.1.clone()
    }
}

impl<V: Ord + Clone> GraphStore for PersistentGraph<V> {
    type Vertex = V;
    type View = PersistentGraph<V>;

    /// Returns a snapshot: later updates to `self` are not visible through it.
    fn as_view(&self) -> Self::View {
        self.clone()
    }

    fn add_edge(&mut self, from: V, to: V) {
        *self = PersistentGraph::add_edge(self, from, to);
    }

    fn remove_vertex(&mut self, vertex: &V) {
        *self = self.remove(vertex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut edges: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
        edges.sort_unstable();
        edges
    }

    #[test]
    fn test_of_list_to_list() {
        let input = vec![(3, 1), (1, 2), (1, 3), (2, 3), (1, 2)];
        let graph = PersistentGraph::of_list(input.clone());

        let mut expected = input;
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(sorted(graph.to_list()), expected);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_add_remove_edge_roundtrip() {
        let g = PersistentGraph::of_list([(1, 2), (2, 3)]);
        let h = g.add_edge(5, 6).remove_edge(&5, &6);
        assert_eq!(g, h);

        let h = g.add_edge(1, 3).remove_edge(&1, &3);
        assert_eq!(g, h);
    }

    #[test]
    fn test_updates_are_persistent() {
        let g = PersistentGraph::of_list([(1, 2)]);
        let h = g.add_edge(2, 3);
        let k = h.remove(&1);

        assert!(g.contains_edge(&1, &2));
        assert!(!g.contains_edge(&2, &3));
        assert!(h.contains_edge(&1, &2));
        assert!(!k.contains(&1));
        assert!(k.contains_edge(&2, &3));
    }

    #[test]
    fn test_remove_keeps_inbound_edges() {
        let g = PersistentGraph::of_list([(1, 2), (2, 3), (3, 2)]);
        let h = g.remove(&2);

        assert!(!h.contains(&2));
        assert!(h.contains_edge(&1, &2));
        assert!(h.contains_edge(&3, &2));
        assert!(!h.contains_edge(&2, &3));
    }

    #[test]
    fn test_add_vertex() {
        let g: PersistentGraph<u32> = PersistentGraph::empty();
        assert!(g.is_empty());

        let g = g.add(7);
        assert!(g.contains(&7));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.successors(&7).count(), 0);

        // Adding an existing vertex keeps its edges
        let g = g.add_edge(7, 8).add(7);
        assert!(g.contains_edge(&7, &8));
    }

    #[test]
    fn test_union() {
        let g = PersistentGraph::of_list([(1, 2), (2, 3)]);
        let h = PersistentGraph::of_list([(1, 4), (5, 6)]);
        let u = g.union(&h);

        assert_eq!(
            sorted(u.to_list()),
            vec![(1, 2), (1, 4), (2, 3), (5, 6)]
        );
    }

    #[test]
    fn test_vertices_include_targets() {
        let g = PersistentGraph::of_list([(1, 2), (2, 3)]);
        let vertices: Vec<u32> = g.vertices().into_iter().collect();
        assert_eq!(vertices, vec![1, 2, 3]);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_graph_view() {
        let g = PersistentGraph::of_list([(1, 3), (1, 2)]);
        let children: Vec<(u32, u32)> = g.children(&1).collect();
        assert_eq!(children, vec![(1, 2), (1, 3)]);
        assert_eq!(g.children(&9).count(), 0);
    }

    #[test]
    fn test_store_view_is_snapshot() {
        let mut g = PersistentGraph::of_list([(1, 2)]);
        let view = g.as_view();

        GraphStore::add_edge(&mut g, 2, 3);
        g.remove_vertex(&1);

        assert!(view.contains_edge(&1, &2));
        assert!(!view.contains_edge(&2, &3));
        assert!(g.contains_edge(&2, &3));
        assert!(!g.contains(&1));
    }
}
