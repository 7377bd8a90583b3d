//! The graph view abstraction and its closure/list adapters.
//!
//! Every algorithm in this crate consumes a [`GraphView`], never a concrete
//! representation. A view is exactly three functions:
//!
//! - [`children`](GraphView::children) - the outgoing edges of a vertex
//! - [`origin`](GraphView::origin) - the source vertex of an edge
//! - [`dest`](GraphView::dest) - the target vertex of an edge
//!
//! Vertices and edges are opaque to the algorithms. Whatever equality, hashing or
//! ordering a traversal needs comes from the table it is handed, not from the view.
//!
//! # Design Principles
//!
//! ## Iterator-Based Adjacency
//!
//! `children` returns an iterator rather than a collection, so views over lazily
//! computed or infinite graphs never materialize more than one adjacency at a time.
//!
//! ## Stability Within One Traversal
//!
//! For the duration of one traversal call, `children(v)` must yield the same edges
//! every time it is asked about the same `v`. Mutating the underlying structure while
//! a traversal over it is in flight gives unspecified (but memory-safe) results for
//! that traversal only.

use std::marker::PhantomData;

/// A read-only, structural view of a directed graph.
///
/// Implement this for any type that should be traversable. The crate ships
/// implementations for closures ([`from_fn`], [`from_fns`]), edge lists
/// ([`ListGraph`]) and the two adjacency structures
/// ([`PersistentGraph`](crate::graph::PersistentGraph),
/// [`MutableGraph`](crate::graph::MutableGraph)).
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::dfs, GraphView};
///
/// /// The infinite graph of naturals where `n -> n + 1`.
/// struct Naturals;
///
/// impl GraphView for Naturals {
///     type Vertex = u64;
///     type Edge = (u64, u64);
///
///     fn children(&self, vertex: &u64) -> impl Iterator<Item = (u64, u64)> {
///         std::iter::once((*vertex, *vertex + 1))
///     }
///
///     fn origin(&self, edge: &(u64, u64)) -> u64 {
///         edge.0
///     }
///
///     fn dest(&self, edge: &(u64, u64)) -> u64 {
///         edge.1
///     }
/// }
///
/// let first: Vec<u64> = dfs(&Naturals, [0]).take(4).collect();
/// assert_eq!(first, vec![0, 1, 2, 3]);
/// ```
pub trait GraphView {
    /// The vertex type. Cloned whenever a traversal needs to own a vertex.
    type Vertex: Clone;

    /// The edge type.
    type Edge;

    /// Returns the outgoing edges of `vertex`.
    fn children(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Edge>;

    /// Returns the source vertex of `edge`.
    fn origin(&self, edge: &Self::Edge) -> Self::Vertex;

    /// Returns the target vertex of `edge`.
    fn dest(&self, edge: &Self::Edge) -> Self::Vertex;
}

impl<G: GraphView + ?Sized> GraphView for &G {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn children(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Edge> {
        (**self).children(vertex)
    }

    fn origin(&self, edge: &Self::Edge) -> Self::Vertex {
        (**self).origin(edge)
    }

    fn dest(&self, edge: &Self::Edge) -> Self::Vertex {
        (**self).dest(edge)
    }
}

/// A concrete graph representation that can be mutated and viewed.
///
/// Exposes exactly the operations algorithms and their callers need from a stored
/// graph. How updates relate to views differs per representation:
///
/// - [`PersistentGraph`](crate::graph::PersistentGraph) hands out snapshots; later
///   updates do not affect a view taken earlier.
/// - [`MutableGraph`](crate::graph::MutableGraph) hands out shared handles; updates
///   are visible through every view immediately.
pub trait GraphStore {
    /// The vertex type.
    type Vertex: Clone;

    /// The graph view type returned by [`as_view`](GraphStore::as_view).
    type View: GraphView<Vertex = Self::Vertex>;

    /// Returns a view of the graph suitable for traversal.
    fn as_view(&self) -> Self::View;

    /// Inserts the edge `from -> to`.
    fn add_edge(&mut self, from: Self::Vertex, to: Self::Vertex);

    /// Removes `vertex` together with its outgoing edges.
    fn remove_vertex(&mut self, vertex: &Self::Vertex);
}

/// Edge types that know their own endpoints.
///
/// Implemented for plain `(origin, dest)` pairs and labeled `(origin, label, dest)`
/// triples, which is what [`ListGraph`] stores.
pub trait Endpoints {
    /// The vertex type at either end of the edge.
    type Vertex: Clone;

    /// Returns the source vertex.
    fn origin(&self) -> Self::Vertex;

    /// Returns the target vertex.
    fn dest(&self) -> Self::Vertex;
}

impl<V: Clone> Endpoints for (V, V) {
    type Vertex = V;

    fn origin(&self) -> V {
        self.0.clone()
    }

    fn dest(&self) -> V {
        self.1.clone()
    }
}

impl<V: Clone, L> Endpoints for (V, L, V) {
    type Vertex = V;

    fn origin(&self) -> V {
        self.0.clone()
    }

    fn dest(&self) -> V {
        self.2.clone()
    }
}

/// A graph view defined by a successor function.
///
/// Edges are `(vertex, successor)` pairs. Created by [`from_fn`].
pub struct FnGraph<V, F, I> {
    successors: F,
    _types: PhantomData<fn(&V) -> I>,
}

/// Builds a graph view from a successor function.
///
/// The function is called lazily, once per expanded vertex, so it may describe an
/// infinite graph.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::bfs, from_fn};
///
/// // Collatz successors
/// let graph = from_fn(|n: &u64| {
///     if *n <= 1 {
///         vec![]
///     } else if n % 2 == 0 {
///         vec![n / 2]
///     } else {
///         vec![3 * n + 1]
///     }
/// });
///
/// let path: Vec<u64> = bfs(&graph, [6]).collect();
/// assert_eq!(path, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
pub fn from_fn<V, F, I>(successors: F) -> FnGraph<V, F, I>
where
    V: Clone,
    F: Fn(&V) -> I,
    I: IntoIterator<Item = V>,
{
    FnGraph {
        successors,
        _types: PhantomData,
    }
}

impl<V, F, I> GraphView for FnGraph<V, F, I>
where
    V: Clone,
    F: Fn(&V) -> I,
    I: IntoIterator<Item = V>,
{
    type Vertex = V;
    type Edge = (V, V);

    fn children(&self, vertex: &V) -> impl Iterator<Item = (V, V)> {
        let origin = vertex.clone();
        (self.successors)(vertex)
            .into_iter()
            .map(move |dest| (origin.clone(), dest))
    }

    fn origin(&self, edge: &(V, V)) -> V {
        edge.0.clone()
    }

    fn dest(&self, edge: &(V, V)) -> V {
        edge.1.clone()
    }
}

/// A graph view assembled from three independent closures. Created by [`from_fns`].
pub struct FnsGraph<V, E, C, O, D, I> {
    children: C,
    origin: O,
    dest: D,
    _types: PhantomData<fn(&V, &E) -> I>,
}

/// Builds a graph view from explicit `children`, `origin` and `dest` functions.
///
/// This is the most general adapter: edges can be any type, for example indices into
/// an external edge table.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::dfs, from_fns};
///
/// let edges = [(0u8, 1u8), (0, 2), (2, 3)];
/// let graph = from_fns(
///     |v: &u8| (0..edges.len()).filter(|&i| edges[i].0 == *v).collect::<Vec<_>>(),
///     |e: &usize| edges[*e].0,
///     |e: &usize| edges[*e].1,
/// );
///
/// let mut order: Vec<u8> = dfs(&graph, [0]).collect();
/// order.sort();
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
pub fn from_fns<V, E, C, O, D, I>(
    children: C,
    origin: O,
    dest: D,
) -> FnsGraph<V, E, C, O, D, I>
where
    V: Clone,
    C: Fn(&V) -> I,
    I: IntoIterator<Item = E>,
    O: Fn(&E) -> V,
    D: Fn(&E) -> V,
{
    FnsGraph {
        children,
        origin,
        dest,
        _types: PhantomData,
    }
}

impl<V, E, C, O, D, I> GraphView for FnsGraph<V, E, C, O, D, I>
where
    V: Clone,
    C: Fn(&V) -> I,
    I: IntoIterator<Item = E>,
    O: Fn(&E) -> V,
    D: Fn(&E) -> V,
{
    type Vertex = V;
    type Edge = E;

    fn children(&self, vertex: &V) -> impl Iterator<Item = E> {
        (self.children)(vertex).into_iter()
    }

    fn origin(&self, edge: &E) -> V {
        (self.origin)(edge)
    }

    fn dest(&self, edge: &E) -> V {
        (self.dest)(edge)
    }
}

/// A graph view over a flat edge list.
///
/// `children` scans the whole list, which is fine for small or test graphs. Edges can
/// be `(origin, dest)` pairs or `(origin, label, dest)` triples.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::dijkstra_with, ListGraph};
///
/// let graph = ListGraph::new(vec![(1, 2u64, 2), (1, 5, 3), (2, 1, 3)]);
/// let reached: Vec<(i32, u64)> = dijkstra_with(&graph, [1], |e| e.1)
///     .map(|step| (step.vertex, step.distance))
///     .collect();
///
/// assert_eq!(reached, vec![(1, 0), (2, 2), (3, 3)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGraph<E> {
    edges: Vec<E>,
}

impl<E> ListGraph<E> {
    /// Creates a view over the given edges.
    #[must_use]
    pub fn new(edges: Vec<E>) -> Self {
        ListGraph { edges }
    }

    /// Returns the underlying edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the list has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<E> FromIterator<E> for ListGraph<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        ListGraph::new(iter.into_iter().collect())
    }
}

impl<E> GraphView for ListGraph<E>
where
    E: Endpoints + Clone,
    E::Vertex: PartialEq,
{
    type Vertex = E::Vertex;
    type Edge = E;

    fn children(&self, vertex: &E::Vertex) -> impl Iterator<Item = E> {
        self.edges
            .iter()
            .filter(move |edge| Endpoints::origin(*edge) == *vertex)
            .cloned()
    }

    fn origin(&self, edge: &E) -> E::Vertex {
        Endpoints::origin(edge)
    }

    fn dest(&self, edge: &E) -> E::Vertex {
        Endpoints::dest(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_edges() {
        let graph = from_fn(|v: &u32| vec![v + 1, v + 2]);
        let edges: Vec<(u32, u32)> = graph.children(&10).collect();
        assert_eq!(edges, vec![(10, 11), (10, 12)]);
        assert_eq!(graph.origin(&edges[0]), 10);
        assert_eq!(graph.dest(&edges[1]), 12);
    }

    #[test]
    fn test_from_fns_custom_edges() {
        let table = vec![("a", "b"), ("a", "c"), ("b", "c")];
        let graph = from_fns(
            |v: &&str| {
                table
                    .iter()
                    .enumerate()
                    .filter(|(_, (src, _))| src == v)
                    .map(|(i, _)| i)
                    .collect::<Vec<_>>()
            },
            |e: &usize| table[*e].0,
            |e: &usize| table[*e].1,
        );

        let children: Vec<usize> = graph.children(&"a").collect();
        assert_eq!(children, vec![0, 1]);
        assert_eq!(graph.dest(&1), "c");
        assert_eq!(graph.origin(&2), "b");
    }

    #[test]
    fn test_list_graph_pairs() {
        let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 3)]);
        assert_eq!(graph.len(), 3);
        assert!(!graph.is_empty());

        let children: Vec<(i32, i32)> = graph.children(&1).collect();
        assert_eq!(children, vec![(1, 2), (1, 3)]);
        assert_eq!(graph.children(&3).count(), 0);
    }

    #[test]
    fn test_list_graph_labeled() {
        let graph: ListGraph<(char, &str, char)> =
            vec![('a', "x", 'b'), ('b', "y", 'c')].into_iter().collect();

        let children: Vec<_> = graph.children(&'b').collect();
        assert_eq!(children, vec![('b', "y", 'c')]);
        assert_eq!(graph.origin(&children[0]), 'b');
        assert_eq!(graph.dest(&children[0]), 'c');
    }

    #[test]
    fn test_reference_view() {
        let graph = ListGraph::new(vec![(1, 2)]);
        let by_ref = &graph;
        assert_eq!(GraphView::children(&by_ref, &1).count(), 1);
    }
}
