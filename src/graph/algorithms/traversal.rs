//! The generic traversal engine and its depth-first/breadth-first instantiations.
//!
//! All vertex-producing searches in this crate are the same loop:
//!
//! 1. Push every seed that is not yet marked into the frontier, marking it.
//! 2. Pop a vertex from the frontier and yield it.
//! 3. Before yielding, push every unmarked successor, marking it.
//!
//! Only the frontier differs between searches: a [`Lifo`] gives depth-first order, a
//! [`Fifo`] gives breadth-first order and a [`Heap`](crate::graph::Heap) gives
//! best-first order. Marking happens at push time, so a vertex is never in the frontier
//! twice and is yielded at most once per traversal, whichever table backs the marks.
//!
//! # Laziness
//!
//! [`Traversal`] does no work until the first element is requested, and each request
//! expands exactly one vertex. Infinite graphs are fine as long as the consumer stops
//! pulling. The seeds themselves are drained on the first request and must be finite.

use std::hash::Hash;

use crate::{
    graph::{Bag, Fifo, GraphView, HashTable, Lifo, Table, TableTags, TagSet},
    Sequence,
};

/// The iterator behind every table- or tag-driven traversal.
///
/// Created by [`traverse`], [`traverse_tag`], [`dfs`], [`bfs`], [`dfs_tag`] and
/// [`bfs_tag`], always wrapped in a single-consumption [`Sequence`].
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph view reference
/// * `G` - Graph view type
/// * `B` - Frontier bag
/// * `T` - Tag set holding the visited marks
/// * `I` - Seed iterator
pub struct Traversal<'g, G, B, T, I>
where
    G: GraphView,
{
    graph: &'g G,
    bag: B,
    tags: T,
    seeds: Option<I>,
    yielded: usize,
}

impl<'g, G, B, T, I> Traversal<'g, G, B, T, I>
where
    G: GraphView,
    B: Bag<G::Vertex>,
    T: TagSet<G::Vertex>,
    I: Iterator<Item = G::Vertex>,
{
    fn new(graph: &'g G, bag: B, tags: T, seeds: I) -> Self {
        Traversal {
            graph,
            bag,
            tags,
            seeds: Some(seeds),
            yielded: 0,
        }
    }

    fn discover(&mut self, vertex: G::Vertex) {
        if !self.tags.get_tag(&vertex) {
            self.tags.set_tag(&vertex);
            self.bag.push(vertex);
        }
    }
}

impl<G, B, T, I> Iterator for Traversal<'_, G, B, T, I>
where
    G: GraphView,
    B: Bag<G::Vertex>,
    T: TagSet<G::Vertex>,
    I: Iterator<Item = G::Vertex>,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(seeds) = self.seeds.take() {
            for seed in seeds {
                self.discover(seed);
            }
        }

        if self.bag.is_empty() {
            log::trace!("traversal exhausted after {} vertices", self.yielded);
            return None;
        }
        let vertex = self.bag.pop().ok()?;

        let graph = self.graph;
        for edge in graph.children(&vertex) {
            self.discover(graph.dest(&edge));
        }

        self.yielded += 1;
        Some(vertex)
    }
}

/// The sequence returned by [`traverse`].
pub type TableTraversal<'g, G, B, T, I> = Sequence<Traversal<'g, G, B, TableTags<T>, I>>;

/// The sequence returned by [`dfs`].
pub type Dfs<'g, G, I> = TableTraversal<
    'g,
    G,
    Lifo<<G as GraphView>::Vertex>,
    HashTable<<G as GraphView>::Vertex, ()>,
    I,
>;

/// The sequence returned by [`bfs`].
pub type Bfs<'g, G, I> = TableTraversal<
    'g,
    G,
    Fifo<<G as GraphView>::Vertex>,
    HashTable<<G as GraphView>::Vertex, ()>,
    I,
>;

/// Runs the generic traversal with an explicit frontier and visited table.
///
/// # Arguments
///
/// * `graph` - The graph view to traverse
/// * `bag` - The frontier; its ordering decides the traversal order
/// * `visited` - A fresh table for visited marks, owned by this traversal
/// * `seeds` - Finite sequence of starting vertices
///
/// # Returns
///
/// A single-consumption sequence of every vertex reachable from the seeds, in pop order.
///
/// # Complexity
///
/// - Time: O(V + E) table operations over the reachable subgraph
/// - Space: O(V) for the table and frontier
///
/// # Examples
///
/// ```rust
/// use lazygraph::{
///     algorithms::traverse,
///     graph::{Fifo, OrdTable},
///     ListGraph,
/// };
///
/// let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 4)]);
/// let order: Vec<i32> = traverse(&graph, Fifo::new(), OrdTable::new(), [1]).collect();
/// assert_eq!(order, vec![1, 2, 3, 4]);
/// ```
pub fn traverse<G, B, T, S>(
    graph: &G,
    bag: B,
    visited: T,
    seeds: S,
) -> TableTraversal<'_, G, B, T, S::IntoIter>
where
    G: GraphView,
    B: Bag<G::Vertex>,
    T: Table<G::Vertex, ()>,
    S: IntoIterator<Item = G::Vertex>,
{
    traverse_tag(graph, bag, TableTags::new(visited), seeds)
}

/// Runs the generic traversal with visited marks kept in a caller-supplied [`TagSet`].
///
/// Identical to [`traverse`] except for where the marks live, which lets vertices carry
/// their own mark.
///
/// # Examples
///
/// ```rust
/// use std::{cell::Cell, rc::Rc};
///
/// use lazygraph::{
///     algorithms::traverse_tag,
///     graph::{from_fn, FnTagSet, Lifo},
/// };
///
/// struct Node {
///     id: u8,
///     next: Vec<Rc<Node>>,
///     seen: Cell<bool>,
/// }
///
/// let leaf = Rc::new(Node { id: 2, next: vec![], seen: Cell::new(false) });
/// let root = Rc::new(Node { id: 1, next: vec![leaf.clone(), leaf], seen: Cell::new(false) });
///
/// let graph = from_fn(|n: &Rc<Node>| n.next.clone());
/// let tags = FnTagSet::new(|n: &Rc<Node>| n.seen.get(), |n: &Rc<Node>| n.seen.set(true));
///
/// let ids: Vec<u8> = traverse_tag(&graph, Lifo::new(), tags, [root]).map(|n| n.id).collect();
/// assert_eq!(ids, vec![1, 2]);
/// ```
pub fn traverse_tag<G, B, T, S>(
    graph: &G,
    bag: B,
    tags: T,
    seeds: S,
) -> Sequence<Traversal<'_, G, B, T, S::IntoIter>>
where
    G: GraphView,
    B: Bag<G::Vertex>,
    T: TagSet<G::Vertex>,
    S: IntoIterator<Item = G::Vertex>,
{
    Sequence::new(Traversal::new(graph, bag, tags, seeds.into_iter()))
}

/// Depth-first traversal from the given seeds.
///
/// Uses a [`Lifo`] frontier and a hash table of visited vertices. Each reachable
/// vertex is yielded exactly once, in pop order: the most recently discovered
/// vertex is expanded first.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::dfs, ListGraph};
///
/// let graph = ListGraph::new(vec![('a', 'b'), ('a', 'c'), ('b', 'd')]);
/// let order: Vec<char> = dfs(&graph, ['a']).collect();
///
/// assert_eq!(order[0], 'a');
/// assert_eq!(order.len(), 4);
/// ```
pub fn dfs<G, S>(graph: &G, seeds: S) -> Dfs<'_, G, S::IntoIter>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    S: IntoIterator<Item = G::Vertex>,
{
    traverse(graph, Lifo::new(), HashTable::new(), seeds)
}

/// Breadth-first traversal from the given seeds.
///
/// Uses a [`Fifo`] frontier and a hash table of visited vertices. Vertices are
/// yielded by increasing number of edges from the nearest seed.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::bfs, ListGraph};
///
/// let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
/// let order: Vec<i32> = bfs(&graph, [1]).collect();
/// assert_eq!(order, vec![1, 2, 3, 4]);
/// ```
pub fn bfs<G, S>(graph: &G, seeds: S) -> Bfs<'_, G, S::IntoIter>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    S: IntoIterator<Item = G::Vertex>,
{
    traverse(graph, Fifo::new(), HashTable::new(), seeds)
}

/// Depth-first traversal with marks kept in `tags`.
pub fn dfs_tag<G, T, S>(
    graph: &G,
    tags: T,
    seeds: S,
) -> Sequence<Traversal<'_, G, Lifo<G::Vertex>, T, S::IntoIter>>
where
    G: GraphView,
    T: TagSet<G::Vertex>,
    S: IntoIterator<Item = G::Vertex>,
{
    traverse_tag(graph, Lifo::new(), tags, seeds)
}

/// Breadth-first traversal with marks kept in `tags`.
pub fn bfs_tag<G, T, S>(
    graph: &G,
    tags: T,
    seeds: S,
) -> Sequence<Traversal<'_, G, Fifo<G::Vertex>, T, S::IntoIter>>
where
    G: GraphView,
    T: TagSet<G::Vertex>,
    S: IntoIterator<Item = G::Vertex>,
{
    traverse_tag(graph, Fifo::new(), tags, seeds)
}
