//! Single-source (or multi-source) shortest paths.
//!
//! The frontier is a [`Heap`] of tentative entries ordered by accumulated distance.
//! A vertex may sit in the heap several times with different tentative distances;
//! it is marked done, and yielded, the first time it is popped, and later entries for
//! it are dropped. Distances are therefore final when a vertex is yielded, provided
//! every edge distance is at least 1.

use std::hash::Hash;

use imbl::Vector;

use crate::{
    graph::{Bag, GraphView, HashTable, Heap, Table},
    Sequence,
};

/// A vertex reached by [`dijkstra`], with its shortest distance and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reached<V, E: Clone> {
    /// The reached vertex
    pub vertex: V,
    /// Sum of edge distances along `path`; 0 for a seed
    pub distance: u64,
    /// Edges from the nearest seed to `vertex`
    pub path: Vector<E>,
}

type Order<V, E> = fn(&Reached<V, E>, &Reached<V, E>) -> bool;

fn by_distance<V, E: Clone>(a: &Reached<V, E>, b: &Reached<V, E>) -> bool {
    a.distance <= b.distance
}

/// Iterator behind [`dijkstra`] and [`dijkstra_with`].
pub struct ShortestPaths<'g, G, F, T, I>
where
    G: GraphView,
    G::Edge: Clone,
{
    graph: &'g G,
    distance: F,
    frontier: Heap<Reached<G::Vertex, G::Edge>, Order<G::Vertex, G::Edge>>,
    done: T,
    seeds: Option<I>,
}

impl<G, F, T, I> Iterator for ShortestPaths<'_, G, F, T, I>
where
    G: GraphView,
    G::Edge: Clone,
    F: Fn(&G::Edge) -> u64,
    T: Table<G::Vertex, ()>,
    I: Iterator<Item = G::Vertex>,
{
    type Item = Reached<G::Vertex, G::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(seeds) = self.seeds.take() {
            for vertex in seeds {
                self.frontier.push(Reached {
                    vertex,
                    distance: 0,
                    path: Vector::new(),
                });
            }
        }

        while !self.frontier.is_empty() {
            let reached = self.frontier.pop().ok()?;
            if self.done.contains(&reached.vertex) {
                continue;
            }
            self.done.set(reached.vertex.clone(), ());

            let graph = self.graph;
            for edge in graph.children(&reached.vertex) {
                let dest = graph.dest(&edge);
                if self.done.contains(&dest) {
                    continue;
                }

                let distance = reached.distance.saturating_add((self.distance)(&edge));
                let mut path = reached.path.clone();
                path.push_back(edge);
                self.frontier.push(Reached {
                    vertex: dest,
                    distance,
                    path,
                });
            }

            log::trace!("dijkstra settled a vertex at distance {}", reached.distance);
            return Some(reached);
        }
        None
    }
}

/// Shortest paths where every edge has distance 1.
///
/// Equivalent to [`dijkstra_with`] with `|_| 1`: distances are hop counts.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::dijkstra, ListGraph};
///
/// let graph = ListGraph::new(vec![('a', 'b'), ('b', 'c'), ('a', 'c')]);
/// let hops: Vec<(char, u64)> = dijkstra(&graph, ['a'])
///     .map(|r| (r.vertex, r.distance))
///     .collect();
/// assert_eq!(hops, vec![('a', 0), ('b', 1), ('c', 1)]);
/// ```
pub fn dijkstra<G, S>(
    graph: &G,
    seeds: S,
) -> Sequence<
    ShortestPaths<'_, G, fn(&G::Edge) -> u64, HashTable<G::Vertex, ()>, S::IntoIter>,
>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
{
    dijkstra_with(graph, seeds, unit_distance::<G::Edge> as fn(&G::Edge) -> u64)
}

fn unit_distance<E>(_: &E) -> u64 {
    1
}

/// Shortest paths under a caller-supplied edge distance.
///
/// Vertices are yielded in order of increasing distance from the nearest seed, each
/// together with one shortest path. Ties are broken by the order entries were pushed
/// into the frontier.
///
/// # Arguments
///
/// * `graph` - The graph view to search
/// * `seeds` - Starting vertices, all at distance 0
/// * `distance` - Edge distance. Must be at least 1 for every edge; zero distances
///   break the ordering guarantee.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::dijkstra_with, ListGraph};
///
/// let graph = ListGraph::new(vec![(1, 2u64, 2), (1, 5, 3), (2, 1, 3)]);
/// let to_three = dijkstra_with(&graph, [1], |e| e.1)
///     .find(|r| r.vertex == 3)
///     .unwrap();
///
/// assert_eq!(to_three.distance, 3);
/// assert_eq!(to_three.path.len(), 2);
/// ```
pub fn dijkstra_with<G, S, F>(
    graph: &G,
    seeds: S,
    distance: F,
) -> Sequence<ShortestPaths<'_, G, F, HashTable<G::Vertex, ()>, S::IntoIter>>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
    F: Fn(&G::Edge) -> u64,
{
    Sequence::new(ShortestPaths {
        graph,
        distance,
        frontier: Heap::new(by_distance::<G::Vertex, G::Edge> as Order<G::Vertex, G::Edge>),
        done: HashTable::new(),
        seeds: Some(seeds.into_iter()),
    })
}
