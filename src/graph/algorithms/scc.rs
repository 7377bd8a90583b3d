//! Strongly Connected Components (SCC) using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that there is a
//! path from every vertex to every other vertex in the set.
//!
//! The search is Tarjan's single-pass algorithm, run over an explicit frame stack and
//! exposed as a lazy sequence: each pull advances the depth-first walk just far enough
//! to close the next component.
//!
//! Successors are collected when a vertex is first visited, so every reachable vertex
//! must have finitely many outgoing edges.
//!
//! # Use Cases
//!
//! - **Recursion detection**: functions that can call each other form an SCC
//! - **Dependency analysis**: circular dependency groups
//! - **Condensation**: collapsing cycles to get a DAG of components

use std::{hash::Hash, vec};

use crate::{
    graph::{GraphView, HashTable, Table},
    Sequence,
};

/// Per-vertex state kept by [`Components`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SccMark {
    /// Discovery index
    pub index: usize,
    /// Whether the vertex is on the stack of unresolved vertices
    pub on_stack: bool,
}

struct Frame<V> {
    index: usize,
    lowlink: usize,
    /// Position of `vertex` on the unresolved stack
    base: usize,
    successors: vec::IntoIter<V>,
}

/// Iterator behind [`scc`] and [`scc_with`].
pub struct Components<'g, G, T, I>
where
    G: GraphView,
{
    graph: &'g G,
    marks: T,
    seeds: I,
    frames: Vec<Frame<G::Vertex>>,
    /// Vertices visited but not yet assigned to a component
    unresolved: Vec<G::Vertex>,
    next_index: usize,
    emitted: usize,
}

impl<G, T, I> Components<'_, G, T, I>
where
    G: GraphView,
    T: Table<G::Vertex, SccMark>,
    I: Iterator<Item = G::Vertex>,
{
    fn visit(&mut self, vertex: G::Vertex) {
        let index = self.next_index;
        self.next_index += 1;

        let graph = self.graph;
        let successors: Vec<G::Vertex> = graph
            .children(&vertex)
            .map(|edge| graph.dest(&edge))
            .collect();

        self.marks.set(
            vertex.clone(),
            SccMark {
                index,
                on_stack: true,
            },
        );
        self.frames.push(Frame {
            index,
            lowlink: index,
            base: self.unresolved.len(),
            successors: successors.into_iter(),
        });
        self.unresolved.push(vertex);
    }

    /// Pops the component rooted at `base` off the unresolved stack.
    fn resolve(&mut self, base: usize) -> Vec<G::Vertex> {
        let component = self.unresolved.split_off(base);
        for vertex in &component {
            if let Ok(mut mark) = self.marks.get(vertex).copied() {
                mark.on_stack = false;
                self.marks.set(vertex.clone(), mark);
            }
        }
        self.emitted += 1;
        component
    }
}

impl<G, T, I> Iterator for Components<'_, G, T, I>
where
    G: GraphView,
    T: Table<G::Vertex, SccMark>,
    I: Iterator<Item = G::Vertex>,
{
    type Item = Vec<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(frame) = self.frames.last_mut() else {
                let Some(seed) = self.seeds.next() else {
                    log::debug!("scc search produced {} components", self.emitted);
                    return None;
                };
                if !self.marks.contains(&seed) {
                    self.visit(seed);
                }
                continue;
            };

            if let Some(successor) = frame.successors.next() {
                match self.marks.get(&successor).ok().copied() {
                    None => self.visit(successor),
                    Some(mark) if mark.on_stack => frame.lowlink = frame.lowlink.min(mark.index),
                    Some(_) => {}
                }
                continue;
            }

            let finished = self.frames.pop()?;
            if let Some(parent) = self.frames.last_mut() {
                parent.lowlink = parent.lowlink.min(finished.lowlink);
            }
            if finished.lowlink == finished.index {
                return Some(self.resolve(finished.base));
            }
        }
    }
}

/// Computes the strongly connected components reachable from `seeds`.
///
/// # Arguments
///
/// * `graph` - The graph view to analyze
/// * `seeds` - Starting vertices
///
/// # Returns
///
/// A lazy, single-consumption sequence of components. Every reachable vertex is in
/// exactly one component. Components come in **reverse topological order** of the
/// condensed graph: if a component has an edge into another component, the other
/// one is yielded first. Within a component, vertices are listed in discovery order.
///
/// Every reachable vertex must have finitely many outgoing edges.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::scc, ListGraph};
///
/// // a -> b -> c -> a, c -> d
/// let graph = ListGraph::new(vec![('a', 'b'), ('b', 'c'), ('c', 'a'), ('c', 'd')]);
/// let components: Vec<Vec<char>> = scc(&graph, ['a']).collect();
///
/// assert_eq!(components, vec![vec!['d'], vec!['a', 'b', 'c']]);
/// ```
pub fn scc<G, S>(
    graph: &G,
    seeds: S,
) -> Sequence<Components<'_, G, HashTable<G::Vertex, SccMark>, S::IntoIter>>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    S: IntoIterator<Item = G::Vertex>,
{
    scc_with(graph, HashTable::new(), seeds)
}

/// Computes strongly connected components, keeping per-vertex state in `marks`.
pub fn scc_with<G, T, S>(
    graph: &G,
    marks: T,
    seeds: S,
) -> Sequence<Components<'_, G, T, S::IntoIter>>
where
    G: GraphView,
    T: Table<G::Vertex, SccMark>,
    S: IntoIterator<Item = G::Vertex>,
{
    Sequence::new(Components {
        graph,
        marks,
        seeds: seeds.into_iter(),
        frames: Vec::new(),
        unresolved: Vec::new(),
        next_index: 0,
        emitted: 0,
    })
}
