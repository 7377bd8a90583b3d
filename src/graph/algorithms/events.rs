//! Depth-first event trace.
//!
//! [`dfs_events`] walks the graph depth-first and reports everything it does as a
//! stream of [`TraversalEvent`]s: entering a vertex, leaving it, and every edge it
//! inspects together with that edge's classification against the current DFS tree.
//! Topological sorting, cycle checks, pre/post orders and the DOT exporter are all
//! read off this one trace.
//!
//! The walk keeps an explicit stack of frames instead of recursing, so the depth of
//! the graph is bounded by memory and not by the call stack.
//!
//! Each frame copies out the outgoing edges of its vertex when the vertex is entered.
//! The graph may be infinite, but every vertex the walk enters must have finitely many
//! outgoing edges.

use std::{hash::Hash, iter::FilterMap, vec};

use imbl::Vector;
use strum::Display;

use crate::{
    graph::{GraphView, HashTable, Table},
    Sequence,
};

/// Classification of an edge relative to the depth-first tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EdgeKind {
    /// The destination was undiscovered and becomes a child in the tree.
    Forward,
    /// The destination is an ancestor still on the DFS stack. Witnesses a cycle.
    Back,
    /// The destination was already finished, in this or an earlier subtree.
    Cross,
}

/// One step of a depth-first walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent<V, E: Clone> {
    /// The walk reached `vertex` for the first time.
    Enter {
        /// The vertex being entered
        vertex: V,
        /// Discovery index, counting from 0 across all seeds of one walk
        index: usize,
        /// Tree edges from the seed this vertex was reached from
        path: Vector<E>,
    },
    /// All edges out of the vertex have been inspected.
    Exit(V),
    /// An outgoing edge of the vertex currently on top of the stack.
    Edge(E, EdgeKind),
}

impl<V, E: Clone> TraversalEvent<V, E> {
    /// Returns the vertex of an `Enter` or `Exit` event.
    pub fn vertex(&self) -> Option<&V> {
        match self {
            TraversalEvent::Enter { vertex, .. } | TraversalEvent::Exit(vertex) => Some(vertex),
            TraversalEvent::Edge(..) => None,
        }
    }

    /// Returns the edge of an `Edge` event.
    pub fn edge(&self) -> Option<&E> {
        match self {
            TraversalEvent::Edge(edge, _) => Some(edge),
            _ => None,
        }
    }

    /// Returns the classification of an `Edge` event.
    pub fn kind(&self) -> Option<EdgeKind> {
        match self {
            TraversalEvent::Edge(_, kind) => Some(*kind),
            _ => None,
        }
    }

    /// Returns the vertex if this is an `Enter` event.
    pub fn entered(self) -> Option<V> {
        match self {
            TraversalEvent::Enter { vertex, .. } => Some(vertex),
            _ => None,
        }
    }

    /// Returns the vertex if this is an `Exit` event.
    pub fn exited(self) -> Option<V> {
        match self {
            TraversalEvent::Exit(vertex) => Some(vertex),
            _ => None,
        }
    }
}

/// Per-vertex state kept by the event walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsState {
    /// Entered but not yet exited
    Active,
    /// Exited
    Finished,
}

struct Frame<V, E: Clone> {
    vertex: V,
    children: vec::IntoIter<E>,
    path: Vector<E>,
}

/// Iterator behind [`dfs_events`] and [`dfs_events_with`].
pub struct DfsEvents<'g, G, T, I>
where
    G: GraphView,
    G::Edge: Clone,
{
    graph: &'g G,
    states: T,
    seeds: I,
    stack: Vec<Frame<G::Vertex, G::Edge>>,
    pending: Option<TraversalEvent<G::Vertex, G::Edge>>,
    discovered: usize,
}

impl<G, T, I> DfsEvents<'_, G, T, I>
where
    G: GraphView,
    G::Edge: Clone,
    T: Table<G::Vertex, DfsState>,
    I: Iterator<Item = G::Vertex>,
{
    fn enter(
        &mut self,
        vertex: G::Vertex,
        path: Vector<G::Edge>,
    ) -> TraversalEvent<G::Vertex, G::Edge> {
        let index = self.discovered;
        self.discovered += 1;
        log::trace!("dfs enter #{index} at depth {}", path.len());

        let children: Vec<G::Edge> = self.graph.children(&vertex).collect();
        self.states.set(vertex.clone(), DfsState::Active);
        self.stack.push(Frame {
            vertex: vertex.clone(),
            children: children.into_iter(),
            path: path.clone(),
        });

        TraversalEvent::Enter {
            vertex,
            index,
            path,
        }
    }
}

impl<G, T, I> Iterator for DfsEvents<'_, G, T, I>
where
    G: GraphView,
    G::Edge: Clone,
    T: Table<G::Vertex, DfsState>,
    I: Iterator<Item = G::Vertex>,
{
    type Item = TraversalEvent<G::Vertex, G::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                let seed = self.seeds.next()?;
                if self.states.contains(&seed) {
                    continue;
                }
                return Some(self.enter(seed, Vector::new()));
            };

            let Some(edge) = frame.children.next() else {
                let frame = self.stack.pop()?;
                self.states.set(frame.vertex.clone(), DfsState::Finished);
                return Some(TraversalEvent::Exit(frame.vertex));
            };

            let dest = self.graph.dest(&edge);
            let kind = match self.states.get(&dest).ok().copied() {
                Some(DfsState::Active) => EdgeKind::Back,
                Some(DfsState::Finished) => EdgeKind::Cross,
                None => {
                    let mut path = frame.path.clone();
                    path.push_back(edge.clone());
                    let enter = self.enter(dest, path);
                    self.pending = Some(enter);
                    EdgeKind::Forward
                }
            };
            return Some(TraversalEvent::Edge(edge, kind));
        }
    }
}

/// The sequence returned by [`dfs_events`].
pub type Events<'g, G, I> =
    Sequence<DfsEvents<'g, G, HashTable<<G as GraphView>::Vertex, DfsState>, I>>;

/// Depth-first event trace from the given seeds.
///
/// Seeds are walked in order; a seed already reached from an earlier seed is
/// skipped. For every vertex the trace contains exactly one `Enter` and one `Exit`,
/// and every edge out of a reachable vertex appears exactly once as an `Edge` event.
/// A `Forward` edge is immediately followed by the `Enter` of its destination.
///
/// `children` is called once per entered vertex and must yield finitely many edges.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{
///     algorithms::{dfs_events, EdgeKind, TraversalEvent},
///     ListGraph,
/// };
///
/// let graph = ListGraph::new(vec![(1, 2), (2, 1)]);
/// let kinds: Vec<EdgeKind> = dfs_events(&graph, [1]).filter_map(|e| e.kind()).collect();
/// assert_eq!(kinds, vec![EdgeKind::Forward, EdgeKind::Back]);
///
/// let last = dfs_events(&graph, [1]).last();
/// assert_eq!(last, Some(TraversalEvent::Exit(1)));
/// ```
pub fn dfs_events<G, S>(graph: &G, seeds: S) -> Events<'_, G, S::IntoIter>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
{
    dfs_events_with(graph, HashTable::new(), seeds)
}

/// Depth-first event trace keeping per-vertex state in the given table.
pub fn dfs_events_with<G, T, S>(
    graph: &G,
    states: T,
    seeds: S,
) -> Sequence<DfsEvents<'_, G, T, S::IntoIter>>
where
    G: GraphView,
    G::Edge: Clone,
    T: Table<G::Vertex, DfsState>,
    S: IntoIterator<Item = G::Vertex>,
{
    Sequence::new(DfsEvents {
        graph,
        states,
        seeds: seeds.into_iter(),
        stack: Vec::new(),
        pending: None,
        discovered: 0,
    })
}

type Projection<G> = fn(
    TraversalEvent<<G as GraphView>::Vertex, <G as GraphView>::Edge>,
) -> Option<<G as GraphView>::Vertex>;

/// The sequence returned by [`prefix`] and [`postfix`].
pub type Order<'g, G, I> = Sequence<
    FilterMap<DfsEvents<'g, G, HashTable<<G as GraphView>::Vertex, DfsState>, I>, Projection<G>>,
>;

/// Depth-first preorder: vertices in the order they are entered.
///
/// Unlike [`dfs`](super::dfs), a vertex is listed when the walk descends into it, so
/// children appear in edge order.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::prefix, ListGraph};
///
/// let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 4)]);
/// let order: Vec<i32> = prefix(&graph, [1]).collect();
/// assert_eq!(order, vec![1, 2, 4, 3]);
/// ```
pub fn prefix<G, S>(graph: &G, seeds: S) -> Order<'_, G, S::IntoIter>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
{
    let project: Projection<G> = TraversalEvent::entered;
    Sequence::new(dfs_events(graph, seeds).into_inner().filter_map(project))
}

/// Depth-first postorder: vertices in the order they are exited.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::postfix, ListGraph};
///
/// let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 4)]);
/// let order: Vec<i32> = postfix(&graph, [1]).collect();
/// assert_eq!(order, vec![4, 2, 3, 1]);
/// ```
pub fn postfix<G, S>(graph: &G, seeds: S) -> Order<'_, G, S::IntoIter>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
{
    let project: Projection<G> = TraversalEvent::exited;
    Sequence::new(dfs_events(graph, seeds).into_inner().filter_map(project))
}
