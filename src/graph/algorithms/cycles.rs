//! Cycle detection.

use std::hash::Hash;

use crate::graph::{
    algorithms::events::{dfs_events, EdgeKind},
    GraphView,
};

/// Checks whether the subgraph reachable from `seeds` is acyclic.
///
/// Stops at the first back edge of the depth-first event trace, so a cycle near the
/// seeds is found without walking the rest of the graph.
///
/// # Arguments
///
/// * `graph` - The graph view to check
/// * `seeds` - Starting vertices
///
/// # Returns
///
/// `true` if no cycle is reachable from any seed, `false` otherwise.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::is_dag, ListGraph};
///
/// let cyclic = ListGraph::new(vec![(1, 2), (2, 3), (3, 1)]);
/// assert!(!is_dag(&cyclic, [1]));
///
/// let chain = ListGraph::new(vec![(1, 2), (2, 3)]);
/// assert!(is_dag(&chain, [1]));
/// ```
pub fn is_dag<G, S>(graph: &G, seeds: S) -> bool
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
{
    !dfs_events(graph, seeds).any(|event| event.kind() == Some(EdgeKind::Back))
}
