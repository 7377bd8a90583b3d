//! Topological sorting of the subgraph reachable from a set of seeds.
//!
//! The order is read off the depth-first event trace: a vertex exits only after
//! every vertex reachable from it has exited, so reversed exit order places every
//! edge's origin before its destination. A back edge anywhere in the trace means the
//! reachable subgraph has a cycle, and the sort fails instead of returning a partial
//! order.
//!
//! # Use Cases
//!
//! - Dependency resolution (build steps, package installation)
//! - Scheduling tasks with precedence constraints
//! - Ordering data flow iterations

use std::hash::Hash;

use crate::{
    graph::{
        algorithms::events::{dfs_events, EdgeKind, TraversalEvent},
        GraphView,
    },
    Error, Result,
};

/// Options for [`topo_sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopoOptions {
    /// Order as if every edge pointed the other way: destinations before origins.
    pub rev: bool,
}

impl TopoOptions {
    /// Creates the default options: origins before destinations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the ordering is reversed.
    ///
    /// # Arguments
    ///
    /// * `rev` - `true` to place every destination before its origin
    ///
    /// # Returns
    ///
    /// The modified options (builder pattern).
    #[must_use]
    pub fn with_rev(mut self, rev: bool) -> Self {
        self.rev = rev;
        self
    }
}

/// Computes a topological ordering of the vertices reachable from `seeds`.
///
/// # Arguments
///
/// * `graph` - The graph view to sort
/// * `seeds` - Starting vertices; only their reachable subgraph is ordered
/// * `options` - See [`TopoOptions`]
///
/// # Returns
///
/// Every reachable vertex exactly once, such that for each edge `v -> w` between
/// reachable vertices `v` comes before `w` (or after it, with `rev`).
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] if the reachable subgraph contains a cycle.
///
/// # Complexity
///
/// - Time: O(V + E) over the reachable subgraph
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::{topo_sort, TopoOptions}, ListGraph};
///
/// let graph = ListGraph::new(vec![("shirt", "tie"), ("tie", "jacket"), ("shirt", "jacket")]);
///
/// let order = topo_sort(&graph, ["shirt"], TopoOptions::default())?;
/// assert_eq!(order, vec!["shirt", "tie", "jacket"]);
///
/// let undo = topo_sort(&graph, ["shirt"], TopoOptions::new().with_rev(true))?;
/// assert_eq!(undo, vec!["jacket", "tie", "shirt"]);
/// # Ok::<(), lazygraph::Error>(())
/// ```
pub fn topo_sort<G, S>(graph: &G, seeds: S, options: TopoOptions) -> Result<Vec<G::Vertex>>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
{
    let mut finished = Vec::new();
    for event in dfs_events(graph, seeds) {
        match event {
            TraversalEvent::Exit(vertex) => finished.push(vertex),
            TraversalEvent::Edge(_, EdgeKind::Back) => {
                log::debug!("topological sort aborted after {} vertices: cycle", finished.len());
                return Err(Error::CycleDetected);
            }
            _ => {}
        }
    }

    if !options.rev {
        finished.reverse();
    }
    log::debug!("topological sort ordered {} vertices", finished.len());
    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{from_fn, ListGraph};

    fn position<T: PartialEq>(order: &[T], item: &T) -> usize {
        order.iter().position(|x| x == item).unwrap()
    }

    #[test]
    fn test_diamond() {
        let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
        let order = topo_sort(&graph, [1], TopoOptions::default()).unwrap();

        assert_eq!(order.len(), 4);
        for (from, to) in graph.edges() {
            assert!(position(&order, from) < position(&order, to));
        }
    }

    #[test]
    fn test_reversed() {
        let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
        let order = topo_sort(&graph, [1], TopoOptions::new().with_rev(true)).unwrap();

        for (from, to) in graph.edges() {
            assert!(position(&order, from) > position(&order, to));
        }
    }

    #[test]
    fn test_cycle() {
        let graph = ListGraph::new(vec![(1, 2), (2, 3), (3, 1)]);
        let result = topo_sort(&graph, [1], TopoOptions::default());
        assert!(matches!(result, Err(Error::CycleDetected)));
    }

    #[test]
    fn test_self_loop() {
        let graph = ListGraph::new(vec![(1, 1)]);
        assert!(matches!(
            topo_sort(&graph, [1], TopoOptions::default()),
            Err(Error::CycleDetected)
        ));
    }

    #[test]
    fn test_unreachable_cycle_ignored() {
        let graph = ListGraph::new(vec![(1, 2), (3, 4), (4, 3)]);
        let order = topo_sort(&graph, [1], TopoOptions::default()).unwrap();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_multiple_seeds() {
        let graph = ListGraph::new(vec![(1, 3), (2, 3), (3, 4)]);
        let order = topo_sort(&graph, [1, 2], TopoOptions::default()).unwrap();

        assert_eq!(order.len(), 4);
        assert!(position(&order, &2) < position(&order, &3));
        assert!(position(&order, &1) < position(&order, &3));
        assert_eq!(order[3], 4);
    }

    #[test]
    fn test_single_vertex() {
        let graph = from_fn(|_: &u8| Vec::new());
        assert_eq!(topo_sort(&graph, [9], TopoOptions::default()).unwrap(), vec![9]);
    }
}
