//! Graph algorithms over any [`GraphView`](crate::graph::GraphView).
//!
//! Every algorithm takes the view by reference plus a finite sequence of seed
//! vertices, and only ever looks at the part of the graph reachable from the seeds.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`traverse`] / [`traverse_tag`] - The generic engine: any frontier, any visited store
//! - [`dfs`] / [`dfs_tag`] - Depth-first traversal
//! - [`bfs`] / [`bfs_tag`] - Breadth-first traversal
//! - [`dfs_events`] - Depth-first event trace with edge classification
//! - [`prefix`] / [`postfix`] - Depth-first pre- and postorder
//!
//! ## Shortest Paths
//!
//! - [`dijkstra`] / [`dijkstra_with`] - Best-first search by accumulated edge distance
//!
//! ## Ordering and Cycles
//!
//! - [`topo_sort`] - Topological ordering, failing on cycles
//! - [`is_dag`] - Acyclicity check
//!
//! ## Structure
//!
//! - [`scc`] - Tarjan's strongly connected components
//! - [`spanning_tree`] - Lazily expanded, memoized spanning tree
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Result |
//! |-----------|-----------------|--------|
//! | DFS/BFS | O(V + E) | Lazy vertex sequence |
//! | Event trace | O(V + E) | Lazy event sequence |
//! | Dijkstra | O((V + E) log E) | Lazy `(vertex, distance, path)` sequence |
//! | Topological Sort | O(V + E) | `Vec` or [`Error::CycleDetected`](crate::Error::CycleDetected) |
//! | SCC | O(V + E) | Lazy component sequence |
//! | Spanning tree | O(1) per forced node | Tree of cached nodes |
//!
//! All sequence-returning algorithms hand back a [`Sequence`](crate::Sequence): nothing
//! runs until the first element is pulled, and a second full pass is refused.
//!
//! # Examples
//!
//! ```rust
//! use lazygraph::{algorithms, ListGraph};
//!
//! let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
//!
//! let mut reached: Vec<i32> = algorithms::dfs(&graph, [1]).collect();
//! reached.sort();
//! assert_eq!(reached, vec![1, 2, 3, 4]);
//!
//! let order = algorithms::topo_sort(&graph, [1], algorithms::TopoOptions::default())?;
//! assert_eq!(order.first(), Some(&1));
//! assert_eq!(order.last(), Some(&4));
//! # Ok::<(), lazygraph::Error>(())
//! ```

mod cycles;
mod dijkstra;
mod events;
mod scc;
mod spanning;
mod topological;
mod traversal;

pub use cycles::is_dag;
pub use dijkstra::{dijkstra, dijkstra_with, Reached, ShortestPaths};
pub use events::{
    dfs_events, dfs_events_with, postfix, prefix, DfsEvents, DfsState, EdgeKind, Events, Order,
    TraversalEvent,
};
pub use scc::{scc, scc_with, Components, SccMark};
pub use spanning::{spanning_tree, spanning_tree_with, SpanningTree};
pub use topological::{topo_sort, TopoOptions};
pub use traversal::{
    bfs, bfs_tag, dfs, dfs_tag, traverse, traverse_tag, Bfs, Dfs, TableTraversal, Traversal,
};
