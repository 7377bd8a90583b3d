//! # lazygraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits
//! and algorithms. Import it to get quick access to everything needed to traverse a
//! graph.
//!
//! ```rust
//! use lazygraph::prelude::*;
//!
//! let graph = from_fn(|v: &u32| if *v < 3 { vec![v + 1] } else { vec![] });
//! assert!(is_dag(&graph, [0]));
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all lazygraph operations
pub use crate::Error;

/// The result type used throughout lazygraph
pub use crate::Result;

/// Single-consumption lazy sequence returned by traversals
pub use crate::Sequence;

// ================================================================================================
// Graph Views
// ================================================================================================

/// The graph abstraction and the trait implemented by stored representations
pub use crate::graph::{GraphStore, GraphView};

/// View adapters for closures and edge lists
pub use crate::graph::{from_fn, from_fns, ListGraph};

/// Concrete adjacency representations
pub use crate::graph::{MutableGraph, PersistentGraph};

// ================================================================================================
// Traversal State
// ================================================================================================

/// Visited tables and tag sets
pub use crate::graph::{FnTagSet, HashTable, OrdTable, Table, TagSet};

/// Frontier bags
pub use crate::graph::{Bag, Fifo, Heap, Lifo};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Generic engine and depth/breadth-first traversals
pub use crate::algorithms::{bfs, bfs_tag, dfs, dfs_tag, traverse, traverse_tag};

/// Event trace and derived orders
pub use crate::algorithms::{dfs_events, postfix, prefix, EdgeKind, TraversalEvent};

/// Shortest paths
pub use crate::algorithms::{dijkstra, dijkstra_with, Reached};

/// Ordering, cycles and components
pub use crate::algorithms::{is_dag, scc, topo_sort, TopoOptions};

/// Lazy spanning trees
pub use crate::algorithms::{spanning_tree, SpanningTree};

// ================================================================================================
// Export
// ================================================================================================

/// Graphviz DOT output
pub use crate::graph::export::{to_dot_string, write_dot, Attribute, DotOptions};
