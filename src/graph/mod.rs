//! Representation-agnostic directed graph infrastructure.
//!
//! This module provides the abstraction every algorithm is written against, the
//! pluggable stores traversals are parameterized with, and two concrete adjacency
//! representations.
//!
//! # Architecture
//!
//! - **Views**: [`GraphView`] is the three-function adapter (`children`, `origin`,
//!   `dest`) that makes any data structure traversable. [`from_fn`], [`from_fns`]
//!   and [`ListGraph`] build views without writing an impl.
//! - **Tables**: [`Table`], [`HashTable`], [`OrdTable`] and [`TagSet`] supply the
//!   equality, hashing or ordering a traversal needs for its visited marks.
//! - **Bags**: [`Bag`] with [`Fifo`], [`Lifo`] and [`Heap`] decide traversal order.
//! - **Representations**: [`PersistentGraph`] (immutable, structurally shared) and
//!   [`MutableGraph`] (in place, shared handles), both unified by [`GraphStore`].
//! - **Algorithms**: see [`algorithms`].
//!
//! # Usage Examples
//!
//! ## Traversing a Closure-Defined Graph
//!
//! ```rust
//! use lazygraph::graph::{algorithms, from_fn};
//!
//! let graph = from_fn(|v: &u32| if *v < 4 { vec![2 * v, 2 * v + 1] } else { vec![] });
//!
//! let order: Vec<u32> = algorithms::bfs(&graph, [1]).collect();
//! assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7]);
//! ```
//!
//! ## Checking for Cycles
//!
//! ```rust
//! use lazygraph::graph::{algorithms, PersistentGraph};
//!
//! let dag = PersistentGraph::of_list([(1, 2), (1, 3), (2, 4), (3, 4)]);
//! assert!(algorithms::is_dag(&dag, [1]));
//!
//! let cyclic = dag.add_edge(4, 1);
//! assert!(!algorithms::is_dag(&cyclic, [1]));
//! ```
//!
//! # Thread Safety
//!
//! Views may be shared read-only between threads when their representation is
//! [`Sync`]. Tables and bags belong to one traversal and are never shared.

mod bag;
mod mutable;
mod persistent;
mod table;
mod traits;

pub mod algorithms;
pub mod export;

pub use bag::{Bag, Fifo, Heap, Lifo};
pub use mutable::MutableGraph;
pub use persistent::PersistentGraph;
pub use table::{FnTagSet, HashTable, OrdTable, Table, TableTags, TagSet};
pub use traits::{
    from_fn, from_fns, Endpoints, FnGraph, FnsGraph, GraphStore, GraphView, ListGraph,
};
