// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # lazygraph
//!
//! A representation-agnostic graph traversal and analysis library.
//!
//! Any data structure becomes a directed graph by implementing three functions
//! ([`GraphView`]): the outgoing edges of a vertex, and the two endpoints of an edge.
//! Every algorithm in the crate is written against that interface alone, so the same
//! depth-first search runs over an adjacency map, a closure describing an infinite
//! graph, or a pointer structure that stores visited marks on its own nodes.
//!
//! ## Features
//!
//! - **One traversal engine** - DFS, BFS and best-first search differ only in the
//!   frontier they are given
//! - **Lazy and pull-based** - nothing runs until the consumer asks for the next
//!   element, so infinite graphs are fine
//! - **Explicit stacks** - depth-first walks and Tarjan's algorithm never recurse, so
//!   long paths are bounded by memory and not by the call stack
//! - **Pluggable stores** - visited marks live in a hash table, an ordered table or on
//!   the vertices themselves
//! - **Detailed traces** - enter/exit events and forward/back/cross edge classification
//! - **Two representations** - a persistent ordered map with structural sharing, and a
//!   shared mutable hash table
//!
//! ## Architecture
//!
//! - [`graph`] - The view abstraction, tables, frontiers and concrete representations
//! - [`algorithms`] - Traversals, shortest paths, topological sort, SCC, spanning trees
//! - [`graph::export`] - Graphviz DOT output
//! - [`Sequence`] - The single-consumption lazy sequence every traversal returns
//! - [`Error`] and [`Result`] - Crate-wide error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use lazygraph::prelude::*;
//!
//! let deps = PersistentGraph::of_list([
//!     ("app", "http"),
//!     ("app", "log"),
//!     ("http", "log"),
//! ]);
//!
//! // Lazy breadth-first traversal
//! let reached: Vec<&str> = bfs(&deps, ["app"]).collect();
//! assert_eq!(reached, vec!["app", "http", "log"]);
//!
//! // Build order: dependencies first
//! let order = topo_sort(&deps, ["app"], TopoOptions::new().with_rev(true))?;
//! assert_eq!(order, vec!["log", "http", "app"]);
//! # Ok::<(), lazygraph::Error>(())
//! ```
//!
//! ## Graphs From Closures
//!
//! ```rust
//! use lazygraph::{algorithms::dijkstra_with, from_fn};
//!
//! // Every n has an edge to n + 1 and to 2n, weighted by the target
//! let graph = from_fn(|n: &u64| [n + 1, 2 * n]);
//!
//! let to_ten = dijkstra_with(&graph, [1], |(_, to)| *to)
//!     .find(|r| r.vertex == 10)
//!     .map(|r| r.distance);
//! assert_eq!(to_ten, Some(2 + 4 + 5 + 10));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result`]. Apart from
//! [`Error::CycleDetected`], every error signals a violated calling contract.

pub(crate) mod error;
pub(crate) mod sequence;

pub mod graph;
pub mod prelude;
pub mod utils;

pub use error::Error;

/// `lazygraph` Result type.
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub use graph::algorithms;
pub use graph::{from_fn, from_fns, GraphStore, GraphView, ListGraph};
pub use sequence::Sequence;
