//! Lazily expanded depth-first spanning trees.
//!
//! [`spanning_tree`] returns only the root node. A node's children are computed the
//! first time [`SpanningTree::children`] is called on it and cached afterwards.
//! All nodes of one tree share a single visited table, so a vertex that was already
//! reached through another branch is not expanded again: the tree spans the reachable
//! subgraph exactly like an ordinary traversal would.
//!
//! Which branch a shared vertex ends up under depends on the order in which the
//! caller forces nodes.

use std::{
    cell::{OnceCell, RefCell},
    fmt,
    hash::Hash,
    rc::Rc,
};

use crate::graph::{GraphView, HashTable, Table};

struct Shared<'g, G, T> {
    graph: &'g G,
    visited: RefCell<T>,
}

/// A node of a lazily expanded spanning tree.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::spanning_tree, ListGraph};
///
/// let graph = ListGraph::new(vec![(1, 2), (1, 3), (2, 3)]);
/// let root = spanning_tree(&graph, 1);
///
/// assert!(!root.is_expanded());
/// let children: Vec<i32> = root.children().iter().map(|(_, child)| *child.vertex()).collect();
/// assert_eq!(children, vec![2, 3]);
///
/// // 3 already hangs off the root, so it is not a child of 2
/// assert!(root.children()[0].1.children().is_empty());
/// ```
pub struct SpanningTree<'g, G, T = HashTable<<G as GraphView>::Vertex, ()>>
where
    G: GraphView,
{
    vertex: G::Vertex,
    children: OnceCell<Vec<(G::Edge, SpanningTree<'g, G, T>)>>,
    shared: Rc<Shared<'g, G, T>>,
}

impl<'g, G, T> SpanningTree<'g, G, T>
where
    G: GraphView,
    T: Table<G::Vertex, ()>,
{
    fn node(vertex: G::Vertex, shared: Rc<Shared<'g, G, T>>) -> Self {
        SpanningTree {
            vertex,
            children: OnceCell::new(),
            shared,
        }
    }

    /// Returns the vertex at this node.
    pub fn vertex(&self) -> &G::Vertex {
        &self.vertex
    }

    /// Returns `true` once this node's children have been computed.
    pub fn is_expanded(&self) -> bool {
        self.children.get().is_some()
    }

    /// Returns the tree edges out of this node with their subtrees, expanding the
    /// node on first call.
    pub fn children(&self) -> &[(G::Edge, SpanningTree<'g, G, T>)] {
        self.children.get_or_init(|| self.expand())
    }

    fn expand(&self) -> Vec<(G::Edge, SpanningTree<'g, G, T>)> {
        let graph = self.shared.graph;
        let mut children = Vec::new();

        for edge in graph.children(&self.vertex) {
            let dest = graph.dest(&edge);
            {
                let mut visited = self.shared.visited.borrow_mut();
                if visited.contains(&dest) {
                    continue;
                }
                visited.set(dest.clone(), ());
            }
            children.push((edge, SpanningTree::node(dest, Rc::clone(&self.shared))));
        }

        log::trace!("spanning tree node expanded into {} children", children.len());
        children
    }

    /// Folds over every vertex of the tree in preorder, expanding the whole tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazygraph::{algorithms::spanning_tree, from_fn};
    ///
    /// let graph = from_fn(|v: &u32| if *v < 8 { vec![v * 2, v * 2 + 1] } else { vec![] });
    /// let sum = spanning_tree(&graph, 1).fold(0u32, |acc, v| acc + v);
    /// assert_eq!(sum, (1..16u32).sum::<u32>());
    /// ```
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &G::Vertex) -> A,
    {
        let mut acc = init;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            acc = f(acc, &node.vertex);
            pending.extend(node.children().iter().rev().map(|(_, child)| child));
        }
        acc
    }

    /// Returns every vertex of the tree in preorder, expanding the whole tree.
    pub fn vertices(&self) -> Vec<G::Vertex> {
        self.fold(Vec::new(), |mut out, vertex| {
            out.push(vertex.clone());
            out
        })
    }
}

impl<G, T> Drop for SpanningTree<'_, G, T>
where
    G: GraphView,
{
    /// Frees expanded subtrees from an explicit worklist so deep trees do not
    /// overflow the call stack.
    fn drop(&mut self) {
        let mut pending: Vec<Self> = self
            .children
            .take()
            .into_iter()
            .flatten()
            .map(|(_, child)| child)
            .collect();

        while let Some(mut node) = pending.pop() {
            if let Some(children) = node.children.take() {
                pending.extend(children.into_iter().map(|(_, child)| child));
            }
        }
    }
}

impl<G, T> fmt::Debug for SpanningTree<'_, G, T>
where
    G: GraphView,
    G::Vertex: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanningTree")
            .field("vertex", &self.vertex)
            .field("expanded", &self.children.get().is_some())
            .finish()
    }
}

/// Builds the root of a lazily expanded spanning tree.
///
/// Only the root is marked visited; nothing is traversed until
/// [`SpanningTree::children`] is called.
pub fn spanning_tree<G>(graph: &G, root: G::Vertex) -> SpanningTree<'_, G>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
{
    spanning_tree_with(graph, HashTable::new(), root)
}

/// Builds a lazily expanded spanning tree that records visited vertices in `visited`.
pub fn spanning_tree_with<G, T>(graph: &G, mut visited: T, root: G::Vertex) -> SpanningTree<'_, G, T>
where
    G: GraphView,
    T: Table<G::Vertex, ()>,
{
    visited.set(root.clone(), ());
    let shared = Rc::new(Shared {
        graph,
        visited: RefCell::new(visited),
    });
    SpanningTree::node(root, shared)
}
