//! Graphviz DOT export.
//!
//! The exporter walks the subgraph reachable from the seeds once, collecting every
//! vertex and every edge exactly once, and only then renders text. Vertex statements
//! come first in discovery order, followed by edge statements in the order the walk
//! inspected them.
//!
//! # Output
//!
//! ```text
//! digraph "deps" {
//!     n0 [label="app"];
//!     n1 [label="core", color="red"];
//!     n0 -> n1 [weight=2];
//! }
//! ```
//!
//! Vertex identifiers (`n0`, `n1`, ...) are the discovery indices; names and styling
//! come from the callbacks in [`DotOptions`].

use std::{collections::HashMap, fmt, fmt::Write as _, hash::Hash, io};

use strum::AsRefStr;

use crate::{
    graph::{
        algorithms::{dfs_events, TraversalEvent},
        GraphView,
    },
    utils::quote_dot,
    Result,
};

/// A DOT attribute attached to a vertex or edge statement.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Attribute {
    /// `color="..."`
    Color(String),
    /// `shape="..."`
    Shape(String),
    /// `weight=N`
    Weight(u32),
    /// `style="..."`
    Style(String),
    /// `label="..."`
    Label(String),
    /// Any other `key="value"` pair. The key is written verbatim.
    Other(String, String),
}

impl Attribute {
    /// Returns the attribute name as written in DOT.
    pub fn key(&self) -> &str {
        match self {
            Attribute::Other(key, _) => key,
            _ => self.as_ref(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Weight(weight) => write!(f, "weight={weight}"),
            Attribute::Color(value)
            | Attribute::Shape(value)
            | Attribute::Style(value)
            | Attribute::Label(value)
            | Attribute::Other(_, value) => write!(f, "{}={}", self.key(), quote_dot(value)),
        }
    }
}

type VertexFn<'a, V, R> = Box<dyn Fn(&V) -> R + 'a>;

/// Naming and styling callbacks for [`write_dot`] and [`to_dot_string`].
///
/// # Examples
///
/// ```rust
/// use lazygraph::graph::export::{Attribute, DotOptions};
///
/// let options: DotOptions<u32, (u32, u32)> = DotOptions::new("numbers")
///     .with_vertex_name(|v| format!("#{v}"))
///     .with_vertex_attributes(|v| {
///         if v % 2 == 0 {
///             vec![Attribute::Color("blue".into())]
///         } else {
///             vec![]
///         }
///     })
///     .with_edge_attributes(|_| vec![Attribute::Style("dashed".into())]);
///
/// assert_eq!(options.name(), "numbers");
/// ```
pub struct DotOptions<'a, V, E> {
    name: String,
    vertex_name: Option<VertexFn<'a, V, String>>,
    vertex_attributes: Option<VertexFn<'a, V, Vec<Attribute>>>,
    edge_attributes: Option<VertexFn<'a, E, Vec<Attribute>>>,
}

impl<'a, V, E> DotOptions<'a, V, E> {
    /// Creates options for a graph called `name`, with no vertex names and no
    /// attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        DotOptions {
            name: name.into(),
            vertex_name: None,
            vertex_attributes: None,
            edge_attributes: None,
        }
    }

    /// Returns the graph name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the callback producing each vertex's label.
    ///
    /// # Returns
    ///
    /// The modified options (builder pattern).
    #[must_use]
    pub fn with_vertex_name(mut self, f: impl Fn(&V) -> String + 'a) -> Self {
        self.vertex_name = Some(Box::new(f));
        self
    }

    /// Sets the callback producing extra attributes for each vertex.
    ///
    /// # Returns
    ///
    /// The modified options (builder pattern).
    #[must_use]
    pub fn with_vertex_attributes(mut self, f: impl Fn(&V) -> Vec<Attribute> + 'a) -> Self {
        self.vertex_attributes = Some(Box::new(f));
        self
    }

    /// Sets the callback producing attributes for each edge.
    ///
    /// # Returns
    ///
    /// The modified options (builder pattern).
    #[must_use]
    pub fn with_edge_attributes(mut self, f: impl Fn(&E) -> Vec<Attribute> + 'a) -> Self {
        self.edge_attributes = Some(Box::new(f));
        self
    }

    fn vertex_attributes(&self, vertex: &V) -> Vec<Attribute> {
        let mut attributes = Vec::new();
        if let Some(name) = &self.vertex_name {
            attributes.push(Attribute::Label(name(vertex)));
        }
        if let Some(extra) = &self.vertex_attributes {
            attributes.extend(extra(vertex));
        }
        attributes
    }

    fn edge_attributes(&self, edge: &E) -> Vec<Attribute> {
        self.edge_attributes
            .as_ref()
            .map(|f| f(edge))
            .unwrap_or_default()
    }
}

impl<V, E> Default for DotOptions<'_, V, E> {
    fn default() -> Self {
        Self::new("G")
    }
}

fn write_statement(dot: &mut String, target: &str, attributes: &[Attribute]) {
    if attributes.is_empty() {
        let _ = writeln!(dot, "    {target};");
        return;
    }

    let rendered: Vec<String> = attributes.iter().map(ToString::to_string).collect();
    let _ = writeln!(dot, "    {target} [{}];", rendered.join(", "));
}

/// Renders the subgraph reachable from `seeds` as DOT text.
///
/// # Arguments
///
/// * `graph` - The graph view to export
/// * `seeds` - Starting vertices
/// * `options` - Graph name, vertex naming and attribute callbacks
///
/// # Returns
///
/// The complete `digraph` block, newline terminated.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{
///     graph::export::{to_dot_string, DotOptions},
///     ListGraph,
/// };
///
/// let graph = ListGraph::new(vec![("a", "b")]);
/// let options = DotOptions::new("g").with_vertex_name(|v: &&str| v.to_string());
///
/// assert_eq!(
///     to_dot_string(&graph, ["a"], &options),
///     "digraph \"g\" {\n    n0 [label=\"a\"];\n    n1 [label=\"b\"];\n    n0 -> n1;\n}\n"
/// );
/// ```
#[must_use]
pub fn to_dot_string<G, S>(graph: &G, seeds: S, options: &DotOptions<'_, G::Vertex, G::Edge>) -> String
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
{
    let mut ids: HashMap<G::Vertex, usize> = HashMap::new();
    let mut vertices = Vec::new();
    let mut edges = Vec::new();

    for event in dfs_events(graph, seeds) {
        match event {
            TraversalEvent::Enter { vertex, index, .. } => {
                ids.insert(vertex.clone(), index);
                vertices.push(vertex);
            }
            TraversalEvent::Edge(edge, _) => edges.push(edge),
            TraversalEvent::Exit(_) => {}
        }
    }

    let mut dot = String::new();
    let _ = writeln!(dot, "digraph {} {{", quote_dot(&options.name));

    for (index, vertex) in vertices.iter().enumerate() {
        write_statement(&mut dot, &format!("n{index}"), &options.vertex_attributes(vertex));
    }

    let mut written = 0usize;
    for edge in &edges {
        let (Some(from), Some(to)) = (
            ids.get(&graph.origin(edge)),
            ids.get(&graph.dest(edge)),
        ) else {
            log::warn!("skipping an edge whose endpoints were not visited");
            continue;
        };
        write_statement(&mut dot, &format!("n{from} -> n{to}"), &options.edge_attributes(edge));
        written += 1;
    }

    dot.push_str("}\n");
    log::debug!(
        "exported {} vertices and {written} edges as DOT",
        vertices.len()
    );
    dot
}

/// Writes the subgraph reachable from `seeds` as DOT text to `writer`.
///
/// The walk completes before anything is written.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if `writer` fails.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{
///     graph::{export::{write_dot, DotOptions}, PersistentGraph},
/// };
///
/// let graph = PersistentGraph::of_list([(1, 2), (2, 3)]);
/// let mut out = Vec::new();
/// write_dot(&graph, [1], &DotOptions::default(), &mut out)?;
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("digraph \"G\" {"));
/// assert!(text.contains("n1 -> n2;"));
/// # Ok::<(), lazygraph::Error>(())
/// ```
pub fn write_dot<G, S, W>(
    graph: &G,
    seeds: S,
    options: &DotOptions<'_, G::Vertex, G::Edge>,
    writer: &mut W,
) -> Result<()>
where
    G: GraphView,
    G::Vertex: Hash + Eq,
    G::Edge: Clone,
    S: IntoIterator<Item = G::Vertex>,
    W: io::Write,
{
    let dot = to_dot_string(graph, seeds, options);
    writer.write_all(dot.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::ListGraph, Error};

    struct BrokenSink;

    impl io::Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_attribute_rendering() {
        assert_eq!(Attribute::Color("red".into()).to_string(), "color=\"red\"");
        assert_eq!(Attribute::Shape("box".into()).to_string(), "shape=\"box\"");
        assert_eq!(Attribute::Weight(3).to_string(), "weight=3");
        assert_eq!(Attribute::Style("bold".into()).to_string(), "style=\"bold\"");
        assert_eq!(
            Attribute::Label("a \"b\"".into()).to_string(),
            "label=\"a \\\"b\\\"\""
        );
        assert_eq!(
            Attribute::Other("fontsize".into(), "10".into()).to_string(),
            "fontsize=\"10\""
        );
        assert_eq!(Attribute::Weight(1).key(), "weight");
    }

    #[test]
    fn test_every_edge_once() {
        let graph = ListGraph::new(vec![(1, 2), (2, 3), (3, 1), (1, 3)]);
        let dot = to_dot_string(&graph, [1], &DotOptions::default());

        assert_eq!(dot.matches(" -> ").count(), 4);
        assert!(dot.contains("    n0 -> n1;\n"));
        assert!(dot.contains("    n2 -> n0;\n"));
        assert!(dot.contains("    n0 -> n2;\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_vertex_and_edge_attributes() {
        let graph = ListGraph::new(vec![('x', 5u32, 'y')]);
        let options = DotOptions::new("weighted")
            .with_vertex_name(|v: &char| v.to_string())
            .with_vertex_attributes(|v: &char| {
                if *v == 'x' {
                    vec![Attribute::Shape("box".into())]
                } else {
                    vec![]
                }
            })
            .with_edge_attributes(|e: &(char, u32, char)| vec![Attribute::Weight(e.1)]);

        let dot = to_dot_string(&graph, ['x'], &options);
        assert_eq!(
            dot,
            "digraph \"weighted\" {\n    n0 [label=\"x\", shape=\"box\"];\n    n1 [label=\"y\"];\n    n0 -> n1 [weight=5];\n}\n"
        );
    }

    #[test]
    fn test_name_is_escaped() {
        let graph = ListGraph::<(u8, u8)>::new(vec![]);
        let dot = to_dot_string(&graph, [0], &DotOptions::new("a<b>"));
        assert!(dot.starts_with("digraph \"a\\<b\\>\" {\n    n0;\n"));
    }

    #[test]
    fn test_sink_error() {
        let graph = ListGraph::new(vec![(1, 2)]);
        let result = write_dot(&graph, [1], &DotOptions::default(), &mut BrokenSink);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
