use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure in this crate is a local, synchronous condition raised by pure in-memory
/// computation. There are no transient failures and nothing is retried: apart from
/// [`Error::CycleDetected`], which is a documented outcome of topological sorting, each
/// variant signals a violated calling contract that should be fixed at the call site.
///
/// # Error Categories
///
/// ## Algorithm Outcomes
/// - [`Error::CycleDetected`] - The reachable subgraph is not acyclic
///
/// ## Contract Violations
/// - [`Error::SequenceReused`] - A single-consumption sequence was pulled from the start twice
/// - [`Error::KeyNotFound`] - A table lookup for a key that was never set
/// - [`Error::EmptyFrontier`] - A bag was popped while empty
///
/// ## I/O
/// - [`Error::Io`] - The export sink rejected a write
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::{topo_sort, TopoOptions}, from_fn, Error};
///
/// // 1 -> 2 -> 3 -> 1
/// let graph = from_fn(|v: &u32| [v % 3 + 1]);
///
/// match topo_sort(&graph, [1], TopoOptions::default()) {
///     Ok(order) => println!("order: {order:?}"),
///     Err(Error::CycleDetected) => println!("graph has a cycle"),
///     Err(e) => eprintln!("unexpected: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The subgraph reachable from the seeds contains a cycle.
    ///
    /// Raised by topological sorting when the depth-first event trace
    /// classifies an edge as a back edge. No partial order is returned.
    #[error("The reachable subgraph contains a cycle")]
    CycleDetected,

    /// A single-consumption sequence was pulled from the start a second time.
    ///
    /// Traversal sequences mutate their frontier and visited table as they are
    /// pulled. Re-iterating requires a fresh call with fresh state.
    #[error("Sequence has already been consumed")]
    SequenceReused,

    /// A table lookup was performed for a key that is not present.
    #[error("Key not found in table")]
    KeyNotFound,

    /// An element was popped from an empty bag.
    ///
    /// The traversal engine checks for emptiness before popping, so this can only be
    /// triggered by using a bag directly.
    #[error("Cannot pop from an empty frontier")]
    EmptyFrontier,

    /// Writing exported graph text to the output sink failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::CycleDetected.to_string(),
            "The reachable subgraph contains a cycle"
        );
        assert_eq!(
            Error::SequenceReused.to_string(),
            "Sequence has already been consumed"
        );
        assert_eq!(Error::KeyNotFound.to_string(), "Key not found in table");
        assert_eq!(
            Error::EmptyFrontier.to_string(),
            "Cannot pop from an empty frontier"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "sink closed");
    }
}
