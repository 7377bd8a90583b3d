//! Single-consumption lazy sequences.
//!
//! Every traversal in this crate is pull-based: nothing runs until the consumer asks
//! for the next element, and producing an element runs synchronously up to the next
//! yield point. Traversal state (frontier, visited table, Tarjan stacks) is mutated
//! while the sequence is pulled, so a sequence can only be walked once.
//!
//! [`Sequence`] makes that explicit. It is an ordinary [`Iterator`], and additionally
//! exposes [`Sequence::start`], which hands out the sequence for a full pass exactly
//! once. Any later attempt to start a pass over the same sequence fails with
//! [`Error::SequenceReused`] instead of silently yielding nothing.
//!
//! Abandoning a sequence half-way is always fine: dropping it reclaims the frontier
//! and visited table with no further teardown.

use std::iter::FusedIterator;

use crate::{Error, Result};

/// A lazy, single-consumption sequence.
///
/// Wraps the iterator produced by a traversal and tracks whether any element has
/// been pulled from it yet.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{algorithms::bfs, from_fn, Error};
///
/// let graph = from_fn(|v: &u32| if *v < 3 { vec![v + 1] } else { vec![] });
/// let mut seq = bfs(&graph, [0]);
///
/// let first: Vec<u32> = seq.start()?.collect();
/// assert_eq!(first, vec![0, 1, 2, 3]);
///
/// // A second full pass is refused.
/// assert!(matches!(seq.start(), Err(Error::SequenceReused)));
/// # Ok::<(), Error>(())
/// ```
///
/// A sequence cannot be cloned to obtain a second pass:
///
/// ```compile_fail
/// use lazygraph::Sequence;
///
/// let seq = Sequence::new(0..3);
/// let copy = seq.clone();
/// ```
#[derive(Debug)]
pub struct Sequence<I> {
    inner: I,
    started: bool,
}

impl<I: Iterator> Sequence<I> {
    /// Wraps an iterator as a fresh, not yet started sequence.
    #[must_use]
    pub fn new(inner: I) -> Self {
        Sequence {
            inner,
            started: false,
        }
    }

    /// Begins the one and only pass over this sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceReused`] if the sequence was already started, either
    /// through an earlier call to `start` or by pulling elements from it directly.
    pub fn start(&mut self) -> Result<&mut Self> {
        if self.started {
            return Err(Error::SequenceReused);
        }
        self.started = true;
        Ok(self)
    }

    /// Returns `true` once any element has been requested from the sequence.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Consumes the wrapper and returns the underlying iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.started = true;
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Sequence<I> {}
