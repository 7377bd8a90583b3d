//! Frontier bags: the ordering strategy that drives a traversal.
//!
//! The traversal engine is the same for every search; the bag it is given decides
//! which discovered vertex is expanded next:
//!
//! - [`Fifo`] - first in, first out (breadth-first)
//! - [`Lifo`] - last in, first out (depth-first)
//! - [`Heap`] - smallest first under a caller-supplied `leq` (best-first, Dijkstra)
//!
//! A bag is owned by exactly one traversal and dropped with it.

use std::collections::VecDeque;

use crate::{Error, Result};

/// A mutable collection of pending work items.
pub trait Bag<T> {
    /// Adds an item.
    fn push(&mut self, item: T);

    /// Removes and returns the next item according to the bag's ordering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFrontier`] if the bag is empty.
    fn pop(&mut self) -> Result<T>;

    /// Returns `true` if there are no pending items.
    fn is_empty(&self) -> bool;
}

/// A first-in, first-out bag.
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    queue: VecDeque<T>,
}

impl<T> Fifo<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Fifo {
            queue: VecDeque::new(),
        }
    }

    /// Returns the number of pending items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bag<T> for Fifo<T> {
    fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Result<T> {
        self.queue.pop_front().ok_or(Error::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// A last-in, first-out bag.
#[derive(Debug, Clone)]
pub struct Lifo<T> {
    stack: Vec<T>,
}

impl<T> Lifo<T> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Lifo { stack: Vec::new() }
    }

    /// Returns the number of pending items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bag<T> for Lifo<T> {
    fn push(&mut self, item: T) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Result<T> {
        self.stack.pop().ok_or(Error::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// A binary min-heap ordered by a caller-supplied `leq` relation.
///
/// Items that compare equal in both directions are popped in insertion order.
///
/// # Examples
///
/// ```rust
/// use lazygraph::graph::{Bag, Heap};
///
/// let mut heap = Heap::new(|a: &(u32, char), b: &(u32, char)| a.0 <= b.0);
/// heap.push((3, 'x'));
/// heap.push((1, 'y'));
/// heap.push((3, 'z'));
///
/// assert_eq!(heap.pop()?, (1, 'y'));
/// assert_eq!(heap.pop()?, (3, 'x'));
/// assert_eq!(heap.pop()?, (3, 'z'));
/// assert!(heap.pop().is_err());
/// # Ok::<(), lazygraph::Error>(())
/// ```
pub struct Heap<T, F> {
    /// `(insertion sequence, item)`, kept in heap order
    entries: Vec<(u64, T)>,
    leq: F,
    next_seq: u64,
}

impl<T, F: Fn(&T, &T) -> bool> Heap<T, F> {
    /// Creates an empty heap ordered by `leq`.
    ///
    /// `leq(a, b)` must behave like `a <= b` for a total preorder.
    pub fn new(leq: F) -> Self {
        Heap {
            entries: Vec::new(),
            leq,
            next_seq: 0,
        }
    }

    /// Returns the number of pending items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if `entries[a]` has to be popped before `entries[b]`.
    fn precedes(&self, a: usize, b: usize) -> bool {
        let (seq_a, item_a) = &self.entries[a];
        let (seq_b, item_b) = &self.entries[b];
        match ((self.leq)(item_a, item_b), (self.leq)(item_b, item_a)) {
            (true, false) => true,
            (true, true) => seq_a < seq_b,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(pos, parent) {
                break;
            }
            self.entries.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut first = pos;

            if left < len && self.precedes(left, first) {
                first = left;
            }
            if right < len && self.precedes(right, first) {
                first = right;
            }
            if first == pos {
                break;
            }
            self.entries.swap(pos, first);
            pos = first;
        }
    }
}

impl<T, F: Fn(&T, &T) -> bool> Bag<T> for Heap<T, F> {
    fn push(&mut self, item: T) {
        self.entries.push((self.next_seq, item));
        self.next_seq += 1;
        self.sift_up(self.entries.len() - 1);
    }

    fn pop(&mut self) -> Result<T> {
        if self.entries.is_empty() {
            return Err(Error::EmptyFrontier);
        }

        let (_, item) = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<B: Bag<i32>>(bag: &mut B) -> Vec<i32> {
        let mut out = Vec::new();
        while !bag.is_empty() {
            out.push(bag.pop().unwrap());
        }
        out
    }

    #[test]
    fn test_fifo_order() {
        let mut bag = Fifo::new();
        for i in [3, 1, 2] {
            bag.push(i);
        }
        assert_eq!(bag.len(), 3);
        assert_eq!(drain(&mut bag), vec![3, 1, 2]);
    }

    #[test]
    fn test_lifo_order() {
        let mut bag = Lifo::default();
        for i in [3, 1, 2] {
            bag.push(i);
        }
        assert_eq!(drain(&mut bag), vec![2, 1, 3]);
    }

    #[test]
    fn test_heap_order() {
        let mut bag = Heap::new(|a: &i32, b: &i32| a <= b);
        for i in [5, 3, 8, 1, 9, 2, 7] {
            bag.push(i);
        }
        assert_eq!(drain(&mut bag), vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_heap_reverse_order() {
        let mut bag = Heap::new(|a: &i32, b: &i32| a >= b);
        for i in [5, 3, 8] {
            bag.push(i);
        }
        assert_eq!(drain(&mut bag), vec![8, 5, 3]);
    }

    #[test]
    fn test_heap_ties_follow_insertion() {
        let mut bag = Heap::new(|a: &(u8, u8), b: &(u8, u8)| a.0 <= b.0);
        for item in [(1, 0), (0, 1), (1, 2), (0, 3), (1, 4), (0, 5)] {
            bag.push(item);
        }

        let mut out = Vec::new();
        while let Ok(item) = bag.pop() {
            out.push(item.1);
        }
        assert_eq!(out, vec![1, 3, 5, 0, 2, 4]);
    }

    #[test]
    fn test_pop_empty() {
        assert!(matches!(Fifo::<u8>::new().pop(), Err(Error::EmptyFrontier)));
        assert!(matches!(Lifo::<u8>::new().pop(), Err(Error::EmptyFrontier)));

        let mut heap = Heap::new(|a: &u8, b: &u8| a <= b);
        assert!(matches!(heap.pop(), Err(Error::EmptyFrontier)));
        heap.push(1);
        assert_eq!(heap.pop().unwrap(), 1);
        assert!(matches!(heap.pop(), Err(Error::EmptyFrontier)));
    }
}
