use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A wrapper around BinaryHeap turning it into a min-queue of `(priority, vertex)`.
///
/// Entries compare by priority first and vertex second, so among equal
/// priorities the smallest vertex pops first.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a new empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the element with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the element with the lowest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (*vertex, *priority))
    }
}
