use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A single frontier entry. Ordered by priority, then by insertion sequence.
#[derive(Debug)]
struct Entry<V, P> {
    priority: P,
    sequence: u64,
    vertex: V,
}

impl<V, P: Ord> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Ord> Eq for Entry<V, P> {}

impl<V, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Min-priority queue used as the search frontier.
///
/// Entries with equal priority are extracted in the order they were pushed,
/// so a run over the same graph always settles nodes in the same order.
/// Pushing a vertex that is already queued adds a second entry; callers skip
/// the superseded one when it surfaces.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<Entry<V, P>>>,
    next_sequence: u64,
}

impl<V, P> Frontier<V, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes since creation or the last `clear`
    pub fn pushes(&self) -> u64 {
        self.next_sequence
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Entry {
            priority,
            sequence,
            vertex,
        }));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.vertex, entry.priority))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }
}

impl<V, P> Default for Frontier<V, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
