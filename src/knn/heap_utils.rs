//! This module contains utility structures for managing k-best elements using a binary heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use ordered_float::OrderedFloat; // For using f64 in BinaryHeap

/// Represents an element in the KBestNeighbors heap, pairing a distance with data.
#[derive(Debug)]
pub struct HeapElement<P> {
    pub distance: OrderedFloat<f64>,
    /// Position in which the element was offered to the heap.
    pub discovered: usize,
    pub data: P,
}

impl<P> PartialEq for HeapElement<P> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.discovered == other.discovered
    }
}
impl<P> Eq for HeapElement<P> {}

impl<P> PartialOrd for HeapElement<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for HeapElement<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on (distance, discovered): the top is the farthest element and,
        // among equal distances, the most recently discovered one. That is the
        // element evicted first, so earlier finds survive ties.
        self.distance
            .cmp(&other.distance)
            .then(self.discovered.cmp(&other.discovered))
    }
}

/// Manages a collection of the K "best" (smallest distance) items seen so far.
///
/// A newcomer only displaces the current worst when it is strictly closer.
#[derive(Debug)]
pub struct KBestNeighbors<P> {
    capacity: usize,
    offered: usize,
    heap: BinaryHeap<HeapElement<P>>,
}

impl<P> KBestNeighbors<P> {
    pub fn new(capacity: usize) -> Self {
        KBestNeighbors {
            capacity,
            offered: 0,
            heap: BinaryHeap::with_capacity(capacity + 1), // +1 for easier logic
        }
    }

    pub fn add(&mut self, distance: f64, point_data: P) {
        let discovered = self.offered;
        self.offered += 1;
        if self.capacity == 0 {
            return;
        }
        let item = HeapElement { distance: OrderedFloat(distance), discovered, data: point_data };
        if self.heap.len() < self.capacity {
            self.heap.push(item);
        } else if let Some(mut worst) = self.heap.peek_mut() {
            if item.distance < worst.distance {
                *worst = item;
            }
        }
    }

    pub fn current_farthest_distance(&self) -> Option<f64> {
        if self.heap.len() == self.capacity {
            self.heap.peek().map(|heap_elem| heap_elem.distance.0)
        } else {
            None // Not full yet, effectively infinite radius
        }
    }

    /// Consumes the heap, returning `(distance, data)` pairs nearest first.
    /// Equal distances come out in discovery order.
    pub fn into_sorted(self) -> Vec<(f64, P)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|elem| (elem.distance.0, elem.data))
            .collect()
    }

    /// Returns the current number of neighbors stored.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
