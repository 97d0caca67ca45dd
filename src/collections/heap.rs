//! Bounded binary heap, generic over its ordering
//!
//! `MinHeap` and `MaxHeap` share one implementation; the only difference is
//! the `HeapOrder` used to decide whether a node may sit above another.
//!
//! ## Layout
//! Complete binary tree in a `Vec`: node `i` has children `2i + 1` and
//! `2i + 2` and parent `(i - 1) / 2`.

use std::fmt;
use std::marker::PhantomData;

use crate::config::{Config, DEFAULT_CONTAINER_CAPACITY};
use crate::error::{CityError, Result};

/// Decides which of two priorities belongs closer to the root
pub trait HeapOrder {
    /// Name used in capacity diagnostics
    const NAME: &'static str;

    /// True when priority `a` must be above priority `b`
    fn precedes(a: f64, b: f64) -> bool;
}

/// Smallest priority at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

/// Largest priority at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl HeapOrder for MinOrder {
    const NAME: &'static str = "min-heap";

    #[inline]
    fn precedes(a: f64, b: f64) -> bool {
        a < b
    }
}

impl HeapOrder for MaxOrder {
    const NAME: &'static str = "max-heap";

    #[inline]
    fn precedes(a: f64, b: f64) -> bool {
        a > b
    }
}

#[derive(Debug, Clone)]
struct HeapNode<T> {
    value: T,
    priority: f64,
}

/// Fixed-capacity binary heap of `(value, priority)` pairs
#[derive(Clone)]
pub struct PriorityHeap<T, O: HeapOrder> {
    nodes: Vec<HeapNode<T>>,
    capacity: usize,
    _order: PhantomData<O>,
}

pub type MinHeap<T> = PriorityHeap<T, MinOrder>;
pub type MaxHeap<T> = PriorityHeap<T, MaxOrder>;

impl<T, O: HeapOrder> PriorityHeap<T, O> {
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            capacity,
            _order: PhantomData,
        }
    }

    /// Heap bounded by `config.heap_capacity`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.heap_capacity)
    }

    /// Insert at the end and sift up. O(log n)
    pub fn insert(&mut self, value: T, priority: f64) -> Result<()> {
        if self.is_full() {
            return Err(CityError::full(O::NAME, self.capacity));
        }

        self.nodes.push(HeapNode { value, priority });
        self.sift_up(self.nodes.len() - 1);
        Ok(())
    }

    /// Root value without removing it. O(1)
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first().map(|n| &n.value)
    }

    /// Priority of the root
    pub fn peek_priority(&self) -> Option<f64> {
        self.nodes.first().map(|n| n.priority)
    }

    /// Remove the root: the last node takes its place and sifts down. O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }

        let root = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Some(root.value)
    }

    /// Remove the root together with its priority
    pub fn pop_with_priority(&mut self) -> Option<(T, f64)> {
        let priority = self.peek_priority()?;
        self.pop().map(|value| (value, priority))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.nodes.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !O::precedes(self.nodes[index].priority, self.nodes[parent].priority) {
                break;
            }
            self.nodes.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;

            if left < len && O::precedes(self.nodes[left].priority, self.nodes[best].priority) {
                best = left;
            }
            if right < len && O::precedes(self.nodes[right].priority, self.nodes[best].priority) {
                best = right;
            }

            if best == index {
                break;
            }
            self.nodes.swap(index, best);
            index = best;
        }
    }
}

impl<T> PriorityHeap<T, MinOrder> {
    pub fn get_min(&self) -> Option<&T> {
        self.peek()
    }

    pub fn extract_min(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T> PriorityHeap<T, MaxOrder> {
    pub fn get_max(&self) -> Option<&T> {
        self.peek()
    }

    pub fn extract_max(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T, O: HeapOrder> Default for PriorityHeap<T, O> {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_CAPACITY)
    }
}

impl<T: fmt::Debug, O: HeapOrder> fmt::Debug for PriorityHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("order", &O::NAME)
            .field("len", &self.nodes.len())
            .field("capacity", &self.capacity)
            .field("nodes", &self.nodes)
            .finish()
    }
}
