//! Bounded circular FIFO queue
//!
//! ```text
//!   front            rear
//!     │               │
//!     ▼               ▼
//!   ┌───┬───┬───┬───┬───┬───┐
//!   │ a │ b │ c │ d │   │   │   rear wraps to slot 0 after the last slot
//!   └───┴───┴───┴───┴───┴───┘
//! ```

use crate::config::{Config, DEFAULT_CONTAINER_CAPACITY};
use crate::error::{CityError, Result};

/// Fixed-size ring buffer queue
#[derive(Debug, Clone)]
pub struct CircularQueue<T = i64> {
    slots: Vec<Option<T>>,

    /// Slot holding the oldest element
    front: usize,

    /// Slot the next enqueue writes to
    rear: usize,

    count: usize,
}

impl<T> CircularQueue<T> {
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self {
            slots,
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    /// Queue with `config.queue_capacity` slots
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.queue_capacity)
    }

    /// Add a value at the rear; rejected when full. O(1)
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(CityError::full("queue", self.capacity()));
        }

        self.slots[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.capacity();
        self.count += 1;
        Ok(())
    }

    /// Remove the value at the front. O(1)
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    /// Alias of `len`
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_CAPACITY)
    }
}
