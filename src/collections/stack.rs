//! Bounded LIFO stack

use crate::config::{Config, DEFAULT_CONTAINER_CAPACITY};
use crate::error::{CityError, Result};

/// Array-backed stack with a fixed capacity
#[derive(Debug, Clone)]
pub struct Stack<T = String> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Stack bounded by `config.stack_capacity`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.stack_capacity)
    }

    /// Push a value; rejected when the stack is full
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(CityError::full("stack", self.capacity));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_CAPACITY)
    }
}
