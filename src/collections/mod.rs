//! Collections Module
//!
//! Container primitives the sector registries are built from.
//!
//! ## Responsibilities
//! - Case-insensitive registry storage (`HashTable`)
//! - Ordered string sequences (`LinkedList`)
//! - Bounded LIFO / FIFO buffers (`Stack`, `CircularQueue`)
//! - Ranking by priority (`MinHeap`, `MaxHeap`)
//! - Named hierarchies (`Tree`)
//!
//! ## Capacity Contract
//! Bounded containers never grow past the capacity they were built with.
//! A rejected insert returns `CityError::CapacityExceeded` and logs a
//! warning; the container is left unchanged.

mod hash_table;
mod heap;
mod linked_list;
mod queue;
mod stack;
mod tree;

pub use hash_table::HashTable;
pub use heap::{HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder, PriorityHeap};
pub use linked_list::LinkedList;
pub use queue::CircularQueue;
pub use stack::Stack;
pub use tree::{Tree, TreeNode};
