//! Configuration for citynet
//!
//! Centralized capacities and routing strategy with sensible defaults.

use crate::error::{CityError, Result};
use crate::graph::PathStrategy;

/// Default bucket count for hash tables
pub const DEFAULT_HASH_TABLE_CAPACITY: usize = 100;

/// Default vertex capacity for graphs
pub const DEFAULT_GRAPH_CAPACITY: usize = 100;

/// Default capacity for heaps, stacks and queues
pub const DEFAULT_CONTAINER_CAPACITY: usize = 100;

/// Initial child slots per tree node
pub const DEFAULT_TREE_CHILD_CAPACITY: usize = 10;

/// First number handed out by an `IdGenerator`
pub const DEFAULT_ID_START: u64 = 1000;

/// Upper bound for containers that allocate every slot up front
/// (hash table buckets, circular queue slots)
pub const MAX_PREALLOCATED_CAPACITY: usize = 1 << 20;

/// Main configuration for a citynet instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Registry Configuration
    // -------------------------------------------------------------------------
    /// Bucket count of every hash table created from this config.
    /// Tables never rehash, so this bounds chain length only on average.
    pub hash_table_capacity: usize,

    // -------------------------------------------------------------------------
    // Graph Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of vertices
    pub graph_capacity: usize,

    /// Minimum-selection strategy used by Dijkstra
    pub path_strategy: PathStrategy,

    // -------------------------------------------------------------------------
    // Bounded Container Configuration
    // -------------------------------------------------------------------------
    pub heap_capacity: usize,

    pub stack_capacity: usize,

    pub queue_capacity: usize,

    /// Initial child array size of tree nodes (grows by doubling)
    pub tree_child_capacity: usize,

    // -------------------------------------------------------------------------
    // ID Generation
    // -------------------------------------------------------------------------
    pub id_start: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash_table_capacity: DEFAULT_HASH_TABLE_CAPACITY,
            graph_capacity: DEFAULT_GRAPH_CAPACITY,
            path_strategy: PathStrategy::LinearScan,
            heap_capacity: DEFAULT_CONTAINER_CAPACITY,
            stack_capacity: DEFAULT_CONTAINER_CAPACITY,
            queue_capacity: DEFAULT_CONTAINER_CAPACITY,
            tree_child_capacity: DEFAULT_TREE_CHILD_CAPACITY,
            id_start: DEFAULT_ID_START,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations that would produce unusable containers
    pub fn validate(&self) -> Result<()> {
        let capacities = [
            ("hash_table_capacity", self.hash_table_capacity),
            ("graph_capacity", self.graph_capacity),
            ("heap_capacity", self.heap_capacity),
            ("stack_capacity", self.stack_capacity),
            ("queue_capacity", self.queue_capacity),
            ("tree_child_capacity", self.tree_child_capacity),
        ];

        for (name, value) in capacities {
            if value == 0 {
                return Err(CityError::Config(format!("{} must be greater than 0", name)));
            }
        }

        // Graph, heap and stack bounds are logical only; these two allocate.
        let preallocated = [
            ("hash_table_capacity", self.hash_table_capacity),
            ("queue_capacity", self.queue_capacity),
        ];

        for (name, value) in preallocated {
            if value > MAX_PREALLOCATED_CAPACITY {
                return Err(CityError::Config(format!(
                    "{} must be at most {}",
                    name, MAX_PREALLOCATED_CAPACITY
                )));
            }
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the bucket count of hash tables
    pub fn hash_table_capacity(mut self, capacity: usize) -> Self {
        self.config.hash_table_capacity = capacity;
        self
    }

    /// Set the maximum number of graph vertices
    pub fn graph_capacity(mut self, capacity: usize) -> Self {
        self.config.graph_capacity = capacity;
        self
    }

    /// Set the Dijkstra minimum-selection strategy
    pub fn path_strategy(mut self, strategy: PathStrategy) -> Self {
        self.config.path_strategy = strategy;
        self
    }

    /// Set the heap capacity
    pub fn heap_capacity(mut self, capacity: usize) -> Self {
        self.config.heap_capacity = capacity;
        self
    }

    /// Set the stack capacity
    pub fn stack_capacity(mut self, capacity: usize) -> Self {
        self.config.stack_capacity = capacity;
        self
    }

    /// Set the circular queue capacity
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    /// Set the initial child capacity of tree nodes
    pub fn tree_child_capacity(mut self, capacity: usize) -> Self {
        self.config.tree_child_capacity = capacity;
        self
    }

    /// Set the first number handed out by ID generators
    pub fn id_start(mut self, start: u64) -> Self {
        self.config.id_start = start;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
