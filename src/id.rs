//! Sequential record identifiers
//!
//! Registries that mint their own IDs (`BUS1000`, `STOP1001`, ...) take an
//! `IdGenerator` instead of sharing process-wide state, so each registry,
//! and each test, controls its own sequence.

use crate::config::{Config, DEFAULT_ID_START};

/// Produces `PREFIX<n>` identifiers with a monotonically increasing `n`
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Start the sequence at `start`
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.id_start)
    }

    /// Next identifier for `prefix`; the counter is shared across prefixes
    pub fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}{}", prefix, self.next);
        self.next += 1;
        id
    }

    /// The number the next call will use
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_START)
    }
}
