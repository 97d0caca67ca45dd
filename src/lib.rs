//! # citynet
//!
//! The shared core of a city network simulation:
//! - Case-insensitive chained hash table used as the registry primitive
//! - Linked list, bounded stack, circular queue, min/max heaps, n-ary tree
//! - Adjacency-list graph with Dijkstra shortest paths
//! - Route planning facade and JSON network loader
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Sector registries / CLI                      │
//! │          (airports, hospitals, schools, transport)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RouteEngine                              │
//! │              (route queries, path cache)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Graph    │          │ Collections │
//!   │ (Dijkstra)  │─────────►│ (HashTable, │
//!   └─────────────┘          │  heaps, ...)│
//!                            └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │ Key (canon- │
//!                           │ icalization)│
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod key;
pub mod id;
pub mod collections;
pub mod graph;
pub mod loader;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CityError, Result};
pub use config::Config;
pub use engine::{Route, RouteEngine};
pub use id::IdGenerator;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of citynet
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
