//! Graph Module
//!
//! Weighted adjacency-list graph over named vertices, plus single-source
//! shortest paths.
//!
//! ## Responsibilities
//! - Vertex registry with case-insensitive names and optional coordinates
//! - Directed and bidirectional weighted edges
//! - Dijkstra's algorithm with path reconstruction
//! - Great-circle distances between placed vertices
//!
//! ## Representation
//! ```text
//!   vertices[0] "ISB-01" (33.69, 73.05) ──► [dest 2, w 3.5] ──► [dest 1, w 2.0]
//!   vertices[1] "ISB-02" (33.70, 73.06) ──► [dest 0, w 2.0]
//!   vertices[2] "ISB-03" (33.72, 73.08) ──► [dest 0, w 3.5]
//! ```
//! Edge lists are reported newest-first. Vertex indices are stable: vertices
//! are never removed.

mod adjacency;
mod dijkstra;
pub mod geo;

pub use adjacency::{Edge, Graph, Vertex, VertexId};
pub use dijkstra::{PathStrategy, ShortestPaths, UNREACHABLE};
pub use geo::Coordinates;
