//! Error types for citynet
//!
//! Provides a unified error type for all rejected operations. Lookups that
//! simply miss return `Option`; only rejections surface as errors.

use thiserror::Error;

/// Result type alias using CityError
pub type Result<T> = std::result::Result<T, CityError>;

/// Unified error type for citynet operations
#[derive(Debug, Error)]
pub enum CityError {
    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("{container} is full (capacity {capacity})")]
    CapacityExceeded {
        container: &'static str,
        capacity: usize,
    },

    // -------------------------------------------------------------------------
    // Identity Errors
    // -------------------------------------------------------------------------
    #[error("Vertex already exists: {0}")]
    DuplicateVertex(String),

    #[error("Tree node already exists: {0}")]
    DuplicateNode(String),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Tree node not found: {0}")]
    NodeNotFound(String),

    #[error("Vertex has no coordinates: {0}")]
    Unplaced(String),

    // -------------------------------------------------------------------------
    // Routing Errors
    // -------------------------------------------------------------------------
    #[error("No route from {from} to {to}")]
    NoRoute { from: String, to: String },

    // -------------------------------------------------------------------------
    // I/O and Serialization Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CityError {
    /// Shorthand used by every bounded container when it rejects an insert
    pub(crate) fn full(container: &'static str, capacity: usize) -> Self {
        tracing::warn!(container, capacity, "{} is full", container);
        CityError::CapacityExceeded {
            container,
            capacity,
        }
    }
}
