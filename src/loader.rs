//! Network descriptions
//!
//! A JSON document listing vertices and edges, used to populate a `Graph`
//! through its public insert/connect operations.
//!
//! ```json
//! {
//!   "vertices": [
//!     { "name": "ISB-01", "lat": 33.6844, "lon": 73.0479 },
//!     { "name": "DEPOT" }
//!   ],
//!   "edges": [
//!     { "from": "ISB-01", "to": "DEPOT", "weight": 2.5 },
//!     { "from": "ISB-01", "to": "ISB-02", "bidirectional": false }
//!   ]
//! }
//! ```
//!
//! Edges without a weight are weighted by the great-circle distance between
//! their endpoints, which must then both have coordinates. Edges are
//! bidirectional unless stated otherwise.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::error::{CityError, Result};
use crate::graph::Graph;

/// A vertex entry; `lat` and `lon` must be given together or not at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// An edge entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

/// Parsed network document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescription {
    #[serde(default)]
    pub vertices: Vec<VertexSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl NetworkDescription {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build a graph sized by `config.graph_capacity`
    ///
    /// Stops at the first rejected vertex or edge; the error names it.
    pub fn build(&self, config: &Config) -> Result<Graph> {
        let mut graph = Graph::from_config(config);

        for vertex in &self.vertices {
            match (vertex.lat, vertex.lon) {
                (Some(lat), Some(lon)) => graph.add_vertex(&vertex.name, lat, lon)?,
                (None, None) => graph.add_vertex_unplaced(&vertex.name)?,
                _ => {
                    return Err(CityError::Config(format!(
                        "vertex {} needs both lat and lon, or neither",
                        vertex.name
                    )))
                }
            };
        }

        for edge in &self.edges {
            let weight = match edge.weight {
                Some(weight) => weight,
                None => Self::derived_weight(&graph, edge)?,
            };

            if edge.bidirectional {
                graph.add_bidirectional_edge(&edge.from, &edge.to, weight)?;
            } else {
                graph.add_edge(&edge.from, &edge.to, weight)?;
            }
        }

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "network loaded"
        );
        Ok(graph)
    }

    fn derived_weight(graph: &Graph, edge: &EdgeSpec) -> Result<f64> {
        for name in [&edge.from, &edge.to] {
            let index = graph
                .vertex_index(name)
                .ok_or_else(|| CityError::VertexNotFound(name.clone()))?;
            if graph.vertex_coords(index).is_none() {
                return Err(CityError::Unplaced(name.clone()));
            }
        }

        graph
            .geo_distance(&edge.from, &edge.to)
            .ok_or_else(|| CityError::Unplaced(edge.from.clone()))
    }
}
