//! Engine Module
//!
//! Route planning facade over a `Graph`.
//!
//! ## Responsibilities
//! - Own the stop graph and the configuration it was built with
//! - Answer shortest-route queries by stop name
//! - Cache one Dijkstra run per source stop until the graph changes
//! - Nearest-stop lookup for placed stops

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::collections::HashTable;
use crate::config::Config;
use crate::error::{CityError, Result};
use crate::graph::{Graph, ShortestPaths, VertexId};
use crate::loader::NetworkDescription;

/// A resolved route between two stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Stop names from origin to destination, both included
    pub stops: Vec<String>,

    /// Sum of edge weights along the route
    pub distance: f64,
}

impl Route {
    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.stops.join(" -> "), self.distance)
    }
}

/// Route planner
///
/// Shortest-path runs are cached per canonical source name and dropped
/// wholesale on any mutation of the graph.
pub struct RouteEngine {
    /// Engine configuration
    config: Config,

    /// Stops and their connections
    graph: Graph,

    /// Source stop → last Dijkstra run from it
    cache: HashTable<ShortestPaths>,
}

impl RouteEngine {
    /// Create an empty engine with the given config
    pub fn new(config: Config) -> Result<Self> {
        let graph = Graph::from_config(&config);
        Self::with_graph(config, graph)
    }

    /// Wrap an existing graph
    pub fn with_graph(config: Config, graph: Graph) -> Result<Self> {
        config.validate()?;
        let cache = HashTable::from_config(&config);

        Ok(Self {
            config,
            graph,
            cache,
        })
    }

    /// Load a JSON network description from `path`
    pub fn load(path: &Path, config: Config) -> Result<Self> {
        config.validate()?;
        info!(path = %path.display(), "loading network");

        let graph = NetworkDescription::from_path(path)?.build(&config)?;
        Self::with_graph(config, graph)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Add a stop at (`lat`, `lon`)
    pub fn add_stop(&mut self, name: &str, lat: f64, lon: f64) -> Result<VertexId> {
        let index = self.graph.add_vertex(name, lat, lon)?;
        self.invalidate();
        Ok(index)
    }

    /// Connect two stops both ways with an explicit weight
    pub fn connect(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        self.graph.add_bidirectional_edge(a, b, weight)?;
        self.invalidate();
        Ok(())
    }

    /// Connect two placed stops both ways, weighted by distance
    pub fn connect_by_distance(&mut self, a: &str, b: &str) -> Result<f64> {
        let weight = self.graph.connect_by_distance(a, b)?;
        self.invalidate();
        Ok(weight)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Shortest route from `from` to `to`
    ///
    /// Unknown stops yield `VertexNotFound`, disconnected ones `NoRoute`.
    pub fn shortest_route(&mut self, from: &str, to: &str) -> Result<Route> {
        let dest = self
            .graph
            .vertex_index(to)
            .ok_or_else(|| CityError::VertexNotFound(to.to_string()))?;

        let paths = self.paths_from(from)?;
        let Some(distance) = paths.distance_to(dest) else {
            return Err(CityError::NoRoute {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        let path = paths.path_to(dest);
        let stops = self
            .graph
            .path_names(&path)
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(Route { stops, distance })
    }

    /// Distance of the shortest route, `None` when disconnected or unknown
    pub fn route_distance(&mut self, from: &str, to: &str) -> Option<f64> {
        self.shortest_route(from, to).ok().map(|r| r.distance)
    }

    /// Name of the placed stop nearest to (`lat`, `lon`)
    pub fn nearest_stop(&self, lat: f64, lon: f64) -> Option<&str> {
        let index = self.graph.nearest_vertex(lat, lon)?;
        self.graph.get_vertex_name(index)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of cached shortest-path runs
    pub fn cached_sources(&self) -> usize {
        self.cache.count()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn paths_from(&mut self, from: &str) -> Result<&ShortestPaths> {
        if !self.cache.contains(from) {
            let paths = self.graph.dijkstra_with(from, self.config.path_strategy)?;
            self.cache.insert(from, paths);
        } else {
            debug!(from, "shortest paths served from cache");
        }

        self.cache
            .search(from)
            .ok_or_else(|| CityError::VertexNotFound(from.to_string()))
    }

    fn invalidate(&mut self) {
        if !self.cache.is_empty() {
            debug!(entries = self.cache.count(), "route cache cleared");
            self.cache.clear();
        }
    }
}
