//! Adjacency-list graph over named vertices

use std::fmt;

use tracing::debug;

use crate::config::{Config, DEFAULT_GRAPH_CAPACITY};
use crate::error::{CityError, Result};
use crate::key;

use super::dijkstra::{self, PathStrategy, ShortestPaths};
use super::geo::Coordinates;

/// Index of a vertex; stable for the lifetime of the graph
pub type VertexId = usize;

/// Directed weighted edge to `dest`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub dest: VertexId,
    pub weight: f64,
}

/// A named vertex and its outgoing edges
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Name as first registered; matched case-insensitively
    name: String,
    coords: Option<Coordinates>,
    /// Oldest edge first; read in reverse for newest-first order
    edges: Vec<Edge>,
}

impl Vertex {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coords(&self) -> Option<Coordinates> {
        self.coords
    }

    /// Outgoing edges, newest first
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().rev()
    }
}

/// Weighted graph with a fixed vertex capacity
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    capacity: usize,
}

impl Graph {
    /// Empty graph holding at most `capacity` vertices
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: Vec::new(),
            capacity,
        }
    }

    /// Graph bounded by `config.graph_capacity`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.graph_capacity)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Add a vertex placed at (`lat`, `lon`). O(V)
    pub fn add_vertex(&mut self, name: &str, lat: f64, lon: f64) -> Result<VertexId> {
        self.push_vertex(name, Some(Coordinates::new(lat, lon)))
    }

    /// Add a vertex without coordinates. O(V)
    pub fn add_vertex_unplaced(&mut self, name: &str) -> Result<VertexId> {
        self.push_vertex(name, None)
    }

    /// Add a directed edge `src → dst`
    ///
    /// Weights are not validated; negative weights are accepted here but
    /// void the shortest-path guarantees.
    pub fn add_edge(&mut self, src: &str, dst: &str, weight: f64) -> Result<()> {
        let (from, to) = self.resolve_pair(src, dst)?;
        self.push_edge(from, to, weight);
        Ok(())
    }

    /// Add `a → b` and `b → a` with the same weight
    ///
    /// Both endpoints are resolved before anything is inserted, so the call
    /// either adds both edges or neither.
    pub fn add_bidirectional_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        let (first, second) = self.resolve_pair(a, b)?;
        self.push_edge(first, second, weight);
        self.push_edge(second, first, weight);
        Ok(())
    }

    /// Connect two placed vertices both ways, weighted by their great-circle
    /// distance. Returns the weight used.
    pub fn connect_by_distance(&mut self, a: &str, b: &str) -> Result<f64> {
        let (first, second) = self.resolve_pair(a, b)?;
        for (index, name) in [(first, a), (second, b)] {
            if self.vertices[index].coords.is_none() {
                return Err(CityError::Unplaced(name.to_string()));
            }
        }
        let weight = self.distance_between(first, second).unwrap_or_default();

        self.push_edge(first, second, weight);
        self.push_edge(second, first, weight);
        Ok(weight)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Index of the vertex called `name` (case-insensitive). O(V)
    pub fn vertex_index(&self, name: &str) -> Option<VertexId> {
        self.vertices.iter().position(|v| key::same_key(&v.name, name))
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.vertex_index(name).is_some()
    }

    pub fn vertex(&self, index: VertexId) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn get_vertex_name(&self, index: VertexId) -> Option<&str> {
        self.vertices.get(index).map(|v| v.name.as_str())
    }

    pub fn vertex_coords(&self, index: VertexId) -> Option<Coordinates> {
        self.vertices.get(index).and_then(|v| v.coords)
    }

    /// Weight of the newest `src → dst` edge, `None` when not connected
    pub fn get_edge_weight(&self, src: &str, dst: &str) -> Option<f64> {
        let from = self.vertex_index(src)?;
        let to = self.vertex_index(dst)?;
        self.vertices[from]
            .edges()
            .find(|e| e.dest == to)
            .map(|e| e.weight)
    }

    /// Outgoing edges of `index`, newest first (empty for unknown indices)
    pub fn neighbors(&self, index: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices.get(index).into_iter().flat_map(Vertex::edges)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity
    }

    /// Great-circle distance between two named vertices, when both are placed
    pub fn geo_distance(&self, a: &str, b: &str) -> Option<f64> {
        self.distance_between(self.vertex_index(a)?, self.vertex_index(b)?)
    }

    /// Placed vertex closest to (`lat`, `lon`); ties go to the lower index
    pub fn nearest_vertex(&self, lat: f64, lon: f64) -> Option<VertexId> {
        let target = Coordinates::new(lat, lon);
        let mut best: Option<(VertexId, f64)> = None;

        for (index, vertex) in self.vertices.iter().enumerate() {
            let Some(coords) = vertex.coords else {
                continue;
            };
            let distance = coords.distance_km(&target);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }

        best.map(|(index, _)| index)
    }

    // =========================================================================
    // Shortest Paths
    // =========================================================================

    /// Dijkstra from `start` with linear-scan minimum selection. O(V²)
    pub fn dijkstra(&self, start: &str) -> Result<ShortestPaths> {
        self.dijkstra_with(start, PathStrategy::LinearScan)
    }

    /// Dijkstra from `start` using the given minimum-selection strategy
    pub fn dijkstra_with(&self, start: &str, strategy: PathStrategy) -> Result<ShortestPaths> {
        let source = self
            .vertex_index(start)
            .ok_or_else(|| CityError::VertexNotFound(start.to_string()))?;

        let paths = match strategy {
            PathStrategy::LinearScan => dijkstra::linear_scan(self, source),
            PathStrategy::BinaryHeap => dijkstra::binary_heap(self, source),
        };

        debug!(
            start = %self.vertices[source].name,
            ?strategy,
            reachable = paths.reachable_count(),
            "shortest paths computed"
        );
        Ok(paths)
    }

    /// Vertex indices from the source to `dest`; empty when unreachable
    pub fn get_path(&self, paths: &ShortestPaths, dest: VertexId) -> Vec<VertexId> {
        paths.path_to(dest)
    }

    /// Vertex names along a path
    pub fn path_names(&self, path: &[VertexId]) -> Vec<&str> {
        path.iter()
            .filter_map(|&index| self.get_vertex_name(index))
            .collect()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn push_vertex(&mut self, name: &str, coords: Option<Coordinates>) -> Result<VertexId> {
        if self.is_full() {
            return Err(CityError::full("graph", self.capacity));
        }
        if self.contains_vertex(name) {
            return Err(CityError::DuplicateVertex(name.to_string()));
        }

        self.vertices.push(Vertex {
            name: name.to_string(),
            coords,
            edges: Vec::new(),
        });

        let index = self.vertices.len() - 1;
        debug!(name, index, "vertex added");
        Ok(index)
    }

    fn resolve_pair(&self, a: &str, b: &str) -> Result<(VertexId, VertexId)> {
        let first = self
            .vertex_index(a)
            .ok_or_else(|| CityError::VertexNotFound(a.to_string()))?;
        let second = self
            .vertex_index(b)
            .ok_or_else(|| CityError::VertexNotFound(b.to_string()))?;
        Ok((first, second))
    }

    fn push_edge(&mut self, from: VertexId, to: VertexId, weight: f64) {
        self.vertices[from].edges.push(Edge { dest: to, weight });
    }

    fn distance_between(&self, a: VertexId, b: VertexId) -> Option<f64> {
        let first = self.vertex_coords(a)?;
        let second = self.vertex_coords(b)?;
        Some(first.distance_km(&second))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_CAPACITY)
    }
}

/// One line per vertex: `NAME (lat, lon): DEST(weight) DEST(weight) ...`
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            match vertex.coords {
                Some(c) => write!(f, "{} ({}, {}):", vertex.name, c.latitude, c.longitude)?,
                None => write!(f, "{}:", vertex.name)?,
            }
            for edge in vertex.edges() {
                write!(f, " {}({})", self.vertices[edge.dest].name, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
