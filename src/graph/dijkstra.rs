//! Single-source shortest paths (Dijkstra)
//!
//! ## Algorithm
//! 1. distance[source] = 0, every other distance = `UNREACHABLE`,
//!    no predecessors, nothing visited
//! 2. Repeat V times: settle the unvisited vertex with the smallest finite
//!    distance, then relax each of its edges into unvisited vertices
//! 3. Stop early once no unvisited vertex has a finite distance
//!
//! `LinearScan` finds the minimum by scanning the distance array (O(V²),
//! ties to the lowest index). `BinaryHeap` keeps tentative distances in the
//! crate's `MinHeap`, re-inserting on every improvement and discarding stale
//! entries when popped (O((V + E) log V)). Both produce the same distances;
//! among equal-cost routes the heap strategy may settle vertices in a
//! different order and so record a different predecessor.
//!
//! Weights are assumed non-negative.

use serde::{Deserialize, Serialize};

use crate::collections::MinHeap;

use super::adjacency::{Graph, VertexId};

/// Distance of a vertex no path reaches. Finite so it survives arithmetic.
pub const UNREACHABLE: f64 = 1.0e300;

/// How Dijkstra picks the next vertex to settle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStrategy {
    /// Scan all unvisited vertices, lowest index wins ties. O(V²)
    #[default]
    LinearScan,

    /// Lazy-deletion binary heap. O((V + E) log V)
    BinaryHeap,
}

/// Result of one Dijkstra run
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    fn start(vertex_count: usize, source: VertexId) -> Self {
        let mut distances = vec![UNREACHABLE; vertex_count];
        distances[source] = 0.0;

        Self {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Raw distances; unreachable vertices hold `UNREACHABLE`
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Previous vertex on the shortest path to `vertex`
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Shortest distance to `vertex`, `None` when unreachable or unknown
    pub fn distance_to(&self, vertex: VertexId) -> Option<f64> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|&d| d < UNREACHABLE)
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d < UNREACHABLE).count()
    }

    /// Vertices from the source to `dest`, inclusive
    ///
    /// Empty when `dest` is unreachable; `[source]` when `dest` is the source.
    pub fn path_to(&self, dest: VertexId) -> Vec<VertexId> {
        if !self.is_reachable(dest) {
            return Vec::new();
        }

        let mut path = vec![dest];
        let mut current = dest;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }

        path.reverse();
        path
    }

    /// Relax `from → to`; returns true when `to` improved
    fn relax(&mut self, from: VertexId, to: VertexId, weight: f64) -> bool {
        let candidate = self.distances[from] + weight;
        if candidate < self.distances[to] {
            self.distances[to] = candidate;
            self.predecessors[to] = Some(from);
            return true;
        }
        false
    }
}

pub(crate) fn linear_scan(graph: &Graph, source: VertexId) -> ShortestPaths {
    let vertex_count = graph.vertex_count();
    let mut paths = ShortestPaths::start(vertex_count, source);
    let mut visited = vec![false; vertex_count];

    for _ in 0..vertex_count {
        let mut min_distance = UNREACHABLE;
        let mut min_index = None;
        for (index, &distance) in paths.distances.iter().enumerate() {
            if !visited[index] && distance < min_distance {
                min_distance = distance;
                min_index = Some(index);
            }
        }

        let Some(current) = min_index else {
            break;
        };
        visited[current] = true;

        for edge in graph.neighbors(current) {
            if !visited[edge.dest] {
                paths.relax(current, edge.dest, edge.weight);
            }
        }
    }

    paths
}

pub(crate) fn binary_heap(graph: &Graph, source: VertexId) -> ShortestPaths {
    let vertex_count = graph.vertex_count();
    let mut paths = ShortestPaths::start(vertex_count, source);
    let mut visited = vec![false; vertex_count];

    // Every successful relaxation enqueues once, plus the source.
    let mut frontier: MinHeap<VertexId> = MinHeap::new(graph.edge_count() + 1);
    if frontier.insert(source, 0.0).is_err() {
        return paths;
    }

    while let Some((current, distance)) = frontier.pop_with_priority() {
        if visited[current] || distance > paths.distances[current] {
            continue;
        }
        visited[current] = true;

        for edge in graph.neighbors(current) {
            if !visited[edge.dest] && paths.relax(current, edge.dest, edge.weight) {
                // capacity covers one entry per edge, so this cannot be rejected
                let _ = frontier.insert(edge.dest, paths.distances[edge.dest]);
            }
        }
    }

    paths
}
