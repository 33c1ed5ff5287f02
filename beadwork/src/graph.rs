//! Connection graph between beads.
//!
//! Builds a sparse, degree-bounded proximity graph in two greedy passes:
//!
//! - **Bootstrap**: every bead with no edge grabs its nearest neighbour
//!   that still has room. This is what keeps beads from floating alone.
//! - **Densify**: every bead with room links to its closest unlinked
//!   neighbours, nearest first, until it (or they) fill up.
//!
//! Both passes are nearest-neighbour heuristics, O(n²) over the bead set.
//! At a few hundred beads that is cheap, and since bead positions never
//! move within a layout epoch the result is cached by the scene.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::geometry::Point;

/// Tunables for the connection graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    /// No bead takes part in more edges than this
    pub max_degree: usize,
    /// Search radius when rescuing a bead with no edges
    pub bootstrap_radius: f64,
    /// Search radius when adding extra edges
    pub densify_radius: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_degree: 3,
            bootstrap_radius: 120.0,
            densify_radius: 100.0,
        }
    }
}

impl GraphConfig {
    pub fn with_max_degree(mut self, max_degree: usize) -> Self {
        self.max_degree = max_degree;
        self
    }
}

/// An undirected edge between two bead indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

impl Connection {
    /// Order-independent identity of the edge.
    pub fn key(&self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    /// Noise coordinates that give this edge its stable bend.
    ///
    /// The x offset samples `(a, b) * 0.1` and the y offset the swapped pair,
    /// so the two axes bend independently.
    pub fn jitter_seed(&self) -> (f64, f64) {
        (self.a as f64 * 0.1, self.b as f64 * 0.1)
    }
}

/// Degree of every bead, given the edge list.
pub fn degrees(connections: &[Connection], bead_count: usize) -> Vec<usize> {
    let mut counts = vec![0; bead_count];
    for conn in connections {
        counts[conn.a] += 1;
        counts[conn.b] += 1;
    }
    counts
}

/// Mutable state shared by both passes.
struct Builder<'a> {
    points: &'a [Point],
    config: &'a GraphConfig,
    degree: Vec<usize>,
    edges: Vec<Connection>,
    linked: HashSet<(usize, usize)>,
}

impl<'a> Builder<'a> {
    fn new(points: &'a [Point], config: &'a GraphConfig) -> Self {
        Self {
            points,
            config,
            degree: vec![0; points.len()],
            edges: Vec::new(),
            linked: HashSet::new(),
        }
    }

    fn has_room(&self, index: usize) -> bool {
        self.degree[index] < self.config.max_degree
    }

    fn link(&mut self, a: usize, b: usize, distance: f64) {
        let conn = Connection { a, b, distance };
        self.linked.insert(conn.key());
        self.edges.push(conn);
        self.degree[a] += 1;
        self.degree[b] += 1;
    }

    /// Give every isolated bead its nearest partner with room.
    fn bootstrap(&mut self) {
        for i in 0..self.points.len() {
            if self.degree[i] != 0 || !self.has_room(i) {
                continue;
            }

            let mut nearest: Option<(usize, f64)> = None;
            for j in 0..self.points.len() {
                if i == j || !self.has_room(j) {
                    continue;
                }
                let d = self.points[i].distance(self.points[j]);
                // Strict comparisons: the first bead in index order wins ties
                let closer = nearest.is_none_or(|(_, best)| d < best);
                if d < self.config.bootstrap_radius && closer {
                    nearest = Some((j, d));
                }
            }

            if let Some((j, d)) = nearest {
                self.link(i, j, d);
            }
        }
    }

    /// Top up every bead with room using its nearest unlinked neighbours.
    fn densify(&mut self) {
        for i in 0..self.points.len() {
            if !self.has_room(i) {
                continue;
            }

            let mut candidates: Vec<(usize, f64)> = (0..self.points.len())
                .filter(|&j| j != i && self.has_room(j))
                .filter(|&j| !self.linked.contains(&(i.min(j), i.max(j))))
                .map(|j| (j, self.points[i].distance(self.points[j])))
                .filter(|&(_, d)| d < self.config.densify_radius)
                .collect();

            // Stable sort keeps index order among equal distances
            candidates.sort_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(Ordering::Equal));

            for (j, d) in candidates {
                if !self.has_room(i) {
                    break;
                }
                if !self.has_room(j) {
                    continue;
                }
                self.link(i, j, d);
            }
        }
    }
}

/// Build the bead connection graph with the default limits.
pub fn build_connections(points: &[Point]) -> Vec<Connection> {
    build_connections_with(points, &GraphConfig::default())
}

/// Build the bead connection graph.
///
/// Deterministic for a given point order. Every bead ends with at most
/// `max_degree` edges and no pair is linked twice.
pub fn build_connections_with(points: &[Point], config: &GraphConfig) -> Vec<Connection> {
    let mut builder = Builder::new(points, config);
    builder.bootstrap();
    let bootstrap_edges = builder.edges.len();
    builder.densify();

    debug!(
        beads = points.len(),
        bootstrap_edges,
        total_edges = builder.edges.len(),
        "connection graph built"
    );

    builder.edges
}
