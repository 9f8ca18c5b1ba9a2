//! Shortest-path queries and the average shortest path length.
//!
//! # Metrics
//!
//! | Metric            | Algorithm | Edge cost          |
//! |-------------------|-----------|--------------------|
//! | [`PathMetric::Hops`]   | BFS       | 1 per edge         |
//! | [`PathMetric::Length`] | Dijkstra  | `Edge::length`     |
//!
//! Rate normalisation uses `Hops` unless configured otherwise.
//!
//! The all-pairs average is O(N · (N + E)) for `Hops`.  With the `parallel`
//! feature the per-source loop runs on Rayon.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use serde::{Deserialize, Serialize};

use drt_core::NodeId;

use crate::{Topology, TopologyError, TopologyResult};

/// Distance used for shortest paths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMetric {
    /// Unweighted hop count.
    #[default]
    Hops,
    /// Sum of edge lengths.
    Length,
}

/// Heap key for Dijkstra.  Costs are finite and non-negative, so
/// `total_cmp` gives the usual order.
#[derive(Copy, Clone, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Topology {
    /// Distances from `source` to every node; `None` marks unreachable nodes.
    pub fn single_source_lengths(
        &self,
        source: NodeId,
        metric: PathMetric,
    ) -> TopologyResult<Vec<Option<f64>>> {
        if !self.contains(source) {
            return Err(TopologyError::NodeNotFound(source));
        }
        Ok(match metric {
            PathMetric::Hops => bfs(self, source)
                .into_iter()
                .map(|d| (d != u32::MAX).then_some(d as f64))
                .collect(),
            PathMetric::Length => dijkstra(self, source)
                .into_iter()
                .map(|d| d.is_finite().then_some(d))
                .collect(),
        })
    }

    /// Length of a shortest path between two nodes.
    pub fn shortest_path_length(
        &self,
        from:   NodeId,
        to:     NodeId,
        metric: PathMetric,
    ) -> TopologyResult<f64> {
        if !self.contains(to) {
            return Err(TopologyError::NodeNotFound(to));
        }
        self.single_source_lengths(from, metric)?[to.index()]
            .ok_or(TopologyError::Disconnected { from, to })
    }

    /// Mean shortest-path length over all ordered pairs of distinct nodes.
    ///
    /// Fails with [`TopologyError::Disconnected`] on the first unreachable
    /// pair found, and with [`TopologyError::TooFewNodes`] when the graph
    /// has fewer than two nodes.
    pub fn average_shortest_path_length(&self, metric: PathMetric) -> TopologyResult<f64> {
        let n = self.node_count();
        if n < 2 {
            return Err(TopologyError::TooFewNodes { needed: 2, available: n });
        }

        #[cfg(feature = "parallel")]
        let sums: Vec<f64> = {
            use rayon::prelude::*;
            (0..n)
                .into_par_iter()
                .map(|s| self.distance_sum(NodeId(s as u32), metric))
                .collect::<TopologyResult<Vec<_>>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let sums: Vec<f64> = (0..n)
            .map(|s| self.distance_sum(NodeId(s as u32), metric))
            .collect::<TopologyResult<Vec<_>>>()?;

        let pairs = n as f64 * (n - 1) as f64;
        Ok(sums.iter().sum::<f64>() / pairs)
    }

    /// Sum of distances from `source` to every other node.
    fn distance_sum(&self, source: NodeId, metric: PathMetric) -> TopologyResult<f64> {
        let unreachable = |i: usize| TopologyError::Disconnected { from: source, to: NodeId(i as u32) };
        match metric {
            PathMetric::Hops => {
                // Exact integer accumulation; hop sums never approach u64::MAX.
                let mut total = 0u64;
                for (i, d) in bfs(self, source).into_iter().enumerate() {
                    if d == u32::MAX {
                        return Err(unreachable(i));
                    }
                    total += d as u64;
                }
                Ok(total as f64)
            }
            PathMetric::Length => {
                let mut total = 0.0;
                for (i, d) in dijkstra(self, source).into_iter().enumerate() {
                    if !d.is_finite() {
                        return Err(unreachable(i));
                    }
                    total += d;
                }
                Ok(total)
            }
        }
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Hop distances from `source`; `u32::MAX` for unreachable nodes.
fn bfs(topology: &Topology, source: NodeId) -> Vec<u32> {
    let mut dist = vec![u32::MAX; topology.node_count()];
    let mut queue = VecDeque::new();
    dist[source.index()] = 0;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let next = dist[node.index()] + 1;
        for (neighbor, _) in topology.neighbors(node) {
            if dist[neighbor.index()] == u32::MAX {
                dist[neighbor.index()] = next;
                queue.push_back(neighbor);
            }
        }
    }
    dist
}

/// Length-weighted distances from `source`; `f64::INFINITY` for unreachable
/// nodes.
fn dijkstra(topology: &Topology, source: NodeId) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; topology.node_count()];
    dist[source.index()] = 0.0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), source)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }
        for (neighbor, length) in topology.neighbors(node) {
            let new_cost = cost + length;
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }
    dist
}
