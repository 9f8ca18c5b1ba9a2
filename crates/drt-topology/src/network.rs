//! Topology representation and builder.
//!
//! # Data layout
//!
//! The graph is undirected.  Each undirected edge is stored once in
//! [`Topology::edges`] (enumeration order) and twice in the **Compressed
//! Sparse Row (CSR)** adjacency, once per direction.  Given a `NodeId n`,
//! its neighbours occupy the slice:
//!
//! ```text
//! adj_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! so the BFS/Dijkstra inner loops are a contiguous memory scan.

use std::collections::HashSet;

use rand::seq::index;

use drt_core::{EdgeId, NodeId, SimRng};

use crate::{TopologyError, TopologyResult};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One undirected edge.  `a < b` always holds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub a:      NodeId,
    pub b:      NodeId,
    /// Edge length (1.0 for synthetic lattices, metres for street networks).
    pub length: f64,
}

// ── Topology ──────────────────────────────────────────────────────────────────

/// Immutable undirected graph shared read-only across all rate points of a
/// sweep.
///
/// Built only through [`TopologyBuilder`] or one of the generators in
/// [`crate::generators`]; the CSR arrays are private so `node_out_start`
/// always holds `node_count + 1` entries.
///
/// ```compile_fail
/// use drt_topology::Topology;
///
/// let broken = Topology { node_out_start: vec![], adj_to: vec![], adj_length: vec![], edges: vec![] };
/// ```
#[derive(Clone, Debug)]
pub struct Topology {
    /// CSR row pointer.  Length = `node_count + 1`.
    pub(crate) node_out_start: Vec<u32>,

    /// Neighbour of each adjacency slot.
    pub(crate) adj_to: Vec<NodeId>,

    /// Length of the edge behind each adjacency slot.
    pub(crate) adj_length: Vec<f64>,

    /// Undirected edge list, indexed by `EdgeId`.
    pub(crate) edges: Vec<Edge>,
}

impl Topology {
    /// Construct a graph with no nodes or edges.
    pub fn empty() -> Self {
        TopologyBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    // ── Enumeration ───────────────────────────────────────────────────────

    /// All node ids, `0..node_count`.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(|i| NodeId(i as u32))
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// All undirected edges, each exactly once.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId(i as u32), e))
    }

    /// Neighbours of `node` with the connecting edge length.
    ///
    /// # Panics
    /// Panics if `node` is not in the graph; check with [`contains`](Self::contains).
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| (self.adj_to[i], self.adj_length[i]))
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// Uniformly sample `k` distinct nodes without replacement, in random
    /// order.
    pub fn sample_nodes(&self, k: usize, rng: &mut SimRng) -> TopologyResult<Vec<NodeId>> {
        let n = self.node_count();
        if k > n {
            return Err(TopologyError::TooFewNodes { needed: k, available: n });
        }
        Ok(index::sample(rng.inner(), n, k)
            .into_iter()
            .map(|i| NodeId(i as u32))
            .collect())
    }

    /// Uniformly sample a single node.
    pub fn sample_node(&self, rng: &mut SimRng) -> TopologyResult<NodeId> {
        let n = self.node_count();
        if n == 0 {
            return Err(TopologyError::TooFewNodes { needed: 1, available: 0 });
        }
        Ok(NodeId(rng.gen_range(0..n) as u32))
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Construct a [`Topology`] incrementally, then call [`build`](Self::build).
///
/// Adding an edge implicitly adds any endpoint not seen before, so nodes
/// only need explicit [`add_node`](Self::add_node) calls when they may end
/// up isolated.  Parallel edges collapse onto the first one added;
/// self-loops are dropped.
///
/// # Example
///
/// ```
/// use drt_core::NodeId;
/// use drt_topology::TopologyBuilder;
///
/// let mut b = TopologyBuilder::new();
/// let a = b.add_node();
/// let c = b.add_node();
/// b.add_edge(a, c, 1.0);
/// b.add_edge(c, a, 2.0); // duplicate, ignored
/// let topo = b.build();
/// assert_eq!(topo.node_count(), 2);
/// assert_eq!(topo.edge_count(), 1);
/// assert_eq!(topo.degree(NodeId(0)), 1);
/// ```
pub struct TopologyBuilder {
    node_count: u32,
    edges:      Vec<Edge>,
    seen:       HashSet<(NodeId, NodeId)>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self { node_count: 0, edges: Vec::new(), seen: HashSet::new() }
    }

    /// Pre-allocate for the expected number of edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            node_count: 0,
            edges:      Vec::with_capacity(edges),
            seen:       HashSet::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count);
        self.node_count += 1;
        id
    }

    /// Add `n` nodes at once.
    pub fn add_nodes(&mut self, n: usize) {
        self.node_count += n as u32;
    }

    /// Add an undirected edge.  Returns `false` if it was a self-loop or a
    /// duplicate and therefore ignored.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, length: f64) -> bool {
        if a == b {
            return false;
        }
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        if !self.seen.insert((a, b)) {
            return false;
        }
        self.node_count = self.node_count.max(b.0 + 1);
        self.edges.push(Edge { a, b, length });
        true
    }

    pub fn node_count(&self) -> usize { self.node_count as usize }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`Topology`].
    ///
    /// Time complexity: O(N + E) (counting sort into CSR).
    pub fn build(self) -> Topology {
        let node_count = self.node_count as usize;

        // Degree count → CSR row pointer.
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &self.edges {
            node_out_start[e.a.index() + 1] += 1;
            node_out_start[e.b.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        let slots = node_out_start[node_count] as usize;
        debug_assert_eq!(slots, self.edges.len() * 2);

        // Scatter both directions of every edge into their rows.
        let mut cursor: Vec<u32> = node_out_start[..node_count].to_vec();
        let mut adj_to     = vec![NodeId::UNSET; slots];
        let mut adj_length = vec![0.0; slots];
        for e in &self.edges {
            for (from, to) in [(e.a, e.b), (e.b, e.a)] {
                let slot = cursor[from.index()] as usize;
                adj_to[slot] = to;
                adj_length[slot] = e.length;
                cursor[from.index()] += 1;
            }
        }

        Topology {
            node_out_start,
            adj_to,
            adj_length,
            edges: self.edges,
        }
    }
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
