//! Rate normalisation across topologies.
//!
//! A sweep value `x` becomes an absolute arrival rate via
//!
//!   rate = x / (2 * l_avg)
//!
//! where `l_avg` is the topology's average shortest path length, so equal
//! `x` means comparable load on rings, grids, and city networks alike.

use drt_topology::{PathMetric, Topology};

use crate::{DemandError, DemandResult};

/// `x / (2 * l_avg)`.
#[inline]
pub fn normalize(x: f64, l_avg: f64) -> f64 {
    x / (2.0 * l_avg)
}

/// Caches `l_avg` for one topology; computed once before a sweep begins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RateNormalizer {
    l_avg: f64,
}

impl RateNormalizer {
    /// `l_avg` must be finite and positive.
    pub fn new(l_avg: f64) -> DemandResult<Self> {
        if !(l_avg.is_finite() && l_avg > 0.0) {
            return Err(DemandError::InvalidPathLength(l_avg));
        }
        Ok(Self { l_avg })
    }

    /// Compute `l_avg` for `topology`.  Fails on a disconnected graph.
    pub fn for_topology(topology: &Topology, metric: PathMetric) -> DemandResult<Self> {
        Self::new(topology.average_shortest_path_length(metric)?)
    }

    pub fn l_avg(&self) -> f64 {
        self.l_avg
    }

    #[inline]
    pub fn rate(&self, x: f64) -> f64 {
        normalize(x, self.l_avg)
    }
}
