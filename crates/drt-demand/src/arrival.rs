//! Homogeneous Poisson arrival process over a topology.
//!
//! Each request draws its inter-arrival gap from `Exp(rate)` (mean
//! `1 / rate`) and its origin/destination as an ordered sample of two
//! distinct nodes, uniformly and independently of all earlier requests.
//! Any node may appear in either role, hubs included.

use rand::seq::index;
use rand_distr::{Distribution, Exp};

use drt_core::{NodeId, Request, SimRng};
use drt_topology::Topology;

use crate::{DemandError, DemandResult};

/// Lazy, finite, non-restartable stream of `count` requests.
///
/// Holds only the running clock and sequence counter beyond its borrowed
/// inputs; it performs no I/O.
pub struct PoissonRequests<'a> {
    topology:      &'a Topology,
    rng:           &'a mut SimRng,
    inter_arrival: Exp<f64>,
    remaining:     usize,
    seq:           u64,
    clock:         f64,
}

impl<'a> PoissonRequests<'a> {
    /// Create a stream of `count` requests arriving at `rate` per time unit.
    ///
    /// `rate` must be finite and positive; the topology needs at least two
    /// nodes so that origin and destination can differ.
    pub fn new(
        topology: &'a Topology,
        count:    usize,
        rate:     f64,
        rng:      &'a mut SimRng,
    ) -> DemandResult<Self> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(DemandError::InvalidRate(rate));
        }
        if topology.node_count() < 2 {
            return Err(DemandError::TooFewNodes { available: topology.node_count() });
        }
        let inter_arrival = Exp::new(rate).map_err(|_| DemandError::InvalidRate(rate))?;
        Ok(Self {
            topology,
            rng,
            inter_arrival,
            remaining: count,
            seq: 0,
            clock: 0.0,
        })
    }

    /// Arrival time of the last request produced (0 before the first).
    pub fn clock(&self) -> f64 {
        self.clock
    }
}

impl Iterator for PoissonRequests<'_> {
    type Item = Request;

    fn next(&mut self) -> Option<Request> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let pair = index::sample(self.rng.inner(), self.topology.node_count(), 2);
        let origin      = NodeId(pair.index(0) as u32);
        let destination = NodeId(pair.index(1) as u32);

        let gap = self.inter_arrival.sample(self.rng.inner());
        let next = self.clock + gap;
        // A gap below the clock's resolution must still move time forward.
        self.clock = if next > self.clock { next } else { f64::from_bits(self.clock.to_bits() + 1) };

        self.seq += 1;
        Some(Request::new(self.seq, self.clock, origin, destination))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PoissonRequests<'_> {}
