//! The `DispatchEngine` and `EngineFactory` traits, the seam between the
//! sweep harness and the vehicle routing/insertion engine.

use drt_core::{NodeId, Request, TopologyTag};
use drt_topology::Topology;

use crate::{EngineResult, MetricTable, ResultRecord};

/// A dispatch engine bound to one topology and tag.
///
/// The harness builds a fresh engine per sweep point through an
/// [`EngineFactory`], calls [`run`](Self::run) exactly once, then reads the
/// results back.  Route state, insertion feasibility, and detour bounds are
/// the engine's own business.
pub trait DispatchEngine {
    /// Serve every request of `requests` starting from the vehicle location
    /// `start`.  The stream is consumed lazily and in order.
    fn run<I>(&mut self, requests: I, start: NodeId) -> EngineResult<()>
    where
        I: Iterator<Item = Request>;

    /// Per-request metrics collected by the last `run`.
    fn req_data(&self) -> &MetricTable;

    /// Per-insertion metrics collected by the last `run`.
    fn insertion_data(&self) -> &MetricTable;

    /// Consume the engine and hand its results over.
    fn into_record(self) -> ResultRecord
    where
        Self: Sized;
}

/// Constructs engines from a `(topology, tag)` pair.
///
/// The tag selects whether and which route-volume bookkeeping the engine
/// performs (see [`TopologyTag::computes_volumes`]).
///
/// # Example
///
/// ```rust,ignore
/// struct ZeroDetourFactory;
///
/// impl EngineFactory for ZeroDetourFactory {
///     type Engine = ZeroDetourBus;
///     fn build(&self, topology: &Topology, tag: TopologyTag) -> EngineResult<ZeroDetourBus> {
///         Ok(ZeroDetourBus::new(topology.clone(), tag))
///     }
/// }
/// ```
pub trait EngineFactory {
    type Engine: DispatchEngine;

    fn build(&self, topology: &Topology, tag: TopologyTag) -> EngineResult<Self::Engine>;
}
