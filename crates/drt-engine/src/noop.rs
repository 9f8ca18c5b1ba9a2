//! A placeholder engine that dispatches nothing.

use drt_core::{NodeId, Request, TopologyTag};
use drt_topology::Topology;

use crate::{DispatchEngine, EngineError, EngineFactory, EngineResult, MetricTable, ResultRecord};

/// A [`DispatchEngine`] that records each request verbatim and performs no
/// insertions.
///
/// `req_data` gets the columns `sequence_index`, `arrival_time`, `origin` and
/// `destination`; `insertion_data` stays empty.  Useful for exercising the
/// harness end to end before a real engine is linked in.
pub struct NoopEngine {
    tag:            TopologyTag,
    node_count:     usize,
    req_data:       MetricTable,
    insertion_data: MetricTable,
    ran:            bool,
}

impl NoopEngine {
    pub fn new(topology: &Topology, tag: TopologyTag) -> Self {
        Self {
            tag,
            node_count:     topology.node_count(),
            req_data:       MetricTable::new(),
            insertion_data: MetricTable::new(),
            ran:            false,
        }
    }

    pub fn tag(&self) -> TopologyTag {
        self.tag
    }
}

impl DispatchEngine for NoopEngine {
    fn run<I>(&mut self, requests: I, start: NodeId) -> EngineResult<()>
    where
        I: Iterator<Item = Request>,
    {
        if self.ran {
            return Err(EngineError::AlreadyRan);
        }
        if start.index() >= self.node_count {
            return Err(EngineError::InvalidStart(start));
        }
        self.ran = true;
        for r in requests {
            self.req_data.push("sequence_index", r.seq as f64);
            self.req_data.push("arrival_time", r.arrival_time);
            self.req_data.push("origin", r.origin.0 as f64);
            self.req_data.push("destination", r.destination.0 as f64);
        }
        Ok(())
    }

    fn req_data(&self) -> &MetricTable {
        &self.req_data
    }

    fn insertion_data(&self) -> &MetricTable {
        &self.insertion_data
    }

    fn into_record(self) -> ResultRecord {
        ResultRecord {
            req_data:       self.req_data,
            insertion_data: self.insertion_data,
        }
    }
}

/// Builds a [`NoopEngine`] per sweep point.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopEngineFactory;

impl EngineFactory for NoopEngineFactory {
    type Engine = NoopEngine;

    fn build(&self, topology: &Topology, tag: TopologyTag) -> EngineResult<NoopEngine> {
        Ok(NoopEngine::new(topology, tag))
    }
}
