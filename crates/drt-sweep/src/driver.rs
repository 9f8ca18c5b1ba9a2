//! The `Sweep` driver: one topology, every grid point, a checkpoint after
//! each.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use drt_core::{SimRng, TopologyTag};
use drt_demand::{PoissonRequests, RateNormalizer};
use drt_engine::{DispatchEngine, EngineFactory, ResultRecord};
use drt_topology::{PathMetric, Topology, TopologySpec};

use crate::writer::StoreWriter;
use crate::{
    JsonStoreWriter, ResultStore, ResumePolicy, StoreError, SweepConfig, SweepError, SweepObserver,
    SweepResult,
};

// ── State ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SweepState {
    Idle,
    /// `completed` points are in the store (including resumed ones).
    Running { completed: usize },
    Done,
    Skipped,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SweepOutcome {
    /// A result file was already present; nothing was loaded or computed.
    Skipped,
    /// `points` grid points were computed by this run.
    Completed { points: usize },
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// One rate sweep over one topology.
///
/// `run` walks the grid in increasing `x`.  Each point gets a fresh engine,
/// a fresh Poisson request stream and a uniformly drawn start node; its
/// record is added to the store and the whole store is checkpointed.
///
/// The result file is checked before the topology is built, so a finished
/// sweep never pays for loading a street network.
///
/// # Example
///
/// ```rust,ignore
/// let mut sweep = Sweep::new("ring_10", TopologySpec::Ring { nodes: 10 }, TopologyTag::Ring,
///                            "data/ring_10.json", SweepConfig::default());
/// sweep.run(&NoopEngineFactory, &mut SimRng::new(1), &mut NoopObserver)?;
/// ```
pub struct Sweep<W: StoreWriter = JsonStoreWriter> {
    name:        String,
    topology:    TopologySpec,
    tag:         TopologyTag,
    path_metric: PathMetric,
    config:      SweepConfig,
    writer:      W,
    state:       SweepState,
}

impl Sweep<JsonStoreWriter> {
    /// Sweep writing a JSON store to `output`.
    pub fn new(
        name:     impl Into<String>,
        topology: TopologySpec,
        tag:      TopologyTag,
        output:   impl Into<PathBuf>,
        config:   SweepConfig,
    ) -> Self {
        Self::with_writer(name, topology, tag, JsonStoreWriter::at(output.into()), config)
    }
}

impl<W: StoreWriter> Sweep<W> {
    pub fn with_writer(
        name:     impl Into<String>,
        topology: TopologySpec,
        tag:      TopologyTag,
        writer:   W,
        config:   SweepConfig,
    ) -> Self {
        Self {
            name: name.into(),
            topology,
            tag,
            path_metric: PathMetric::default(),
            config,
            writer,
            state: SweepState::Idle,
        }
    }

    /// Metric used for `l_avg` (hop count by default).
    pub fn path_metric(mut self, metric: PathMetric) -> Self {
        self.path_metric = metric;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Run every missing grid point.  A sweep runs at most once.
    pub fn run<F, O>(
        &mut self,
        factory:  &F,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> SweepResult<SweepOutcome>
    where
        F: EngineFactory,
        O: SweepObserver,
    {
        if self.state != SweepState::Idle {
            return Err(SweepError::AlreadyRun);
        }
        self.config.validate()?;

        let Some(mut store) = self.resume_from()? else {
            self.state = SweepState::Skipped;
            observer.on_sweep_end(&SweepOutcome::Skipped);
            return Ok(SweepOutcome::Skipped);
        };

        let topology = self.topology.load()?;
        let normalizer = RateNormalizer::for_topology(&topology, self.path_metric)?;
        info!(
            sweep = %self.name,
            topology = %self.topology,
            nodes = topology.node_count(),
            edges = topology.edge_count(),
            l_avg = normalizer.l_avg(),
            "sweep started"
        );

        let grid = self.config.grid;
        observer.on_sweep_start(&self.name, grid.len());
        self.state = SweepState::Running { completed: store.len() };

        let mut computed = 0;
        for (index, x) in grid.iter() {
            if store.contains(index) {
                continue;
            }
            let rate = normalizer.rate(x);
            debug!(sweep = %self.name, index, x, rate, "rate point");
            observer.on_point_start(index, x, rate);

            let record = self.run_point(&topology, rate, factory, rng)?;
            observer.on_point_end(index, x);

            store.insert(index, record)?;
            self.writer.checkpoint(&store)?;
            debug!(path = %self.writer.path().display(), entries = store.len(), "checkpoint written");
            observer.on_checkpoint(index, store.len());

            computed += 1;
            self.state = SweepState::Running { completed: store.len() };
        }

        self.state = SweepState::Done;
        info!(sweep = %self.name, points = computed, path = %self.writer.path().display(), "sweep finished");
        let outcome = SweepOutcome::Completed { points: computed };
        observer.on_sweep_end(&outcome);
        Ok(outcome)
    }

    /// The store to continue from, or `None` if the sweep should be skipped.
    fn resume_from(&self) -> SweepResult<Option<ResultStore>> {
        let grid = self.config.grid;
        if !self.writer.exists() {
            return Ok(Some(ResultStore::new(grid)));
        }
        let path = self.writer.path().display();

        match self.config.resume {
            ResumePolicy::FileExists => {
                info!(sweep = %self.name, path = %path, "result file exists, skipping");
                Ok(None)
            }
            ResumePolicy::RequireComplete => {
                let stored = self.writer.load()?;
                if *stored.grid() != grid {
                    return Err(StoreError::GridMismatch { path: self.writer.path().to_path_buf() }.into());
                }
                if stored.is_complete() {
                    info!(sweep = %self.name, path = %path, "result file complete, skipping");
                    return Ok(None);
                }
                warn!(
                    sweep = %self.name,
                    path = %path,
                    entries = stored.len(),
                    points = grid.len(),
                    first_missing = stored.first_missing(),
                    "result file is incomplete, resuming"
                );
                Ok(Some(stored))
            }
        }
    }

    fn run_point<F: EngineFactory>(
        &self,
        topology: &Topology,
        rate:     f64,
        factory:  &F,
        rng:      &mut SimRng,
    ) -> SweepResult<ResultRecord> {
        let mut engine = factory.build(topology, self.tag)?;
        let start = topology.sample_node(rng)?;
        let requests = PoissonRequests::new(topology, self.config.requests_per_point, rate, rng)?;
        engine.run(requests, start)?;
        Ok(engine.into_record())
    }
}
