//! `Orchestrator`: runs one sweep per experiment and reports every outcome.

use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use drt_core::TopologyTag;
use drt_engine::EngineFactory;
use drt_topology::TopologySpec;

use crate::writer::StoreWriter;
use crate::{
    ExperimentConfig, JsonStoreWriter, Sweep, SweepObserver, SweepOutcome, SweepResult,
};

/// One entry of the experiment list: a topology and where its results go.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub name:     String,
    pub topology: TopologySpec,
    pub output:   PathBuf,
    pub tag:      TopologyTag,
}

impl Experiment {
    /// Experiment using the topology's conventional tag.
    pub fn new(name: impl Into<String>, topology: TopologySpec, output: impl Into<PathBuf>) -> Self {
        let tag = topology.default_tag();
        Self { name: name.into(), topology, output: output.into(), tag }
    }

    pub fn with_tag(mut self, tag: TopologyTag) -> Self {
        self.tag = tag;
        self
    }
}

/// Per-experiment results of an orchestrated run, in experiment order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<(String, SweepResult<SweepOutcome>)>,
}

impl RunReport {
    pub fn completed(&self) -> usize {
        self.count(|r| matches!(r, Ok(SweepOutcome::Completed { .. })))
    }

    pub fn skipped(&self) -> usize {
        self.count(|r| matches!(r, Ok(SweepOutcome::Skipped)))
    }

    pub fn failed(&self) -> usize {
        self.count(Result::is_err)
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn get(&self, name: &str) -> Option<&SweepResult<SweepOutcome>> {
        self.results.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    fn count(&self, pred: impl Fn(&SweepResult<SweepOutcome>) -> bool) -> usize {
        self.results.iter().filter(|(_, r)| pred(r)).count()
    }
}

/// Runs a list of experiments, each as an independent sweep.
///
/// A failed sweep is logged and recorded in the [`RunReport`]; the remaining
/// experiments still run.  Experiment `i` draws from
/// [`ExperimentConfig::rng_for`]`(i)`, so with a master seed each sweep is
/// reproducible on its own.
pub struct Orchestrator<W: StoreWriter = JsonStoreWriter> {
    config:      ExperimentConfig,
    experiments: Vec<Experiment>,
    _store:      PhantomData<fn() -> W>,
}

impl Orchestrator<JsonStoreWriter> {
    pub fn new(config: ExperimentConfig, experiments: Vec<Experiment>) -> Self {
        Self { config, experiments, _store: PhantomData }
    }
}

impl<W: StoreWriter> Orchestrator<W> {
    /// Switch the result-store backend.
    pub fn with_store<V: StoreWriter>(self) -> Orchestrator<V> {
        Orchestrator { config: self.config, experiments: self.experiments, _store: PhantomData }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Run every experiment in list order.
    pub fn run<F, O>(&self, factory: &F, observer: &mut O) -> RunReport
    where
        F: EngineFactory,
        O: SweepObserver,
    {
        info!(experiments = self.experiments.len(), seed = ?self.config.seed, "run started");
        let results = self
            .experiments
            .iter()
            .enumerate()
            .map(|(i, exp)| (exp.name.clone(), self.run_one(i, exp, factory, observer)))
            .collect();
        self.finish(RunReport { results })
    }

    /// Run experiments concurrently on Rayon's thread pool.  Each worker gets
    /// its own clone of `observer`.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<F, O>(&self, factory: &F, observer: &O) -> RunReport
    where
        F: EngineFactory + Sync,
        O: SweepObserver + Clone + Sync,
    {
        use rayon::prelude::*;

        info!(experiments = self.experiments.len(), seed = ?self.config.seed, "parallel run started");
        let results = self
            .experiments
            .par_iter()
            .enumerate()
            .map(|(i, exp)| {
                let mut observer = observer.clone();
                (exp.name.clone(), self.run_one(i, exp, factory, &mut observer))
            })
            .collect();
        self.finish(RunReport { results })
    }

    fn run_one<F, O>(
        &self,
        index:    usize,
        exp:      &Experiment,
        factory:  &F,
        observer: &mut O,
    ) -> SweepResult<SweepOutcome>
    where
        F: EngineFactory,
        O: SweepObserver,
    {
        let mut rng = self.config.rng_for(index);
        let mut sweep = Sweep::with_writer(
            exp.name.clone(),
            exp.topology.clone(),
            exp.tag,
            W::at(exp.output.clone()),
            self.config.sweep.clone(),
        )
        .path_metric(self.config.path_metric);

        let result = sweep.run(factory, &mut rng, observer);
        if let Err(e) = &result {
            error!(experiment = %exp.name, kind = ?e.kind(), error = %e, "sweep failed");
        }
        result
    }

    fn finish(&self, report: RunReport) -> RunReport {
        info!(
            completed = report.completed(),
            skipped = report.skipped(),
            failed = report.failed(),
            "run finished"
        );
        report
    }
}
