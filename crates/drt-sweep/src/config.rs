//! Sweep and experiment configuration.

use serde::{Deserialize, Serialize};

use drt_core::SimRng;
use drt_demand::SweepGrid;
use drt_topology::PathMetric;

use crate::{SweepError, SweepResult};

/// What to do when a sweep's result file already exists.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumePolicy {
    /// Any existing file counts as done and the sweep is skipped, even if the
    /// file holds only part of the grid (a sweep interrupted mid-way).
    #[default]
    FileExists,
    /// Load the file; skip only if every grid point is present, otherwise
    /// continue from the first missing point.
    RequireComplete,
}

/// Settings shared by every sweep of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub grid:               SweepGrid,
    /// Requests generated per grid point.
    pub requests_per_point: usize,
    pub resume:             ResumePolicy,
}

impl SweepConfig {
    pub const DEFAULT_REQUESTS_PER_POINT: usize = 10_000;

    pub fn validate(&self) -> SweepResult<()> {
        self.grid.validate().map_err(|e| SweepError::Config(e.to_string()))?;
        if self.requests_per_point == 0 {
            return Err(SweepError::Config("requests_per_point must be at least 1".to_owned()));
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            grid:               SweepGrid::default(),
            requests_per_point: Self::DEFAULT_REQUESTS_PER_POINT,
            resume:             ResumePolicy::default(),
        }
    }
}

/// Settings for a whole orchestrated run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Master seed.  `None` seeds every sweep from OS entropy.
    pub seed:        Option<u64>,
    pub sweep:       SweepConfig,
    /// Metric used for `l_avg`.
    pub path_metric: PathMetric,
}

impl ExperimentConfig {
    /// Random stream for the experiment at position `index` of the run.
    ///
    /// With a master seed the stream depends only on `(seed, index)`, not on
    /// which experiments ran before it.
    pub fn rng_for(&self, index: usize) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::for_stream(seed, index as u64),
            None => SimRng::from_entropy(),
        }
    }
}
