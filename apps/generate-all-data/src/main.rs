//! generate-all-data: run the full rate sweep over every study topology.
//!
//! Synthetic graphs (ring, line, star, grid, triangular lattice) are built in
//! memory; the homogenised street networks of Göttingen, the Harz and Berlin
//! are read from `data/homogenized_networks/`.  Each experiment writes one
//! result file under `data/` and is skipped if that file already exists, so
//! an interrupted run can simply be restarted.
//!
//! The dispatch engine is the placeholder `NoopEngineFactory`; swap in a real
//! `EngineFactory` to produce study data.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Result, anyhow, bail};
use tracing::{Level, info, warn};

use drt_engine::NoopEngineFactory;
use drt_sweep::{Experiment, ExperimentConfig, Orchestrator, SweepConfig, SweepObserver, SweepOutcome};
use drt_topology::{PathMetric, TopologySpec};

// ── Constants ─────────────────────────────────────────────────────────────────

const DATA_DIR:            &str        = "data";
const NETWORK_DIR:         &str        = "data/homogenized_networks";
const SEED:                Option<u64> = Some(42);
const PROGRESS_EVERY:      usize       = 10;    // log every 10th grid point
const FAIL_ON_SWEEP_ERROR: bool        = false;
const STORE_EXT:           &str        = if cfg!(feature = "sqlite") { "db" } else { "json" };

/// `(coarse_graining_m, target_edge_length_m)` variants of the Berlin network.
const BERLIN_COARSE_GRAINING: [(u32, u32); 3] = [(200, 400), (200, 600), (200, 800)];

// ── Experiment list ───────────────────────────────────────────────────────────

fn experiments() -> Vec<Experiment> {
    let data = Path::new(DATA_DIR);
    let networks = Path::new(NETWORK_DIR);
    let out = |name: &str| data.join(format!("{name}.{STORE_EXT}"));

    let mut list = vec![
        Experiment::new("ring_10", TopologySpec::Ring { nodes: 10 }, out("ring_10")),
        Experiment::new("ring_100", TopologySpec::Ring { nodes: 101 }, out("ring_100")),
        Experiment::new("line_100", TopologySpec::Line { nodes: 100 }, out("line_100")),
        Experiment::new("star_100", TopologySpec::Star { leaves: 100 }, out("star_100")),
        Experiment::new("grid_10", TopologySpec::Grid { rows: 10, cols: 10 }, out("grid_10")),
        Experiment::new("trigrid_13", TopologySpec::TriGrid { rows: 13, cols: 13 }, out("trigrid_13")),
    ];

    for city in ["goe", "harz", "berlin"] {
        let name = format!("street_{city}_homogenized");
        let path: PathBuf = networks.join(city).join("G_homog.csv");
        list.push(Experiment::new(&name, TopologySpec::StreetNetwork { path }, out(&name)));
    }

    let family = networks.join("berlin/diff_coarse_graining/all_berlin.csv");
    for (cg, tel) in BERLIN_COARSE_GRAINING {
        let name = format!(
            "street_berlin_homogenized_coarse_graining_meters_{cg}_target_edge_length_{tel}"
        );
        let topology = TopologySpec::CoarseGrained {
            path:                 family.clone(),
            coarse_graining_m:    cg,
            target_edge_length_m: tel,
        };
        list.push(Experiment::new(&name, topology, out(&name)));
    }
    list
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// Logs sweep progress every `PROGRESS_EVERY` grid points.
#[derive(Clone, Default)]
struct Progress {
    sweep:  String,
    points: usize,
    done:   usize,
    start:  Option<Instant>,
}

impl SweepObserver for Progress {
    fn on_sweep_start(&mut self, name: &str, points: usize) {
        self.sweep = name.to_owned();
        self.points = points;
        self.done = 0;
        self.start = Some(Instant::now());
    }

    fn on_checkpoint(&mut self, _index: usize, _entries: usize) {
        self.done += 1;
        if self.done.is_multiple_of(PROGRESS_EVERY) {
            let elapsed = self.start.map(|t| t.elapsed().as_secs_f64()).unwrap_or_default();
            info!(sweep = %self.sweep, done = self.done, points = self.points, elapsed_s = elapsed, "progress");
        }
    }

    fn on_sweep_end(&mut self, outcome: &SweepOutcome) {
        if let (SweepOutcome::Completed { points }, Some(t)) = (outcome, self.start.take()) {
            info!(sweep = %self.sweep, points, elapsed_s = t.elapsed().as_secs_f64(), "sweep timing");
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    let config = ExperimentConfig {
        seed:        SEED,
        sweep:       SweepConfig::default(),
        path_metric: PathMetric::Hops,
    };
    config.sweep.validate()?;
    info!(config = %serde_json::to_string(&config)?, "configuration");

    let orchestrator = Orchestrator::new(config, experiments());
    let t0 = Instant::now();

    #[cfg(feature = "sqlite")]
    let orchestrator = orchestrator.with_store::<drt_sweep::SqliteStoreWriter>();

    #[cfg(not(feature = "parallel"))]
    let report = orchestrator.run(&NoopEngineFactory, &mut Progress::default());
    #[cfg(feature = "parallel")]
    let report = orchestrator.run_parallel(&NoopEngineFactory, &Progress::default());

    // ── Summary ───────────────────────────────────────────────────────────
    for (name, result) in &report.results {
        match result {
            Ok(SweepOutcome::Completed { points }) => info!(experiment = %name, points, "completed"),
            Ok(SweepOutcome::Skipped) => info!(experiment = %name, "skipped (result file exists)"),
            Err(e) => warn!(experiment = %name, kind = ?e.kind(), error = %e, "failed"),
        }
    }
    info!(
        completed = report.completed(),
        skipped = report.skipped(),
        failed = report.failed(),
        elapsed_s = t0.elapsed().as_secs_f64(),
        "all experiments processed"
    );

    if FAIL_ON_SWEEP_ERROR && !report.is_success() {
        bail!("{} experiment(s) failed", report.failed());
    }
    Ok(())
}
