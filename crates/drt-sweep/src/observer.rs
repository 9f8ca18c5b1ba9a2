//! Sweep observer trait for progress reporting.

use crate::SweepOutcome;

/// Callbacks invoked by [`Sweep::run`][crate::Sweep::run] as the sweep moves
/// through its grid.
///
/// All methods have default no-op implementations.
///
/// # Example: point counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct PointCounter { done: usize }
///
/// impl SweepObserver for PointCounter {
///     fn on_point_end(&mut self, _index: usize, _x: f64) {
///         self.done += 1;
///     }
/// }
/// ```
pub trait SweepObserver {
    /// Topology loaded, about to compute the first missing point.
    fn on_sweep_start(&mut self, _name: &str, _points: usize) {}

    /// About to run the engine for grid point `index`.
    fn on_point_start(&mut self, _index: usize, _x: f64, _rate: f64) {}

    /// The engine returned for grid point `index`.
    fn on_point_end(&mut self, _index: usize, _x: f64) {}

    /// The store was written to disk holding `entries` points.
    fn on_checkpoint(&mut self, _index: usize, _entries: usize) {}

    /// Called once per sweep, including skipped ones.
    fn on_sweep_end(&mut self, _outcome: &SweepOutcome) {}
}

/// A [`SweepObserver`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}
