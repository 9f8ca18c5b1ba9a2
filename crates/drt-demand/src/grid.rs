//! The fixed, ordered sequence of sweep values.

use serde::{Deserialize, Serialize};

use crate::{DemandError, DemandResult};

/// `points` values linearly spaced over `[start, stop]`, both ends included.
///
/// Values are recomputed from the index on demand (`start + i * step`, the
/// last point exactly `stop`), so a point index is a stable stand-in for its
/// floating-point value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    pub start:  f64,
    pub stop:   f64,
    pub points: usize,
}

impl SweepGrid {
    pub const DEFAULT_START:  f64   = 0.1;
    pub const DEFAULT_STOP:   f64   = 40.0;
    pub const DEFAULT_POINTS: usize = 100;

    pub fn new(start: f64, stop: f64, points: usize) -> DemandResult<Self> {
        let grid = Self { start, stop, points };
        grid.validate()?;
        Ok(grid)
    }

    /// Bounds must be finite with `0 < start <= stop`, and at least one point.
    pub fn validate(&self) -> DemandResult<()> {
        if self.points == 0 {
            return Err(DemandError::InvalidGrid("grid has no points".to_owned()));
        }
        if !(self.start.is_finite() && self.stop.is_finite()) {
            return Err(DemandError::InvalidGrid(format!(
                "bounds [{}, {}] are not finite", self.start, self.stop
            )));
        }
        if !(self.start > 0.0 && self.start <= self.stop) {
            return Err(DemandError::InvalidGrid(format!(
                "bounds [{}, {}] must satisfy 0 < start <= stop", self.start, self.stop
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    /// Spacing between consecutive values (0 for a single-point grid).
    pub fn step(&self) -> f64 {
        if self.points > 1 {
            (self.stop - self.start) / (self.points - 1) as f64
        } else {
            0.0
        }
    }

    /// Value at `index`, or `None` past the end.
    pub fn value(&self, index: usize) -> Option<f64> {
        if index >= self.points {
            None
        } else if self.points > 1 && index == self.points - 1 {
            Some(self.stop)
        } else {
            Some(self.start + index as f64 * self.step())
        }
    }

    /// `(index, x)` pairs in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.points).filter_map(|i| self.value(i).map(|x| (i, x)))
    }
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            start:  Self::DEFAULT_START,
            stop:   Self::DEFAULT_STOP,
            points: Self::DEFAULT_POINTS,
        }
    }
}
