//! `ResultStore`: the accumulated results of one sweep.

use serde::{Deserialize, Serialize};

use drt_demand::SweepGrid;
use drt_engine::ResultRecord;

use crate::{StoreError, StoreResult};

/// One computed grid point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreEntry {
    /// Position in the grid.
    pub index:  usize,
    /// Sweep value at `index`.
    pub x:      f64,
    pub record: ResultRecord,
}

/// Results of one sweep, keyed by grid point index.
///
/// Entries are kept in insertion order and are never removed or replaced.
/// The store is complete once every point of its grid is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultStore {
    grid:    SweepGrid,
    entries: Vec<StoreEntry>,
}

impl ResultStore {
    pub fn new(grid: SweepGrid) -> Self {
        Self { grid, entries: Vec::with_capacity(grid.len()) }
    }

    pub fn grid(&self) -> &SweepGrid {
        &self.grid
    }

    /// Add the record for grid point `index`.
    ///
    /// Fails with `PointOutOfRange` past the end of the grid, with
    /// `DuplicatePoint` if `index` is already stored, and with `NonFinite`
    /// if the record holds a NaN or infinite metric (JSON cannot carry one).
    pub fn insert(&mut self, index: usize, record: ResultRecord) -> StoreResult<()> {
        let x = self.grid.value(index).ok_or(StoreError::PointOutOfRange {
            index,
            points: self.grid.len(),
        })?;
        if self.contains(index) {
            return Err(StoreError::DuplicatePoint { index });
        }
        if let Some((table, column)) = record.non_finite() {
            return Err(StoreError::NonFinite { index, table, column: column.to_owned() });
        }
        self.entries.push(StoreEntry { index, x, record });
        Ok(())
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.iter().any(|e| e.index == index)
    }

    pub fn get(&self, index: usize) -> Option<&ResultRecord> {
        self.entries.iter().find(|e| e.index == index).map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == self.grid.len()
    }

    /// Point indices in insertion order.
    pub fn keys_in_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.index)
    }

    /// Sweep values in insertion order.
    pub fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.x)
    }

    pub fn entries(&self) -> &[StoreEntry] {
        &self.entries
    }

    /// Lowest grid index without a stored record.
    pub fn first_missing(&self) -> Option<usize> {
        (0..self.grid.len()).find(|&i| !self.contains(i))
    }

    /// Rebuild a store from persisted parts, re-checking every entry.
    ///
    /// Stored `x` values are replaced by the grid's own value for the index.
    pub fn from_entries(
        grid: SweepGrid,
        entries: impl IntoIterator<Item = (usize, ResultRecord)>,
    ) -> StoreResult<Self> {
        let mut store = Self::new(grid);
        for (index, record) in entries {
            store.insert(index, record)?;
        }
        Ok(store)
    }

    /// Structural check run after loading a file.
    pub(crate) fn check(self) -> Result<Self, String> {
        self.grid.validate().map_err(|e| e.to_string())?;
        let grid = self.grid;
        Self::from_entries(grid, self.entries.into_iter().map(|e| (e.index, e.record)))
            .map_err(|e| e.to_string())
    }
}
