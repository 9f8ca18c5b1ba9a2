//! Result payloads returned by a dispatch engine.
//!
//! The harness only forwards these; it never looks inside.  Columns are
//! whatever the engine chooses to record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column-oriented named series of `f64` values.
///
/// Result stores only accept finite values; see
/// [`ResultRecord::non_finite`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricTable(BTreeMap<String, Vec<f64>>);

impl MetricTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to `column`, creating the column on first use.
    pub fn push(&mut self, column: &str, value: f64) {
        match self.0.get_mut(column) {
            Some(values) => values.push(value),
            None => {
                self.0.insert(column.to_owned(), vec![value]);
            }
        }
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Column names in sorted order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Length of the longest column.
    pub fn rows(&self) -> usize {
        self.0.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name of the first column holding a NaN or infinite value.
    pub fn non_finite_column(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, values)| values.iter().any(|v| !v.is_finite()))
            .map(|(name, _)| name.as_str())
    }
}

/// Outcome of one engine run: one per (topology, sweep point).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Per-request outcome metrics.
    pub req_data:       MetricTable,
    /// Per-insertion outcome metrics.
    pub insertion_data: MetricTable,
}

impl ResultRecord {
    /// `(table, column)` of the first non-finite value, if any.
    pub fn non_finite(&self) -> Option<(&'static str, &str)> {
        self.req_data
            .non_finite_column()
            .map(|c| ("req_data", c))
            .or_else(|| self.insertion_data.non_finite_column().map(|c| ("insertion_data", c)))
    }
}
