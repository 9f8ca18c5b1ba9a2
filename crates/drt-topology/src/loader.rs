//! CSV loader for precomputed street networks.
//!
//! Street networks are produced upstream (downloaded, homogenised, and
//! optionally coarse-grained) and handed over as plain edge lists.
//!
//! # Single network
//!
//! ```csv
//! source,target,length_m
//! 27541,27542,212.5
//! 27542,31007,188.0
//! ```
//!
//! # Coarse-grained family
//!
//! One file holds every variant; a variant is selected by its
//! `(coarse_graining_m, target_edge_length_m)` key:
//!
//! ```csv
//! coarse_graining_m,target_edge_length_m,source,target,length_m
//! 200,400,1,2,401.2
//! 200,600,1,3,598.7
//! ```
//!
//! Source node ids are arbitrary `u64`s; they are remapped to dense
//! `NodeId`s in first-seen order.  Isolated nodes cannot be expressed in an
//! edge list and are therefore absent.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use drt_core::NodeId;

use crate::{Topology, TopologyBuilder, TopologyError, TopologyResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EdgeRecord {
    source:   u64,
    target:   u64,
    length_m: f64,
}

#[derive(Deserialize)]
struct FamilyRecord {
    coarse_graining_m:    u32,
    target_edge_length_m: u32,
    source:               u64,
    target:               u64,
    length_m:             f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a street network from a CSV edge list.
///
/// A missing file is reported as [`TopologyError::MissingFile`].
pub fn load_edge_list_csv(path: &Path) -> TopologyResult<Topology> {
    let topology = load_edge_list_reader(open(path)?)?;
    debug!(
        path = %path.display(),
        nodes = topology.node_count(),
        edges = topology.edge_count(),
        "loaded street network"
    );
    Ok(topology)
}

/// Like [`load_edge_list_csv`] but accepts any `Read` source.
pub fn load_edge_list_reader<R: Read>(reader: R) -> TopologyResult<Topology> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut remap = NodeRemap::default();
    for result in csv_reader.deserialize::<EdgeRecord>() {
        let row = result?;
        remap.add(row.source, row.target, row.length_m)?;
    }
    remap.finish()
}

/// Load one variant of a coarse-grained network family.
///
/// A missing file is [`TopologyError::MissingFile`]; a key absent from the
/// file is [`TopologyError::UnknownCoarseGraining`].
pub fn load_coarse_grained_csv(
    path:                 &Path,
    coarse_graining_m:    u32,
    target_edge_length_m: u32,
) -> TopologyResult<Topology> {
    let topology = load_coarse_grained_reader(open(path)?, coarse_graining_m, target_edge_length_m)?;
    debug!(
        path = %path.display(),
        coarse_graining_m,
        target_edge_length_m,
        nodes = topology.node_count(),
        edges = topology.edge_count(),
        "loaded coarse-grained street network"
    );
    Ok(topology)
}

/// Like [`load_coarse_grained_csv`] but accepts any `Read` source.
pub fn load_coarse_grained_reader<R: Read>(
    reader:               R,
    coarse_graining_m:    u32,
    target_edge_length_m: u32,
) -> TopologyResult<Topology> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut remap = NodeRemap::default();
    for result in csv_reader.deserialize::<FamilyRecord>() {
        let row = result?;
        if row.coarse_graining_m == coarse_graining_m
            && row.target_edge_length_m == target_edge_length_m
        {
            remap.add(row.source, row.target, row.length_m)?;
        }
    }
    if remap.is_empty() {
        return Err(TopologyError::UnknownCoarseGraining { coarse_graining_m, target_edge_length_m });
    }
    remap.finish()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open(path: &Path) -> TopologyResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TopologyError::MissingFile { path: path.to_path_buf() },
        _ => TopologyError::Io(e),
    })
}

/// Accumulates edges keyed by external ids.
#[derive(Default)]
struct NodeRemap {
    ids:     HashMap<u64, NodeId>,
    builder: TopologyBuilder,
    rows:    usize,
}

impl NodeRemap {
    fn add(&mut self, source: u64, target: u64, length_m: f64) -> TopologyResult<()> {
        self.rows += 1;
        if !(length_m.is_finite() && length_m >= 0.0) {
            return Err(TopologyError::Parse(format!(
                "row {}: edge {source} -> {target} has invalid length {length_m}",
                self.rows
            )));
        }
        let a = self.node(source);
        let b = self.node(target);
        self.builder.add_edge(a, b, length_m);
        Ok(())
    }

    fn node(&mut self, external: u64) -> NodeId {
        let builder = &mut self.builder;
        *self.ids.entry(external).or_insert_with(|| builder.add_node())
    }

    fn is_empty(&self) -> bool {
        self.rows == 0
    }

    fn finish(self) -> TopologyResult<Topology> {
        if self.is_empty() {
            return Err(TopologyError::Parse("edge list is empty".to_owned()));
        }
        Ok(self.builder.build())
    }
}
