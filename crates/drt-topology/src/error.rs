//! Topology-subsystem error type.

use std::path::PathBuf;

use thiserror::Error;

use drt_core::NodeId;

/// Errors produced by `drt-topology`.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("topology file {} not found", path.display())]
    MissingFile { path: PathBuf },

    #[error(
        "no coarse-grained graph for coarse_graining_m={coarse_graining_m}, \
         target_edge_length_m={target_edge_length_m}"
    )]
    UnknownCoarseGraining {
        coarse_graining_m:    u32,
        target_edge_length_m: u32,
    },

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("graph is disconnected: no path from {from} to {to}")]
    Disconnected { from: NodeId, to: NodeId },

    #[error("graph has {available} nodes, need at least {needed}")]
    TooFewNodes { needed: usize, available: usize },

    #[error("node {0} not found in topology")]
    NodeNotFound(NodeId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

impl TopologyError {
    /// Missing or malformed inputs.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TopologyError::MissingFile { .. }
                | TopologyError::UnknownCoarseGraining { .. }
                | TopologyError::Parse(_)
                | TopologyError::Csv(_)
        )
    }

    /// The graph exists but cannot support the requested computation.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            TopologyError::Disconnected { .. }
                | TopologyError::TooFewNodes { .. }
                | TopologyError::NodeNotFound(_)
        )
    }
}

pub type TopologyResult<T> = Result<T, TopologyError>;
