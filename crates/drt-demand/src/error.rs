use thiserror::Error;

use drt_topology::TopologyError;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("arrival rate {0} must be finite and positive")]
    InvalidRate(f64),

    #[error("average shortest path length {0} must be finite and positive")]
    InvalidPathLength(f64),

    #[error("arrival process needs at least 2 nodes, topology has {available}")]
    TooFewNodes { available: usize },

    #[error("invalid sweep grid: {0}")]
    InvalidGrid(String),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

pub type DemandResult<T> = Result<T, DemandError>;
