//! Error types for drt-sweep.

use std::path::PathBuf;

use thiserror::Error;

use drt_demand::DemandError;
use drt_engine::EngineError;
use drt_topology::TopologyError;

/// Errors raised while reading or writing a result store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("result store {} is unreadable: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("sweep point {index} is already stored")]
    DuplicatePoint { index: usize },

    #[error("sweep point {index} is outside a {points}-point grid")]
    PointOutOfRange { index: usize, points: usize },

    #[error("sweep point {index}: column `{column}` of {table} holds a non-finite value")]
    NonFinite { index: usize, table: &'static str, column: String },

    #[error("result store {} was written for a different sweep grid", path.display())]
    GridMismatch { path: PathBuf },
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Coarse failure classes, used for reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed inputs: files, keys, settings.
    Configuration,
    /// The topology cannot support the sweep (disconnected, too small).
    Precondition,
    /// Durable storage failed.
    Resource,
    /// The dispatch engine failed.
    Engine,
}

/// Any failure of one sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("invalid sweep configuration: {0}")]
    Config(String),

    #[error("sweep has already run")]
    AlreadyRun,

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Demand(#[from] DemandError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SweepError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SweepError::Config(_) | SweepError::AlreadyRun => ErrorKind::Configuration,
            SweepError::Topology(e) => topology_kind(e),
            SweepError::Demand(e) => match e {
                DemandError::Topology(t) => topology_kind(t),
                DemandError::InvalidGrid(_) => ErrorKind::Configuration,
                DemandError::InvalidRate(_)
                | DemandError::InvalidPathLength(_)
                | DemandError::TooFewNodes { .. } => ErrorKind::Precondition,
            },
            SweepError::Engine(_) | SweepError::Store(StoreError::NonFinite { .. }) => ErrorKind::Engine,
            SweepError::Store(StoreError::GridMismatch { .. }) => ErrorKind::Configuration,
            SweepError::Store(_) => ErrorKind::Resource,
        }
    }
}

fn topology_kind(e: &TopologyError) -> ErrorKind {
    if e.is_configuration() {
        ErrorKind::Configuration
    } else if e.is_precondition() {
        ErrorKind::Precondition
    } else {
        ErrorKind::Resource
    }
}

/// Alias for `Result<T, SweepError>`.
pub type SweepResult<T> = Result<T, SweepError>;
