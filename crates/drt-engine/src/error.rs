use thiserror::Error;

use drt_core::NodeId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine has already run; build a new one per sweep point")]
    AlreadyRan,

    #[error("start node {0} is not in the topology")]
    InvalidStart(NodeId),

    #[error("dispatch engine failed: {0}")]
    Failed(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
