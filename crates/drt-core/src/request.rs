//! Trip requests produced by an arrival process.

use std::fmt;

use crate::NodeId;

/// One dial-a-ride trip request.
///
/// Requests are immutable once produced.  Within one stream `seq` runs
/// `1..=count` without gaps and `arrival_time` is strictly increasing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    /// 1-based position in the stream.
    pub seq: u64,
    /// Absolute arrival time in simulation time units.
    pub arrival_time: f64,
    pub origin: NodeId,
    /// Always differs from `origin`.
    pub destination: NodeId,
}

impl Request {
    pub fn new(seq: u64, arrival_time: f64, origin: NodeId, destination: NodeId) -> Self {
        Self { seq, arrival_time, origin, destination }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} @ {:.4}: {} -> {}",
            self.seq, self.arrival_time, self.origin.0, self.destination.0
        )
    }
}
