//! Topology tags handed to the dispatch engine.
//!
//! The tag tells the engine whether (and which) route-volume bookkeeping to
//! perform.  `NoVolComp` disables it; it is used for large street networks
//! where the accounting would be expensive.

use std::str::FromStr;

use crate::DrtError;

/// Closed set of topology labels understood by the dispatch engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TopologyTag {
    Ring,
    Line,
    Star,
    Grid,
    TriGrid,
    /// No route-volume computation.
    #[default]
    NoVolComp,
}

impl TopologyTag {
    pub const ALL: [TopologyTag; 6] = [
        TopologyTag::Ring,
        TopologyTag::Line,
        TopologyTag::Star,
        TopologyTag::Grid,
        TopologyTag::TriGrid,
        TopologyTag::NoVolComp,
    ];

    /// `true` for every tag except `NoVolComp`.
    #[inline]
    pub fn computes_volumes(self) -> bool {
        !matches!(self, TopologyTag::NoVolComp)
    }

    /// Label used in file names and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            TopologyTag::Ring      => "ring",
            TopologyTag::Line      => "line",
            TopologyTag::Star      => "star",
            TopologyTag::Grid      => "grid",
            TopologyTag::TriGrid   => "trigrid",
            TopologyTag::NoVolComp => "novolcomp",
        }
    }
}

impl std::fmt::Display for TopologyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyTag {
    type Err = DrtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopologyTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s.trim())
            .ok_or_else(|| {
                DrtError::Parse(format!(
                    "unknown topology tag {s:?}: expected one of ring, line, star, grid, trigrid, novolcomp"
                ))
            })
    }
}
