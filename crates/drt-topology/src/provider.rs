//! `TopologySpec`: a serialisable name for every topology an experiment can
//! run on, plus the code that builds or loads it.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use drt_core::TopologyTag;

use crate::{Topology, TopologyResult, generators, loader};

/// What to construct (synthetic) or load (street network) for a sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologySpec {
    Ring { nodes: usize },
    Line { nodes: usize },
    Star { leaves: usize },
    Grid { rows: usize, cols: usize },
    TriGrid { rows: usize, cols: usize },
    /// Homogenised street network stored as a CSV edge list.
    StreetNetwork { path: PathBuf },
    /// One variant of a coarse-grained street-network family.
    CoarseGrained {
        path:                 PathBuf,
        coarse_graining_m:    u32,
        target_edge_length_m: u32,
    },
}

impl TopologySpec {
    /// Build (synthetic) or load (file-backed) the graph.
    ///
    /// File-backed specs fail with `MissingFile` when the file is absent;
    /// the failure is not retried.
    pub fn load(&self) -> TopologyResult<Topology> {
        Ok(match self {
            TopologySpec::Ring { nodes }          => generators::ring(*nodes),
            TopologySpec::Line { nodes }          => generators::line(*nodes),
            TopologySpec::Star { leaves }         => generators::star(*leaves),
            TopologySpec::Grid { rows, cols }     => generators::grid(*rows, *cols),
            TopologySpec::TriGrid { rows, cols }  => generators::triangular_lattice(*rows, *cols),
            TopologySpec::StreetNetwork { path }  => loader::load_edge_list_csv(path)?,
            TopologySpec::CoarseGrained { path, coarse_graining_m, target_edge_length_m } => {
                loader::load_coarse_grained_csv(path, *coarse_graining_m, *target_edge_length_m)?
            }
        })
    }

    /// The engine tag conventionally paired with this topology.
    pub fn default_tag(&self) -> TopologyTag {
        match self {
            TopologySpec::Ring { .. }    => TopologyTag::Ring,
            TopologySpec::Line { .. }    => TopologyTag::Line,
            TopologySpec::Star { .. }    => TopologyTag::Star,
            TopologySpec::Grid { .. }    => TopologyTag::Grid,
            TopologySpec::TriGrid { .. } => TopologyTag::TriGrid,
            TopologySpec::StreetNetwork { .. } | TopologySpec::CoarseGrained { .. } => {
                TopologyTag::NoVolComp
            }
        }
    }

    /// `true` when [`load`](Self::load) reads from disk.
    pub fn is_file_backed(&self) -> bool {
        matches!(self, TopologySpec::StreetNetwork { .. } | TopologySpec::CoarseGrained { .. })
    }
}

impl fmt::Display for TopologySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologySpec::Ring { nodes }         => write!(f, "ring({nodes})"),
            TopologySpec::Line { nodes }         => write!(f, "line({nodes})"),
            TopologySpec::Star { leaves }        => write!(f, "star({leaves})"),
            TopologySpec::Grid { rows, cols }    => write!(f, "grid({rows}x{cols})"),
            TopologySpec::TriGrid { rows, cols } => write!(f, "trigrid({rows}x{cols})"),
            TopologySpec::StreetNetwork { path } => write!(f, "street network {}", path.display()),
            TopologySpec::CoarseGrained { path, coarse_graining_m, target_edge_length_m } => write!(
                f,
                "street network {} (coarse graining {coarse_graining_m} m, target edge length {target_edge_length_m} m)",
                path.display()
            ),
        }
    }
}
