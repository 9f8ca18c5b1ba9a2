//! `drt-topology`: topology graphs for the sweep harness.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`network`]    | `Topology` (undirected CSR), `TopologyBuilder`, `Edge`    |
//! | [`paths`]      | `PathMetric`, BFS/Dijkstra, average shortest path length  |
//! | [`generators`] | ring, line, star, grid, triangular lattice                |
//! | [`loader`]     | CSV edge-list loaders for precomputed street networks     |
//! | [`provider`]   | `TopologySpec`: build or load by name                    |
//! | [`error`]      | `TopologyError`, `TopologyResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | All-pairs shortest-path statistics run on Rayon.          |

pub mod error;
pub mod generators;
pub mod loader;
pub mod network;
pub mod paths;
pub mod provider;

#[cfg(test)]
mod tests;

pub use error::{TopologyError, TopologyResult};
pub use network::{Edge, Topology, TopologyBuilder};
pub use paths::PathMetric;
pub use provider::TopologySpec;
