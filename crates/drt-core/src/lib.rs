//! `drt-core`: shared types for the `drt` dial-a-ride sweep harness.
//!
//! Every other `drt-*` crate depends on this one; it depends on none of them.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`                                    |
//! | [`request`]     | `Request`: one trip request of an arrival stream     |
//! | [`tag`]         | `TopologyTag`: route-volume bookkeeping selector     |
//! | [`rng`]         | `SimRng` (seeded, entropy-seeded, or per-stream)      |
//! | [`error`]       | `DrtError`, `DrtResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod request;
pub mod rng;
pub mod tag;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DrtError, DrtResult};
pub use ids::{EdgeId, NodeId};
pub use request::Request;
pub use rng::SimRng;
pub use tag::TopologyTag;
