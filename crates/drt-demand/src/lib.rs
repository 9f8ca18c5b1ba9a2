//! `drt-demand`: stochastic demand for the sweep harness.
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`arrival`] | `PoissonRequests`, a lazy request stream                  |
//! | [`rate`]    | `normalize`, `RateNormalizer`                            |
//! | [`grid`]    | `SweepGrid`, the fixed sequence of sweep values `x`     |
//! | [`error`]   | `DemandError`, `DemandResult<T>`                         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let topo = drt_topology::generators::ring(10);
//! let norm = RateNormalizer::for_topology(&topo, PathMetric::Hops)?;
//! let mut rng = SimRng::new(7);
//! for (i, x) in SweepGrid::default().iter() {
//!     let stream = PoissonRequests::new(&topo, 10_000, norm.rate(x), &mut rng)?;
//!     engine.run(stream, start)?;
//! }
//! ```

pub mod arrival;
pub mod error;
pub mod grid;
pub mod rate;


pub use arrival::PoissonRequests;
pub use error::{DemandError, DemandResult};
pub use grid::SweepGrid;
pub use rate::{RateNormalizer, normalize};
