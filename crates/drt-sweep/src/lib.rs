//! `drt-sweep`: the rate sweep and everything around it.
//!
//! | Module             | Contents                                                   |
//! |--------------------|------------------------------------------------------------|
//! | [`config`]         | `SweepConfig`, `ResumePolicy`, `ExperimentConfig`          |
//! | [`store`]          | `ResultStore`: results keyed by grid point                 |
//! | [`writer`]         | `StoreWriter` trait                                        |
//! | [`json`]           | `JsonStoreWriter` (default backend)                        |
//! | `sqlite`           | `SqliteStoreWriter` (feature `sqlite`)                     |
//! | [`observer`]       | `SweepObserver` progress callbacks, `NoopObserver`         |
//! | [`driver`]         | `Sweep`, `SweepState`, `SweepOutcome`                      |
//! | [`orchestrator`]   | `Experiment`, `Orchestrator`, `RunReport`                  |
//!
//! # Feature flags
//!
//! | Feature    | Effect                                                         |
//! |------------|----------------------------------------------------------------|
//! | `sqlite`   | Enables `SqliteStoreWriter` via `rusqlite`                     |
//! | `parallel` | Enables `Orchestrator::run_parallel` and a parallel `l_avg`    |

pub mod config;
pub mod driver;
pub mod error;
pub mod json;
pub mod observer;
pub mod orchestrator;
pub mod store;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use config::{ExperimentConfig, ResumePolicy, SweepConfig};
pub use driver::{Sweep, SweepOutcome, SweepState};
pub use error::{ErrorKind, StoreError, StoreResult, SweepError, SweepResult};
pub use json::JsonStoreWriter;
pub use observer::{NoopObserver, SweepObserver};
pub use orchestrator::{Experiment, Orchestrator, RunReport};
pub use store::{ResultStore, StoreEntry};
pub use writer::StoreWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStoreWriter;
