//! `drt-engine`: the dispatch-engine seam of the sweep harness.
//!
//! The routing/insertion engine itself lives outside this workspace.  This
//! crate only fixes how the harness talks to it:
//!
//! | Item                  | Role                                            |
//! |-----------------------|-------------------------------------------------|
//! | [`EngineFactory`]     | construct an engine from `(topology, tag)`       |
//! | [`DispatchEngine`]    | `run(requests, start)`, then read results back   |
//! | [`ResultRecord`]      | `req_data` + `insertion_data`                   |
//! | [`MetricTable`]       | opaque named metric columns                     |
//! | [`NoopEngine`]        | placeholder that records requests verbatim      |

pub mod engine;
pub mod error;
pub mod noop;
pub mod record;


pub use engine::{DispatchEngine, EngineFactory};
pub use error::{EngineError, EngineResult};
pub use noop::{NoopEngine, NoopEngineFactory};
pub use record::{MetricTable, ResultRecord};
