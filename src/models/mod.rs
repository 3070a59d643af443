//! Core simulation models.
//!
//! Provides the data types shared by every scheduling policy: the input
//! process record, the execution timeline, and the simulation result.
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Process` | A unit of CPU demand (arrival, burst, optional priority) |
//! | `ProcessMetrics` | A completed process with derived timing metrics |
//! | `ExecutionBlock` | One contiguous interval of CPU occupancy |
//! | `Timeline` | The ordered, non-overlapping block sequence of a run |
//! | `RunAverages` | Mean waiting/turnaround/response time over a run |
//! | `SimulationResult` | The complete output of one policy invocation |

mod process;
mod result;
mod timeline;

pub use process::{Process, ProcessMetrics};
pub use result::{RunAverages, SimulationResult};
pub use timeline::{ExecutionBlock, Timeline};
