//! Classical CPU scheduling policies.
//!
//! Five independent policies, each a pure function from the input
//! process list (plus policy parameters) to a complete
//! [`SimulationResult`]. No policy depends on another; they share only
//! the process/timeline/metrics vocabulary from [`crate::models`].
//!
//! # Policies
//!
//! | Policy | Preemption | Selection key |
//! |--------|-----------|---------------|
//! | FCFS | none | arrival time (stable on ties) |
//! | SJF | none | burst time (first-queued wins ties) |
//! | SRTF | every tick | remaining time (incumbent wins ties) |
//! | Priority | optional | (priority, arrival time), incumbent wins full ties |
//! | Round-Robin | per quantum | FIFO ready queue |
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::policies::{simulate, Policy};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 1),
//! ];
//!
//! let result = simulate(&processes, Policy::RoundRobin { quantum: 2 });
//! assert_eq!(result.block_count(), 6);
//! assert_eq!(result.metrics_for("P3").map(|m| m.completion_time), Some(5));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::fcfs;
pub use priority::priority;
pub use round_robin::round_robin;
pub use sjf::sjf;
pub use srtf::srtf;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, SimulationResult};

/// The closed set of scheduling policies, with their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive).
    Srtf,
    /// Priority scheduling (lower value = more urgent).
    Priority {
        /// Whether a later, more urgent arrival may displace the running
        /// process.
        preemptive: bool,
    },
    /// Round-Robin with a fixed time quantum (> 0).
    RoundRobin {
        /// Time slice granted per dispatch (ticks).
        quantum: i64,
    },
}

impl Policy {
    /// Stable policy name, used to key comparisons and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Srtf => "SRTF",
            Policy::Priority { .. } => "Priority",
            Policy::RoundRobin { .. } => "RoundRobin",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the selected policy on the given processes.
///
/// The input slice is never mutated; each invocation works on its own
/// private run state, so repeated runs on the same input are
/// bit-identical. Callers are expected to have passed the input through
/// [`crate::validation::validate_input`] first; the engine itself only
/// guards the empty-input case.
pub fn simulate(processes: &[Process], policy: Policy) -> SimulationResult {
    match policy {
        Policy::Fcfs => fcfs(processes),
        Policy::Sjf => sjf(processes),
        Policy::Srtf => srtf(processes),
        Policy::Priority { preemptive } => priority(processes, preemptive),
        Policy::RoundRobin { quantum } => round_robin(processes, quantum),
    }
}
