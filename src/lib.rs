//! Discrete-event CPU-scheduling simulator.
//!
//! Computes exact execution timelines and per-process timing metrics for
//! five classical scheduling policies: First-Come-First-Served,
//! Shortest-Job-First, Shortest-Remaining-Time-First, Priority
//! (preemptive or non-preemptive), and quantum-based Round-Robin.
//!
//! All processes are known up front and time advances in discrete integer
//! units. Each policy is a pure function from the input process list to an
//! immutable [`models::SimulationResult`]; no state is shared between runs.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Process`, `ProcessMetrics`, `Timeline`,
//!   `ExecutionBlock`, `RunAverages`, `SimulationResult`
//! - **`policies`**: the five scheduling policies and the `Policy`/`simulate`
//!   entry point
//! - **`validation`**: caller-input integrity checks before a run
//! - **`comparison`**: run-wide averages collected across policies
//! - **`report`**: plain-text simulation reports
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
//! let result = simulate(&processes, Policy::Fcfs);
//! assert_eq!(result.makespan(), 9);
//! assert!((result.averages.waiting_time - 10.0 / 3.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod comparison;
pub mod models;
pub mod policies;
pub mod report;
pub mod validation;
