//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time; the sort is stable, so equal
//!    arrivals preserve input order.
//! 2. Walk the sorted list with a single time cursor, idling forward to
//!    the next arrival when the CPU would otherwise be empty.
//! 3. Each process runs to completion, producing exactly one block.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use crate::models::{Process, ProcessMetrics, SimulationResult, Timeline};

/// Runs First-Come-First-Served on the given processes.
///
/// Non-preemptive, run-to-completion. Completed records come back in
/// dispatch order.
pub fn fcfs(processes: &[Process]) -> SimulationResult {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time);

    let mut timeline = Timeline::new();
    let mut completed = Vec::with_capacity(order.len());
    let mut current_time = 0;

    for process in order {
        if current_time < process.arrival_time {
            current_time = process.arrival_time;
        }
        let start_time = current_time;
        current_time += process.burst_time;
        timeline.record(process, start_time, current_time);
        completed.push(ProcessMetrics::finalize(process, start_time, current_time));
    }

    SimulationResult::new(timeline, completed, processes.len())
}
