//! Shortest-Remaining-Time-First scheduling (preemptive).
//!
//! # Algorithm
//!
//! Tick-driven: every tick re-selects the arrived, unfinished process
//! with the least remaining time and runs it for one unit. A process
//! completes on the tick its remaining time reaches zero; idle ticks
//! advance the clock without emitting a block.
//!
//! # Tie-break
//!
//! The incumbent (the process that ran last tick) seeds the selection
//! and is displaced only by a strictly smaller remaining time, so an
//! exact tie never forces a context switch.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::{Process, ProcessMetrics, SimulationResult, Timeline};

/// Runs preemptive Shortest-Remaining-Time-First on the given processes.
pub fn srtf(processes: &[Process]) -> SimulationResult {
    let total = processes.len();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut first_dispatch: Vec<Option<i64>> = vec![None; total];
    let mut finished = vec![false; total];
    let mut completed = Vec::with_capacity(total);
    let mut timeline = Timeline::new();
    let mut incumbent: Option<usize> = None;
    let mut current_time = 0;

    while completed.len() < total {
        let Some(idx) = select(processes, &remaining, &finished, incumbent, current_time) else {
            // Idle tick: nothing has arrived yet.
            current_time += 1;
            continue;
        };
        let process = &processes[idx];
        let start_time = *first_dispatch[idx].get_or_insert(current_time);
        timeline.record(process, current_time, current_time + 1);
        remaining[idx] -= 1;
        current_time += 1;
        if remaining[idx] == 0 {
            finished[idx] = true;
            incumbent = None;
            completed.push(ProcessMetrics::finalize(process, start_time, current_time));
        } else {
            incumbent = Some(idx);
        }
    }

    SimulationResult::new(timeline, completed, total)
}

/// Index of the process to run this tick.
///
/// Comparator: `(remaining_time, keep incumbent)` — the incumbent seeds
/// the scan and a candidate displaces it only with strictly less
/// remaining time; with no incumbent, the scan keeps the first minimum
/// in input order.
fn select(
    processes: &[Process],
    remaining: &[i64],
    finished: &[bool],
    incumbent: Option<usize>,
    current_time: i64,
) -> Option<usize> {
    let mut selected = incumbent;
    for (idx, process) in processes.iter().enumerate() {
        if finished[idx] || process.arrival_time > current_time {
            continue;
        }
        selected = match selected {
            Some(best) if remaining[idx] >= remaining[best] => Some(best),
            _ => Some(idx),
        };
    }
    selected
}
