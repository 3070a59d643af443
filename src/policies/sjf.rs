//! Shortest-Job-First scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! At each decision point, scan the arrived-but-not-yet-run processes
//! and dispatch the one with the smallest burst time; it then runs to
//! completion. When nothing has arrived, jump the clock to the next
//! arrival.
//!
//! # Tie-break
//!
//! The scan keeps the first strictly smaller burst it finds, so equal
//! bursts go to the process closer to the front of the residual queue
//! (input order) — not necessarily the earliest arrival.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::{Process, ProcessMetrics, SimulationResult, Timeline};

/// Runs non-preemptive Shortest-Job-First on the given processes.
pub fn sjf(processes: &[Process]) -> SimulationResult {
    let mut queue: Vec<&Process> = processes.iter().collect();
    let mut timeline = Timeline::new();
    let mut completed = Vec::with_capacity(queue.len());
    let mut current_time = 0;

    while !queue.is_empty() {
        let Some(pos) = pick_shortest(&queue, current_time) else {
            // Nothing has arrived; jump to the next arrival.
            if let Some(next) = queue.iter().map(|p| p.arrival_time).min() {
                current_time = next;
            }
            continue;
        };
        let process = queue.remove(pos);
        let start_time = current_time;
        current_time += process.burst_time;
        timeline.record(process, start_time, current_time);
        completed.push(ProcessMetrics::finalize(process, start_time, current_time));
    }

    SimulationResult::new(timeline, completed, processes.len())
}

/// Position of the arrived process with the shortest burst time.
///
/// Comparator: `(burst_time, queue position)` — the candidate is
/// displaced only by a strictly smaller burst, so ties keep the
/// earlier-queued process.
fn pick_shortest(queue: &[&Process], current_time: i64) -> Option<usize> {
    let mut selected: Option<usize> = None;
    for (pos, process) in queue.iter().enumerate() {
        if process.arrival_time > current_time {
            continue;
        }
        selected = match selected {
            Some(best) if process.burst_time >= queue[best].burst_time => Some(best),
            _ => Some(pos),
        };
    }
    selected
}
