//! Priority scheduling (preemptive or non-preemptive).
//!
//! # Algorithm
//!
//! Tick-driven like SRTF, but selection compares priorities (lower
//! value = more urgent) with arrival time as the tie-break. In
//! preemptive mode every tick may switch to a newly arrived, more
//! urgent process; in non-preemptive mode a dispatched process keeps
//! the CPU until its remaining time reaches zero.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use crate::models::{Process, ProcessMetrics, SimulationResult, Timeline};

/// Runs Priority scheduling on the given processes.
///
/// Lower priority values are more urgent. Processes without a priority
/// sort last; validation rejects them before a Priority run.
pub fn priority(processes: &[Process], preemptive: bool) -> SimulationResult {
    let total = processes.len();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut first_dispatch: Vec<Option<i64>> = vec![None; total];
    let mut finished = vec![false; total];
    let mut completed = Vec::with_capacity(total);
    let mut timeline = Timeline::new();
    let mut incumbent: Option<usize> = None;
    let mut current_time = 0;

    while completed.len() < total {
        let Some(idx) = select(processes, &finished, incumbent, current_time, preemptive) else {
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

/// Index of the most urgent arrived process for this tick.
///
/// Comparator: `(priority, arrival_time)` compared strictly, so a full
/// tie keeps the incumbent. In non-preemptive mode the incumbent is
/// never displaced.
fn select(
    processes: &[Process],
    finished: &[bool],
    incumbent: Option<usize>,
    current_time: i64,
    preemptive: bool,
) -> Option<usize> {
    if !preemptive && incumbent.is_some() {
        return incumbent;
    }
    let mut selected = incumbent;
    for (idx, process) in processes.iter().enumerate() {
        if finished[idx] || process.arrival_time > current_time {
            continue;
        }
        selected = match selected {
            Some(best) if urgency(process) >= urgency(&processes[best]) => Some(best),
            _ => Some(idx),
        };
    }
    selected
}

fn urgency(process: &Process) -> (i32, i64) {
    (process.priority.unwrap_or(i32::MAX), process.arrival_time)
}
